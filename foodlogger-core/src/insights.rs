//! Aggregate analytics over entry collections.
//!
//! Every operation is a pure function of the entry slice and an explicit
//! `now`; nothing here reads the clock. Recency filtering uses `created_at`
//! (when it was logged), while per-day grouping uses `date` (which day the
//! meal belongs to), so a back-dated entry counts toward its chosen day but
//! only shows up in windows covering the moment it was written.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::entry::{FoodEntry, InputType, MealCategory};
use crate::tokenize::strict_tokens;

/// Minimum token length for frequency analytics; single letters are noise.
const MIN_TOKEN_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsPeriod {
    Week,
    Month,
    ThreeMonths,
    Year,
    AllTime,
}

impl AnalyticsPeriod {
    pub const ALL: [AnalyticsPeriod; 5] = [
        AnalyticsPeriod::Week,
        AnalyticsPeriod::Month,
        AnalyticsPeriod::ThreeMonths,
        AnalyticsPeriod::Year,
        AnalyticsPeriod::AllTime,
    ];

    /// Window length in days, `None` for the unbounded period.
    pub fn window_days(self) -> Option<i64> {
        match self {
            AnalyticsPeriod::Week => Some(7),
            AnalyticsPeriod::Month => Some(30),
            AnalyticsPeriod::ThreeMonths => Some(90),
            AnalyticsPeriod::Year => Some(365),
            AnalyticsPeriod::AllTime => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalyticsPeriod::Week => "Week",
            AnalyticsPeriod::Month => "Month",
            AnalyticsPeriod::ThreeMonths => "3 Months",
            AnalyticsPeriod::Year => "Year",
            AnalyticsPeriod::AllTime => "All Time",
        }
    }

    pub fn parse(text: &str) -> Option<AnalyticsPeriod> {
        match text.to_lowercase().as_str() {
            "week" => Some(AnalyticsPeriod::Week),
            "month" => Some(AnalyticsPeriod::Month),
            "3months" | "three-months" => Some(AnalyticsPeriod::ThreeMonths),
            "year" => Some(AnalyticsPeriod::Year),
            "all" | "all-time" | "alltime" => Some(AnalyticsPeriod::AllTime),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodItemFrequency {
    pub item: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryCount {
    pub category: MealCategory,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputTypeCount {
    pub input_type: InputType,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekComparison {
    pub this_week: usize,
    pub last_week: usize,
    pub change_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemPair {
    pub item1: String,
    pub item2: String,
    pub count: usize,
}

/// Keep entries logged within the period's recency window ending at `now`.
pub fn filter_by_period(
    entries: &[FoodEntry],
    period: AnalyticsPeriod,
    now: NaiveDateTime,
) -> Vec<&FoodEntry> {
    match period.window_days() {
        None => entries.iter().collect(),
        Some(days) => {
            let cutoff = now - Duration::days(days);
            entries.iter().filter(|e| e.created_at >= cutoff).collect()
        }
    }
}

/// Most frequent description tokens, count descending. Ties break
/// alphabetically so repeated calls rank identically.
pub fn top_items(
    entries: &[FoodEntry],
    period: AnalyticsPeriod,
    limit: usize,
    now: NaiveDateTime,
) -> Vec<FoodItemFrequency> {
    let filtered = filter_by_period(entries, period, now);
    let mut freq: HashMap<String, usize> = HashMap::new();

    for entry in &filtered {
        for word in strict_tokens(&entry.processed_description, MIN_TOKEN_LEN) {
            *freq.entry(word).or_insert(0) += 1;
        }
    }

    let mut items: Vec<FoodItemFrequency> = freq
        .into_iter()
        .map(|(item, count)| FoodItemFrequency { item, count })
        .collect();
    items.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item)));
    items.truncate(limit);
    items
}

/// Entries per calendar day (grouped by `date`). Bounded periods are
/// zero-filled over every day in the window, both endpoints inclusive, so a
/// 7-day window yields 8 rows. All-time returns only days that have entries,
/// ascending.
pub fn daily_counts(
    entries: &[FoodEntry],
    period: AnalyticsPeriod,
    now: NaiveDateTime,
) -> Vec<DailyCount> {
    let filtered = filter_by_period(entries, period, now);
    let mut count_map: HashMap<NaiveDate, usize> = HashMap::new();
    for entry in &filtered {
        *count_map.entry(entry.date).or_insert(0) += 1;
    }

    match period.window_days() {
        None => {
            let mut rows: Vec<DailyCount> = count_map
                .into_iter()
                .map(|(date, count)| DailyCount { date, count })
                .collect();
            rows.sort_by_key(|r| r.date);
            rows
        }
        Some(days) => {
            let start = (now - Duration::days(days)).date();
            let end = now.date();
            let mut rows = Vec::new();
            let mut current = start;
            while current <= end {
                rows.push(DailyCount {
                    date: current,
                    count: count_map.get(&current).copied().unwrap_or(0),
                });
                current += Duration::days(1);
            }
            rows
        }
    }
}

/// Per-category counts and percentages, count descending. Untagged entries
/// contribute to the percentage denominator but get no row, so the
/// percentages sum below 100 whenever untagged entries exist.
pub fn category_distribution(
    entries: &[FoodEntry],
    period: AnalyticsPeriod,
    now: NaiveDateTime,
) -> Vec<CategoryCount> {
    let filtered = filter_by_period(entries, period, now);
    let total = filtered.len();
    let mut freq: HashMap<MealCategory, usize> = HashMap::new();
    for entry in &filtered {
        if let Some(cat) = entry.category {
            *freq.entry(cat).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<CategoryCount> = MealCategory::ALL
        .iter()
        .filter_map(|&category| {
            let count = freq.get(&category).copied().unwrap_or(0);
            if count == 0 {
                return None;
            }
            let percentage = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            Some(CategoryCount {
                category,
                count,
                percentage,
            })
        })
        .collect();
    // Stable sort: equal counts keep category declaration order.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Per-input-type counts and percentages, count descending. Every entry has
/// a type, so the percentages sum to 100 for any non-empty filtered set.
pub fn input_type_breakdown(
    entries: &[FoodEntry],
    period: AnalyticsPeriod,
    now: NaiveDateTime,
) -> Vec<InputTypeCount> {
    let filtered = filter_by_period(entries, period, now);
    let total = filtered.len();
    let mut freq: HashMap<InputType, usize> = HashMap::new();
    for entry in &filtered {
        *freq.entry(entry.input_type).or_insert(0) += 1;
    }

    let mut rows: Vec<InputTypeCount> = InputType::ALL
        .iter()
        .filter_map(|&input_type| {
            let count = freq.get(&input_type).copied().unwrap_or(0);
            if count == 0 {
                return None;
            }
            let percentage = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            Some(InputTypeCount {
                input_type,
                count,
                percentage,
            })
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Histogram of logging hour (from `created_at`), always all 24 buckets.
pub fn meal_timing(
    entries: &[FoodEntry],
    period: AnalyticsPeriod,
    now: NaiveDateTime,
) -> Vec<HourCount> {
    let filtered = filter_by_period(entries, period, now);
    let mut buckets = [0usize; 24];
    for entry in &filtered {
        buckets[entry.created_at.hour() as usize] += 1;
    }
    buckets
        .iter()
        .enumerate()
        .map(|(hour, &count)| HourCount {
            hour: hour as u32,
            count,
        })
        .collect()
}

/// Entries logged in the trailing 7 days versus the 7 days before that,
/// on exact timestamp boundaries. Ignores the period parameter entirely.
pub fn week_over_week_trend(entries: &[FoodEntry], now: NaiveDateTime) -> WeekComparison {
    let seven_days_ago = now - Duration::days(7);
    let fourteen_days_ago = now - Duration::days(14);

    let this_week = entries
        .iter()
        .filter(|e| e.created_at >= seven_days_ago && e.created_at <= now)
        .count();
    let last_week = entries
        .iter()
        .filter(|e| e.created_at >= fourteen_days_ago && e.created_at < seven_days_ago)
        .count();

    let change_percent = if last_week == 0 {
        if this_week > 0 { 100.0 } else { 0.0 }
    } else {
        (this_week as f64 - last_week as f64) / last_week as f64 * 100.0
    };

    WeekComparison {
        this_week,
        last_week,
        change_percent,
    }
}

/// Zero-filled per-day counts for the calendar month containing `month`,
/// matching entries on `date` year and month.
pub fn monthly_heatmap(entries: &[FoodEntry], month: NaiveDate) -> Vec<DayActivity> {
    let mut count_map: HashMap<NaiveDate, usize> = HashMap::new();
    for entry in entries {
        if entry.date.year() == month.year() && entry.date.month() == month.month() {
            *count_map.entry(entry.date).or_insert(0) += 1;
        }
    }

    let mut rows = Vec::new();
    let mut current = month.with_day(1).unwrap_or(month);
    while current.month() == month.month() {
        rows.push(DayActivity {
            date: current,
            count: count_map.get(&current).copied().unwrap_or(0),
        });
        current += Duration::days(1);
    }
    rows
}

/// Pairs of distinct tokens logged on the same calendar day, count
/// descending. Token sets are unioned across a day's entries first, so the
/// pairing is per day, not per entry, and each pair counts once per day.
pub fn co_occurrence(
    entries: &[FoodEntry],
    period: AnalyticsPeriod,
    limit: usize,
    now: NaiveDateTime,
) -> Vec<ItemPair> {
    let filtered = filter_by_period(entries, period, now);

    let mut day_items: HashMap<NaiveDate, BTreeSet<String>> = HashMap::new();
    for entry in &filtered {
        day_items
            .entry(entry.date)
            .or_default()
            .extend(strict_tokens(&entry.processed_description, MIN_TOKEN_LEN));
    }

    let mut pair_count: HashMap<(String, String), usize> = HashMap::new();
    for items in day_items.values() {
        // BTreeSet iterates sorted, so pairs come out alphabetically ordered.
        let sorted: Vec<&String> = items.iter().collect();
        for i in 0..sorted.len() {
            for j in (i + 1)..sorted.len() {
                *pair_count
                    .entry((sorted[i].clone(), sorted[j].clone()))
                    .or_insert(0) += 1;
            }
        }
    }

    let mut rows: Vec<ItemPair> = pair_count
        .into_iter()
        .map(|((item1, item2), count)| ItemPair {
            item1,
            item2,
            count,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.item1.cmp(&b.item1))
            .then_with(|| a.item2.cmp(&b.item2))
    });
    rows.truncate(limit);
    rows
}
