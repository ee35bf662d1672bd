//! Weekly recap: one Monday-to-Sunday snapshot plus a generated
//! headline/subheadline pair.
//!
//! `vs_last_week` compares calendar-week windows on `date`, while the
//! insights trend compares rolling timestamp windows on `created_at`; the
//! two answer different questions and stay separate.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::entry::{FoodEntry, MealCategory};
use crate::streak::compute_streak;
use crate::tokenize::strict_tokens;

/// Weekly recap tokens must carry real food signal, so anything under three
/// characters is dropped.
const MIN_TOKEN_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    /// Monday of the summarised week.
    pub week_start: NaiveDate,
    pub total_entries: usize,
    pub top_food_item: Option<String>,
    pub top_food_count: usize,
    pub top_category: Option<MealCategory>,
    /// Day with the most entries; `None` when the week is empty.
    pub best_day: Option<NaiveDate>,
    /// Streak over the full history, not just this week.
    pub current_streak: usize,
    /// Longest run of consecutive logged days strictly within Mon-Sun.
    pub longest_streak: usize,
    pub unique_foods_count: usize,
    /// This week's entry count minus last week's; negative means fewer.
    pub vs_last_week: i64,
    pub most_active_hour: Option<u32>,
    pub headline: String,
    pub subheadline: String,
    pub missed_days: usize,
    pub category_breakdown: BTreeMap<MealCategory, usize>,
    /// Zero-filled Mon-Sun counts.
    pub daily_entry_counts: BTreeMap<NaiveDate, usize>,
}

/// Which statistic the headline leads with. The subheadline deliberately
/// leads with a different one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlineType {
    Streak,
    TopFood,
    Improvement,
    Perfect,
    Default,
}

/// Snapshot the calendar week (Mon-Sun) containing `now`.
pub fn generate_summary(entries: &[FoodEntry], now: NaiveDateTime) -> WeeklySummary {
    let today = now.date();
    let days_from_monday = today.weekday().num_days_from_monday() as i64;
    let week_start = today - Duration::days(days_from_monday);
    let week_end = week_start + Duration::days(7);
    let last_week_start = week_start - Duration::days(7);

    let this_week: Vec<&FoodEntry> = entries
        .iter()
        .filter(|e| e.date >= week_start && e.date < week_end)
        .collect();
    let last_week_count = entries
        .iter()
        .filter(|e| e.date >= last_week_start && e.date < week_start)
        .count();

    let mut daily_entry_counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for offset in 0..7 {
        daily_entry_counts.insert(week_start + Duration::days(offset), 0);
    }
    for entry in &this_week {
        *daily_entry_counts.entry(entry.date).or_insert(0) += 1;
    }

    let missed_days = daily_entry_counts.values().filter(|&&c| c == 0).count();

    // Strictly-greater comparisons throughout: the earliest candidate wins
    // ties, and an empty week yields None rather than an arbitrary zero day.
    let mut best_day: Option<NaiveDate> = None;
    let mut best_count = 0;
    for (&day, &count) in &daily_entry_counts {
        if count > best_count {
            best_count = count;
            best_day = Some(day);
        }
    }

    let mut token_freq: BTreeMap<String, usize> = BTreeMap::new();
    for entry in &this_week {
        for token in strict_tokens(&entry.processed_description, MIN_TOKEN_LEN) {
            *token_freq.entry(token).or_insert(0) += 1;
        }
    }
    let unique_foods_count = token_freq.len();
    let mut top_food_item: Option<String> = None;
    let mut top_food_count = 0;
    for (token, &count) in &token_freq {
        if count > top_food_count {
            top_food_count = count;
            top_food_item = Some(token.clone());
        }
    }

    let mut cat_freq: HashMap<MealCategory, usize> = HashMap::new();
    for entry in &this_week {
        if let Some(cat) = entry.category {
            *cat_freq.entry(cat).or_insert(0) += 1;
        }
    }
    let mut top_category: Option<MealCategory> = None;
    let mut top_category_count = 0;
    for cat in MealCategory::ALL {
        let count = cat_freq.get(&cat).copied().unwrap_or(0);
        if count > top_category_count {
            top_category_count = count;
            top_category = Some(cat);
        }
    }
    let category_breakdown: BTreeMap<MealCategory, usize> = cat_freq.into_iter().collect();

    let mut hour_freq = [0usize; 24];
    for entry in &this_week {
        hour_freq[entry.created_at.hour() as usize] += 1;
    }
    let mut most_active_hour: Option<u32> = None;
    let mut most_active_count = 0;
    for (hour, &count) in hour_freq.iter().enumerate() {
        if count > most_active_count {
            most_active_count = count;
            most_active_hour = Some(hour as u32);
        }
    }

    let current_streak = compute_streak(entries, today).count;

    let mut longest_streak = 0;
    let mut run = 0;
    for &count in daily_entry_counts.values() {
        if count > 0 {
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 0;
        }
    }

    let vs_last_week = this_week.len() as i64 - last_week_count as i64;

    let mut summary = WeeklySummary {
        week_start,
        total_entries: this_week.len(),
        top_food_item,
        top_food_count,
        top_category,
        best_day,
        current_streak,
        longest_streak,
        unique_foods_count,
        vs_last_week,
        most_active_hour,
        headline: String::new(),
        subheadline: String::new(),
        missed_days,
        category_breakdown,
        daily_entry_counts,
    };
    summary.headline = headline_for(&summary);
    summary.subheadline = subheadline_for(&summary);
    summary
}

/// First matching rule wins.
pub fn headline_type(summary: &WeeklySummary) -> HeadlineType {
    if summary.current_streak > 7 {
        return HeadlineType::Streak;
    }
    if summary.top_food_count >= 3 {
        return HeadlineType::TopFood;
    }
    if summary.vs_last_week > 3 {
        return HeadlineType::Improvement;
    }
    if summary.missed_days == 0 {
        return HeadlineType::Perfect;
    }
    HeadlineType::Default
}

pub fn headline_for(summary: &WeeklySummary) -> String {
    match headline_type(summary) {
        HeadlineType::Streak => {
            let days = summary.current_streak;
            format!("{days} days and counting 🔥")
        }
        HeadlineType::TopFood => {
            let food = match &summary.top_food_item {
                Some(item) => capitalize(item),
                None => "That dish".to_string(),
            };
            let times = summary.top_food_count;
            format!("{food} week it is 🍛 — you had it {times} times")
        }
        HeadlineType::Improvement => "Your most active week in a while 📈".to_string(),
        HeadlineType::Perfect => "Perfect week — not a single day missed ✨".to_string(),
        HeadlineType::Default => {
            let cat_name = match summary.top_category {
                Some(cat) => cat.display_name(),
                None => "your meals",
            };
            let total = summary.total_entries;
            format!("{total} meals logged. {cat_name} was your go-to.")
        }
    }
}

/// Leads with a different statistic than the headline already used, falling
/// back per type when that statistic is unavailable.
pub fn subheadline_for(summary: &WeeklySummary) -> String {
    match headline_type(summary) {
        HeadlineType::Streak => match &summary.top_food_item {
            Some(food) if summary.top_food_count >= 2 => {
                let times = summary.top_food_count;
                format!("You had {food} {times} times — a clear favourite this week.")
            }
            _ => {
                let total = summary.total_entries;
                let days = 7 - summary.missed_days;
                format!("You logged {total} meals across {days} days.")
            }
        },
        HeadlineType::TopFood => {
            if summary.current_streak > 1 {
                let days = summary.current_streak;
                format!("You're on a {days}-day logging streak. Keep it up!")
            } else {
                let foods = summary.unique_foods_count;
                format!("You tried {foods} different foods this week.")
            }
        }
        HeadlineType::Improvement => {
            if summary.missed_days == 0 {
                "You logged every single day — a perfect week.".to_string()
            } else {
                let days = 7 - summary.missed_days;
                format!("You logged {days} out of 7 days.")
            }
        }
        HeadlineType::Perfect => {
            if summary.current_streak > 3 {
                let days = summary.current_streak;
                format!("You're on a {days}-day streak — amazing consistency.")
            } else {
                match &summary.top_food_item {
                    Some(food) if summary.top_food_count >= 2 => {
                        let food = capitalize(food);
                        format!("{food} was your most-logged food this week.")
                    }
                    _ => {
                        let total = summary.total_entries;
                        format!("You logged {total} meals total. Well done.")
                    }
                }
            }
        }
        HeadlineType::Default => {
            if summary.current_streak > 1 {
                let days = summary.current_streak;
                format!("You're on a {days}-day streak. Keep logging!")
            } else if summary.unique_foods_count > 5 {
                let foods = summary.unique_foods_count;
                format!("You explored {foods} different foods this week.")
            } else {
                "Log every day and you'll build a great streak.".to_string()
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
