use chrono::{Datelike, NaiveDate, NaiveDateTime};
use foodlogger_core::insights::{
    AnalyticsPeriod, category_distribution, co_occurrence, daily_counts, filter_by_period,
    input_type_breakdown, meal_timing, monthly_heatmap, top_items,
};
use foodlogger_core::weekly::generate_summary;
use foodlogger_sample::{SAMPLE_SEED, generate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 19).unwrap()
}

fn now() -> NaiveDateTime {
    today().and_hms_opt(23, 59, 0).unwrap()
}

/// Seeded-fixture regression: every sample entry is tagged, so category
/// percentages must cover the whole distribution.
#[test]
fn test_distributions_from_sample_history() {
    let entries = generate(SAMPLE_SEED, today());

    let categories = category_distribution(&entries, AnalyticsPeriod::AllTime, now());
    assert!(!categories.is_empty());
    let category_sum: f64 = categories.iter().map(|c| c.percentage).sum();
    assert!((category_sum - 100.0).abs() < 1e-6, "sum was {category_sum}");
    for pair in categories.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }

    let types = input_type_breakdown(&entries, AnalyticsPeriod::AllTime, now());
    assert_eq!(types.len(), 3);
    let type_sum: f64 = types.iter().map(|t| t.percentage).sum();
    assert!((type_sum - 100.0).abs() < 1e-6, "sum was {type_sum}");
}

/// Sample timestamps only ever land in the four meal slots, so the timing
/// histogram must stay empty everywhere else.
#[test]
fn test_meal_timing_respects_slot_hours() {
    let entries = generate(SAMPLE_SEED, today());
    let rows = meal_timing(&entries, AnalyticsPeriod::AllTime, now());
    assert_eq!(rows.len(), 24);

    let slot_hours = [7, 8, 9, 12, 13, 14, 15, 16, 19, 20, 21];
    let mut logged = 0;
    for row in &rows {
        if slot_hours.contains(&row.hour) {
            logged += row.count;
        } else {
            assert_eq!(row.count, 0, "unexpected entries at hour {}", row.hour);
        }
    }
    assert_eq!(logged, entries.len());
}

#[test]
fn test_daily_counts_reconcile_with_period_filter() {
    let entries = generate(SAMPLE_SEED, today());

    let week_rows = daily_counts(&entries, AnalyticsPeriod::Week, now());
    assert_eq!(week_rows.len(), 8);
    let week_total: usize = week_rows.iter().map(|r| r.count).sum();
    let filtered = filter_by_period(&entries, AnalyticsPeriod::Week, now());
    assert_eq!(week_total, filtered.len());

    let all_rows = daily_counts(&entries, AnalyticsPeriod::AllTime, now());
    assert!(all_rows.iter().all(|r| r.count > 0));
    for pair in all_rows.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    let all_total: usize = all_rows.iter().map(|r| r.count).sum();
    assert_eq!(all_total, entries.len());
}

/// The weekly snapshot must agree with its own daily counts and with a
/// direct recount of the previous week.
#[test]
fn test_weekly_summary_is_self_consistent() {
    let entries = generate(SAMPLE_SEED, today());
    let summary = generate_summary(&entries, now());

    // 2026-08-19 is a Wednesday.
    assert_eq!(summary.week_start, NaiveDate::from_ymd_opt(2026, 8, 17).unwrap());
    assert_eq!(summary.daily_entry_counts.len(), 7);

    let daily_total: usize = summary.daily_entry_counts.values().sum();
    assert_eq!(summary.total_entries, daily_total);

    let last_week_start = summary.week_start - chrono::Duration::days(7);
    let last_week = entries
        .iter()
        .filter(|e| e.date >= last_week_start && e.date < summary.week_start)
        .count();
    assert_eq!(
        summary.vs_last_week,
        summary.total_entries as i64 - last_week as i64
    );

    assert!(!summary.headline.is_empty());
    assert!(!summary.subheadline.is_empty());
}

/// Multi-word catalogue names guarantee same-day token pairs.
#[test]
fn test_co_occurrence_from_sample_days() {
    let entries = generate(SAMPLE_SEED, today());
    let pairs = co_occurrence(&entries, AnalyticsPeriod::AllTime, 10, now());
    assert!(!pairs.is_empty());
    assert!(pairs.len() <= 10);
    for pair in &pairs {
        assert!(pair.item1 < pair.item2, "pairs must be ordered alphabetically");
        assert!(pair.count >= 1);
    }
    for pair in pairs.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
}

#[test]
fn test_heatmap_covers_current_month() {
    let entries = generate(SAMPLE_SEED, today());
    let rows = monthly_heatmap(&entries, today());
    assert_eq!(rows.len(), 31);

    let in_month = entries
        .iter()
        .filter(|e| e.date.year() == 2026 && e.date.month() == 8)
        .count();
    let row_total: usize = rows.iter().map(|r| r.count).sum();
    assert_eq!(row_total, in_month);
}

/// End-to-end determinism: two seeded histories rank identically.
#[test]
fn test_rankings_reproduce_across_generations() {
    let first = top_items(&generate(SAMPLE_SEED, today()), AnalyticsPeriod::AllTime, 10, now());
    let second = top_items(&generate(SAMPLE_SEED, today()), AnalyticsPeriod::AllTime, 10, now());
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
}
