//! foodlogger-core: Pure analytics and classification engine for the food diary

pub mod classify;
pub mod entry;
pub mod insights;
pub mod reminders;
pub mod streak;
pub mod time;
pub mod tokenize;
pub mod weekly;

pub use classify::classify;
pub use entry::{FoodEntry, InputType, MealCategory, MoodTag, SAMPLE_PREFIX};
pub use insights::{
    AnalyticsPeriod, CategoryCount, DailyCount, DayActivity, FoodItemFrequency, HourCount,
    InputTypeCount, ItemPair, WeekComparison, category_distribution, co_occurrence, daily_counts,
    filter_by_period, input_type_breakdown, meal_timing, monthly_heatmap, top_items,
    week_over_week_trend,
};
pub use reminders::{
    ReminderIntent, ReminderPolicy, project_daily_reminders, project_weekly_recap,
};
pub use streak::{StreakInfo, compute_streak};
pub use tokenize::{STOPWORDS, basic_tokens, strict_tokens};
pub use weekly::{HeadlineType, WeeklySummary, generate_summary, headline_type};
