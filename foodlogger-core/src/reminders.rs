//! Reminder projection: the notification schedule computed as plain data,
//! handed to whatever platform scheduler the caller wires up.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

pub const DAILY_REMINDER_TITLE: &str = "Food Journal";
pub const DAILY_REMINDER_BODY: &str = "Don't forget to log what you ate today 🍽️";
pub const WEEKLY_RECAP_TITLE: &str = "Your Week in Review 📊";

/// Platform notification centers cap pending requests, so the daily series
/// projects two weeks and the caller re-projects a fresh window on every
/// scheduling pass.
const REMINDER_WINDOW_DAYS: i64 = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderIntent {
    pub id: String,
    pub title: String,
    pub body: String,
    pub fire_at: NaiveDateTime,
    pub repeats: bool,
}

/// When the daily reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderPolicy {
    pub hour: u32,
    pub minute: u32,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        ReminderPolicy {
            hour: 20,
            minute: 0,
        }
    }
}

/// One reminder per day for the next two weeks at the policy time. Today's
/// slot is skipped when the user already logged, and a fire time must lie
/// strictly in the future.
pub fn project_daily_reminders(
    policy: ReminderPolicy,
    has_logged_today: bool,
    now: NaiveDateTime,
) -> Vec<ReminderIntent> {
    let today = now.date();
    let mut intents = Vec::new();

    for day_offset in 0..REMINDER_WINDOW_DAYS {
        if day_offset == 0 && has_logged_today {
            continue;
        }
        let target = today + Duration::days(day_offset);
        let fire_at = match target.and_hms_opt(policy.hour, policy.minute, 0) {
            Some(t) => t,
            None => continue,
        };
        if fire_at <= now {
            continue;
        }
        intents.push(ReminderIntent {
            id: format!("daily-reminder-{day_offset}"),
            title: DAILY_REMINDER_TITLE.to_string(),
            body: DAILY_REMINDER_BODY.to_string(),
            fire_at,
            repeats: false,
        });
    }
    intents
}

/// The repeating Sunday-evening (19:00) recap carrying the week's headline
/// as its body.
pub fn project_weekly_recap(headline: &str, now: NaiveDateTime) -> ReminderIntent {
    let today = now.date();
    let days_to_sunday = 6 - today.weekday().num_days_from_monday() as i64;
    let sunday = today + Duration::days(days_to_sunday);
    let mut fire_at = sunday.and_time(NaiveTime::MIN) + Duration::hours(19);
    if fire_at <= now {
        fire_at += Duration::days(7);
    }
    ReminderIntent {
        id: "weekly-recap".to_string(),
        title: WEEKLY_RECAP_TITLE.to_string(),
        body: headline.to_string(),
        fire_at,
        repeats: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn projects_two_weeks_of_daily_slots() {
        let now = at(2026, 8, 19, 12, 0);
        let intents = project_daily_reminders(ReminderPolicy::default(), false, now);
        assert_eq!(intents.len(), 14);
        assert_eq!(intents[0].id, "daily-reminder-0");
        assert_eq!(intents[0].fire_at, at(2026, 8, 19, 20, 0));
        assert_eq!(intents[13].fire_at, at(2026, 9, 1, 20, 0));
        assert!(intents.iter().all(|i| !i.repeats));
        assert!(intents.iter().all(|i| i.title == "Food Journal"));
    }

    #[test]
    fn skips_today_when_already_logged() {
        let now = at(2026, 8, 19, 12, 0);
        let intents = project_daily_reminders(ReminderPolicy::default(), true, now);
        assert_eq!(intents.len(), 13);
        assert_eq!(intents[0].id, "daily-reminder-1");
    }

    #[test]
    fn skips_today_when_fire_time_already_passed() {
        let now = at(2026, 8, 19, 21, 0);
        let intents = project_daily_reminders(ReminderPolicy::default(), false, now);
        assert_eq!(intents.len(), 13);
        assert_eq!(intents[0].fire_at, at(2026, 8, 20, 20, 0));
    }

    #[test]
    fn custom_policy_time_is_respected() {
        let now = at(2026, 8, 19, 6, 0);
        let policy = ReminderPolicy { hour: 7, minute: 30 };
        let intents = project_daily_reminders(policy, false, now);
        assert_eq!(intents[0].fire_at, at(2026, 8, 19, 7, 30));
    }

    #[test]
    fn recap_targets_the_coming_sunday_evening() {
        // Wednesday; Sunday is the 23rd.
        let now = at(2026, 8, 19, 12, 0);
        let recap = project_weekly_recap("10 days and counting 🔥", now);
        assert_eq!(recap.id, "weekly-recap");
        assert_eq!(recap.title, "Your Week in Review 📊");
        assert_eq!(recap.body, "10 days and counting 🔥");
        assert_eq!(recap.fire_at, at(2026, 8, 23, 19, 0));
        assert!(recap.repeats);
    }

    #[test]
    fn recap_rolls_to_next_week_once_sunday_evening_passed() {
        let now = at(2026, 8, 23, 20, 0);
        let recap = project_weekly_recap("headline", now);
        assert_eq!(recap.fire_at, at(2026, 8, 30, 19, 0));

        let exactly = at(2026, 8, 23, 19, 0);
        let recap = project_weekly_recap("headline", exactly);
        assert_eq!(recap.fire_at, at(2026, 8, 30, 19, 0));
    }
}
