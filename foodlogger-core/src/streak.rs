//! Consecutive-day logging streaks.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::entry::FoodEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakInfo {
    /// Length of the current run of consecutive logged days.
    pub count: usize,
    pub has_entry_today: bool,
}

/// Walk backwards from `today` counting consecutive days with at least one
/// entry. A streak survives until midnight of the day after the last log:
/// if today is empty the anchor shifts to yesterday, so the user has not
/// lost the run yet, merely not extended it.
pub fn compute_streak(entries: &[FoodEntry], today: NaiveDate) -> StreakInfo {
    let logged: HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
    let has_entry_today = logged.contains(&today);

    let mut anchor = if has_entry_today {
        today
    } else {
        today - Duration::days(1)
    };

    let mut count = 0;
    while logged.contains(&anchor) {
        count += 1;
        anchor -= Duration::days(1);
    }

    StreakInfo {
        count,
        has_entry_today,
    }
}
