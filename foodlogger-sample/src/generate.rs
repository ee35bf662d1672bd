//! Deterministic synthetic diary covering the last 120 days.
//!
//! Identical seed, identical output, ids and timestamps included: every
//! random decision, the entry ids among them, draws from the one seeded
//! generator in a fixed order.

use chrono::{Duration, NaiveDate, NaiveTime};
use uuid::Uuid;

use foodlogger_core::entry::{FoodEntry, InputType, MoodTag, SAMPLE_PREFIX};

use crate::catalogue::{CATALOGUE, CatalogueItem, MEAL_SLOTS, MealSlot, VOICE_TEMPLATES};
use crate::rng::{SeededRng, shuffle};

/// Seed used when bootstrapping an empty diary.
pub const SAMPLE_SEED: u64 = 42;

/// History length in days.
pub const SAMPLE_DAYS: i64 = 120;

/// Generate the synthetic history ending at `today`, oldest day first.
pub fn generate(seed: u64, today: NaiveDate) -> Vec<FoodEntry> {
    let mut rng = SeededRng::new(seed);
    let mut entries = Vec::new();

    for day_offset in (0..SAMPLE_DAYS).rev() {
        let day = today - Duration::days(day_offset);

        // About 15% of days stay empty.
        if rng.next_u64() % 100 < 15 {
            continue;
        }

        // 1-4 entries, weighted toward 2-3.
        let entry_count: usize = match rng.next_u64() % 12 {
            0..=1 => 1,
            2..=5 => 2,
            6..=9 => 3,
            _ => 4,
        };

        // Distinct slots for the day, emitted in chronological order.
        let mut slot_indices: Vec<usize> = (0..MEAL_SLOTS.len()).collect();
        shuffle(&mut slot_indices, &mut rng);
        let mut chosen: Vec<usize> = slot_indices.into_iter().take(entry_count).collect();
        chosen.sort_unstable();

        for slot_index in chosen {
            entries.push(roll_entry(&MEAL_SLOTS[slot_index], day, &mut rng));
        }
    }

    entries
}

fn roll_entry(slot: &MealSlot, day: NaiveDate, rng: &mut SeededRng) -> FoodEntry {
    // Ids draw first so the rest of the sequence stays aligned.
    let id = Uuid::from_u64_pair(rng.next_u64(), rng.next_u64());

    let candidates: Vec<&CatalogueItem> = CATALOGUE
        .iter()
        .filter(|i| slot.preferred.contains(&i.category))
        .collect();
    let item = if candidates.is_empty() {
        &CATALOGUE[(rng.next_u64() as usize) % CATALOGUE.len()]
    } else {
        candidates[(rng.next_u64() as usize) % candidates.len()]
    };

    let hour = slot.hour_min + (rng.next_u64() as u32) % (slot.hour_max - slot.hour_min + 1);
    let minute =
        slot.minute_min + (rng.next_u64() as u32) % (slot.minute_max - slot.minute_min + 1);
    let second = (rng.next_u64() as u32) % 60;
    let created_at = day.and_time(NaiveTime::MIN)
        + Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute))
        + Duration::seconds(i64::from(second));

    // About one entry in ten was edited one to three hours later.
    let updated_at = if rng.next_u64() % 10 == 0 {
        Some(created_at + Duration::hours(1 + (rng.next_u64() % 3) as i64))
    } else {
        None
    };

    let input_type = match rng.next_u64() % 100 {
        0..=59 => InputType::Text,
        60..=84 => InputType::Voice,
        _ => InputType::Image,
    };

    let mood = match rng.next_u64() % 100 {
        0..=19 => None,
        20..=47 => Some(MoodTag::Satisfied),
        48..=65 => Some(MoodTag::Energised),
        66..=82 => Some(MoodTag::Neutral),
        83..=94 => Some(MoodTag::Sluggish),
        _ => Some(MoodTag::Uncomfortable),
    };

    let (raw_input, description) = roll_content(item.name, input_type, rng);

    let mut entry = FoodEntry::new(
        id.to_string(),
        day,
        raw_input,
        input_type,
        description,
        created_at,
    )
    .with_category(item.category);
    if let Some(at) = updated_at {
        entry = entry.with_updated_at(at);
    }
    if let Some(m) = mood {
        entry = entry.with_mood(m);
    }
    entry
}

/// Sample photos have no stored file, so image entries keep only a
/// synthetic filename in `raw_input` and leave `media_file` unset.
fn roll_content(name: &str, input_type: InputType, rng: &mut SeededRng) -> (String, String) {
    match input_type {
        InputType::Text => (format!("{SAMPLE_PREFIX}{name}"), name.to_string()),
        InputType::Voice => {
            let template = VOICE_TEMPLATES[(rng.next_u64() as usize) % VOICE_TEMPLATES.len()];
            let processed = template.replacen("{}", name, 1);
            (format!("{SAMPLE_PREFIX}{processed}"), processed)
        }
        InputType::Image => {
            let filename = format!(
                "{}.jpg",
                Uuid::from_u64_pair(rng.next_u64(), rng.next_u64())
            );
            (format!("{SAMPLE_PREFIX}{filename}"), name.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 19).unwrap()
    }

    #[test]
    fn identical_seed_gives_identical_entries() {
        let first = generate(SAMPLE_SEED, today());
        let second = generate(SAMPLE_SEED, today());
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn different_seed_gives_different_entries() {
        let a = generate(42, today());
        let b = generate(43, today());
        assert_ne!(a, b);
    }

    #[test]
    fn every_entry_carries_the_sample_marker() {
        let entries = generate(SAMPLE_SEED, today());
        assert!(entries.iter().all(|e| e.is_sample()));
        assert!(entries.iter().all(|e| e.raw_input.starts_with("[SAMPLE] ")));
    }

    #[test]
    fn dates_cover_the_window_and_match_created_at() {
        let entries = generate(SAMPLE_SEED, today());
        let oldest = today() - Duration::days(SAMPLE_DAYS - 1);
        for entry in &entries {
            assert!(entry.date >= oldest && entry.date <= today());
            assert_eq!(entry.created_at.date(), entry.date);
        }
        // Oldest first; dates never decrease.
        for pair in entries.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn roughly_fifteen_percent_of_days_are_empty() {
        let entries = generate(SAMPLE_SEED, today());
        let logged_days: HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
        assert!(logged_days.len() >= 80, "too many empty days: {}", 120 - logged_days.len());
        assert!(logged_days.len() <= 118, "almost no empty days");
    }

    #[test]
    fn each_day_has_at_most_four_entries_in_distinct_slots() {
        use std::collections::HashMap;
        let entries = generate(SAMPLE_SEED, today());
        let mut by_day: HashMap<NaiveDate, Vec<u32>> = HashMap::new();
        for entry in &entries {
            by_day
                .entry(entry.date)
                .or_default()
                .push(chrono::Timelike::hour(&entry.created_at));
        }
        for hours in by_day.values() {
            assert!(hours.len() <= 4);
            let slots: HashSet<usize> = hours.iter().map(|&h| slot_of(h)).collect();
            assert_eq!(slots.len(), hours.len(), "two entries shared a slot");
        }
    }

    fn slot_of(hour: u32) -> usize {
        match hour {
            7..=9 => 0,
            12..=14 => 1,
            15..=16 => 2,
            19..=21 => 3,
            _ => panic!("hour {hour} outside every slot"),
        }
    }

    #[test]
    fn categories_agree_with_slot_preferences() {
        let entries = generate(SAMPLE_SEED, today());
        for entry in &entries {
            let hour = chrono::Timelike::hour(&entry.created_at);
            let slot = &MEAL_SLOTS[slot_of(hour)];
            let category = entry.category.unwrap();
            assert!(slot.preferred.contains(&category));
        }
    }

    #[test]
    fn the_mix_covers_every_category_and_input_type() {
        let entries = generate(SAMPLE_SEED, today());
        let categories: HashSet<_> = entries.iter().filter_map(|e| e.category).collect();
        assert_eq!(categories.len(), 6);
        let types: HashSet<_> = entries.iter().map(|e| e.input_type).collect();
        assert_eq!(types.len(), 3);
    }

    #[test]
    fn content_shape_matches_input_type() {
        let entries = generate(SAMPLE_SEED, today());
        for entry in &entries {
            match entry.input_type {
                InputType::Text => {
                    assert_eq!(
                        entry.raw_input,
                        format!("{SAMPLE_PREFIX}{}", entry.processed_description)
                    );
                }
                InputType::Voice => {
                    assert!(entry.raw_input.contains(&entry.processed_description));
                }
                InputType::Image => {
                    assert!(entry.raw_input.ends_with(".jpg"));
                    assert_eq!(entry.media_file, None);
                }
            }
        }
    }

    #[test]
    fn edits_land_after_creation() {
        let entries = generate(SAMPLE_SEED, today());
        let edited: Vec<_> = entries.iter().filter(|e| e.updated_at.is_some()).collect();
        assert!(!edited.is_empty());
        assert!(edited.len() * 4 < entries.len(), "far too many edited entries");
        for entry in edited {
            let updated = entry.updated_at.unwrap();
            assert!(updated > entry.created_at);
            assert!(updated <= entry.created_at + Duration::hours(3));
        }
    }

    #[test]
    fn moods_are_present_but_not_universal() {
        let entries = generate(SAMPLE_SEED, today());
        let with_mood = entries.iter().filter(|e| e.mood.is_some()).count();
        assert!(with_mood > 0);
        assert!(with_mood < entries.len());
    }
}
