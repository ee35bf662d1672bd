//! Drafts new diary entries, one creation path per input type.
//!
//! Every draft runs through the classifier, so entries arrive with a
//! suggested category the user is free to override later.

use anyhow::Result;
use chrono::{NaiveDateTime, Timelike};
use uuid::Uuid;

use foodlogger_core::classify::classify;
use foodlogger_core::entry::{FoodEntry, InputType};

use crate::describe::{describe_text, describe_transcript, describe_vision_labels};

pub fn draft_text_entry(text: &str, now: NaiveDateTime) -> FoodEntry {
    let raw = text.trim().to_string();
    let description = describe_text(&raw);
    build(raw, InputType::Text, description, &[], None, now)
}

pub fn draft_voice_entry(transcript: &str, now: NaiveDateTime) -> Result<FoodEntry> {
    let raw = transcript.trim().to_string();
    let description = describe_transcript(&raw)?;
    Ok(build(raw, InputType::Voice, description, &[], None, now))
}

/// Photo entries keep a fixed raw marker; the description comes entirely
/// from the vision labels.
pub fn draft_photo_entry(
    labels: &[String],
    media_file: Option<String>,
    now: NaiveDateTime,
) -> FoodEntry {
    let description = describe_vision_labels(labels);
    build(
        "Photo".to_string(),
        InputType::Image,
        description,
        labels,
        media_file,
        now,
    )
}

fn build(
    raw_input: String,
    input_type: InputType,
    description: String,
    labels: &[String],
    media_file: Option<String>,
    now: NaiveDateTime,
) -> FoodEntry {
    let category = classify(now.hour(), &description, labels);
    let mut entry = FoodEntry::new(
        Uuid::new_v4().to_string(),
        now.date(),
        raw_input,
        input_type,
        description,
        now,
    )
    .with_category(category);
    if let Some(file) = media_file {
        entry = entry.with_media_file(file);
    }
    entry
}
