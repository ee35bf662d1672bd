//! Turns raw input into the cleaned description analytics run on.
//!
//! Expected transcripts sound like:
//!   "I had a glass of wine"
//!   "Just had some poha"
//!   "Had ramen for this meal"

use anyhow::Result;
use regex::Regex;

/// Placeholder description when vision produces nothing usable.
pub const UNKNOWN_FOOD: &str = "Unknown food item";

/// Function words that carry no food meaning; what survives is roughly the
/// nouns and adjectives of the input.
const FILLER_WORDS: &[&str] = &[
    "i", "we", "you", "me", "my", "our", "your", "a", "an", "the", "this", "that", "these",
    "those", "had", "have", "has", "ate", "eat", "eating", "having", "got", "finished", "just",
    "some", "really", "very", "then", "also", "too", "and", "with", "of", "in", "for", "on", "at",
    "to", "from",
];

fn is_filler(word: &str) -> bool {
    FILLER_WORDS.contains(&word.to_lowercase().as_str())
}

/// Keep the content words of `text` in their original casing, joined with
/// ", ". Falls back to the trimmed input when nothing survives, so the
/// result is empty only for empty input.
pub fn describe_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let tokens: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty() && !is_filler(t))
        .collect();

    if tokens.is_empty() {
        trimmed.to_string()
    } else {
        tokens.join(", ")
    }
}

/// Like [`describe_text`], but first strips the spoken lead-in ("I had
/// a...") and trailing filler ("...just now") that transcripts carry.
pub fn describe_transcript(transcript: &str) -> Result<String> {
    let lead_in =
        Regex::new(r"(?i)^(i\s+|we\s+)?(just\s+)?(had|ate|finished|eating|having)\s+(a\s+|an\s+|some\s+)?")?;
    let trailer = Regex::new(r"(?i)\s+(just now|for this meal|right now)$")?;

    let trimmed = transcript.trim();
    let stripped = lead_in.replace(trimmed, "");
    let stripped = trailer.replace(&stripped, "");

    let cleaned = describe_text(&stripped);
    if cleaned.is_empty() {
        return Ok(describe_text(trimmed));
    }
    Ok(cleaned)
}

/// Clean raw vision labels into a readable description: underscores become
/// spaces and parenthesised qualifiers are cut.
pub fn describe_vision_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        return UNKNOWN_FOOD.to_string();
    }

    let cleaned: Vec<String> = labels
        .iter()
        .filter_map(|label| {
            let with_spaces = label.replace('_', " ");
            let without_parens = match with_spaces.find('(') {
                Some(idx) => &with_spaces[..idx],
                None => with_spaces.as_str(),
            };
            let result = without_parens.trim();
            if result.is_empty() {
                None
            } else {
                Some(result.to_string())
            }
        })
        .collect();

    if cleaned.is_empty() {
        UNKNOWN_FOOD.to_string()
    } else {
        cleaned.join(", ")
    }
}
