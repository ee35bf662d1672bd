//! Stable JSON export of the diary.
//!
//! One object per entry, camelCase keys in sorted order, ISO-8601 timestamps.
//! The key set is a compatibility contract with external consumers; store-only
//! fields (mood, media filename) are not part of it.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use foodlogger_core::{FoodEntry, InputType, MealCategory};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Field order is serialization order; keep it alphabetical.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub category: Option<MealCategory>,
    pub created_at: String,
    pub date: String,
    pub id: String,
    pub input_type: InputType,
    pub processed_description: String,
    pub raw_input: String,
    pub updated_at: Option<String>,
}

impl ExportRecord {
    pub fn from_entry(entry: &FoodEntry) -> Self {
        ExportRecord {
            category: entry.category,
            created_at: entry.created_at.format(TIMESTAMP_FORMAT).to_string(),
            date: entry.date.format("%Y-%m-%d").to_string(),
            id: entry.id.clone(),
            input_type: entry.input_type,
            processed_description: entry.processed_description.clone(),
            raw_input: entry.raw_input.clone(),
            updated_at: entry
                .updated_at
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("foodlogger-export-{}.json", date.format("%Y-%m-%d"))
}

/// Write all entries to `dir` under the dated filename; returns the full path.
pub fn write_export(dir: &Path, entries: &[FoodEntry], today: NaiveDate) -> Result<PathBuf> {
    let records: Vec<ExportRecord> = entries.iter().map(ExportRecord::from_entry).collect();
    let json = serde_json::to_string_pretty(&records)?;

    let path = dir.join(export_filename(today));
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    info!(count = records.len(), path = %path.display(), "wrote export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aug(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[test]
    fn record_keys_are_sorted_camel_case() {
        let entry = FoodEntry::new(
            "abc-123",
            aug(19),
            "chicken biryani",
            InputType::Text,
            "chicken, biryani",
            aug(19).and_hms_opt(19, 30, 0).unwrap(),
        )
        .with_category(MealCategory::Dinner);

        let json = serde_json::to_string_pretty(&ExportRecord::from_entry(&entry)).unwrap();
        let keys = [
            "\"category\"",
            "\"createdAt\"",
            "\"date\"",
            "\"id\"",
            "\"inputType\"",
            "\"processedDescription\"",
            "\"rawInput\"",
            "\"updatedAt\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1], "keys out of order in {json}");
        }
        assert!(json.contains("\"category\": \"dinner\""));
        assert!(json.contains("\"createdAt\": \"2026-08-19T19:30:00\""));
        assert!(json.contains("\"date\": \"2026-08-19\""));
        assert!(json.contains("\"updatedAt\": null"));
    }

    #[test]
    fn unclassified_entry_exports_null_category() {
        let entry = FoodEntry::new(
            "abc-456",
            aug(18),
            "mystery stew",
            InputType::Voice,
            "mystery, stew",
            aug(18).and_hms_opt(13, 0, 0).unwrap(),
        );
        let record = ExportRecord::from_entry(&entry);
        assert_eq!(record.category, None);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"category\":null"));
        assert!(json.contains("\"inputType\":\"voice\""));
    }

    #[test]
    fn filename_uses_export_date() {
        assert_eq!(export_filename(aug(19)), "foodlogger-export-2026-08-19.json");
    }

    #[test]
    fn export_writes_dated_file_with_all_entries() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            FoodEntry::new(
                "a-1",
                aug(18),
                "toast",
                InputType::Text,
                "toast",
                aug(18).and_hms_opt(8, 0, 0).unwrap(),
            ),
            FoodEntry::new(
                "b-2",
                aug(19),
                "salad",
                InputType::Text,
                "salad",
                aug(19).and_hms_opt(12, 30, 0).unwrap(),
            ),
        ];

        let path = write_export(dir.path(), &entries, aug(19)).unwrap();
        assert!(path.ends_with("foodlogger-export-2026-08-19.json"));

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["id"], "a-1");
        assert_eq!(parsed[1]["date"], "2026-08-19");
    }
}
