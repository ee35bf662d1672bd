//! JSON entry store under `~/.foodlogger/`.

use anyhow::{Context, Result, bail};
use foodlogger_core::FoodEntry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn foodlogger_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".foodlogger"))
}

pub fn ensure_home() -> Result<PathBuf> {
    let dir = foodlogger_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn entries_path() -> Result<PathBuf> {
    Ok(ensure_home()?.join("entries.json"))
}

/// A missing store reads as an empty diary.
pub fn load_entries(path: &Path) -> Result<Vec<FoodEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let entries: Vec<FoodEntry> =
        serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    debug!(count = entries.len(), "loaded entries");
    Ok(entries)
}

pub fn save_entries(path: &Path, entries: &[FoodEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    debug!(count = entries.len(), "saved entries");
    Ok(())
}

/// Resolve a full id or unique id prefix to an index into `entries`.
pub fn find_entry_index(entries: &[FoodEntry], id: &str) -> Result<usize> {
    let matches: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.id.starts_with(id))
        .map(|(i, _)| i)
        .collect();

    match matches.len() {
        0 => bail!("no entry with id {}", id),
        1 => Ok(matches[0]),
        n => bail!("id {} is ambiguous ({} entries match; use more characters)", id, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use foodlogger_core::InputType;

    fn entry(id: &str) -> FoodEntry {
        let date = NaiveDate::from_ymd_opt(2026, 8, 19).unwrap();
        FoodEntry::new(
            id,
            date,
            "pizza",
            InputType::Text,
            "pizza",
            date.and_hms_opt(12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn missing_store_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        assert!(load_entries(&path).unwrap().is_empty());
    }

    #[test]
    fn entries_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");

        let entries = vec![entry("aaa-111"), entry("bbb-222")];
        save_entries(&path, &entries).unwrap();
        let loaded = load_entries(&path).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn prefix_resolves_only_when_unique() {
        let entries = vec![entry("aaa-111"), entry("aab-222"), entry("bbb-333")];

        assert_eq!(find_entry_index(&entries, "bbb").unwrap(), 2);
        assert_eq!(find_entry_index(&entries, "aab").unwrap(), 1);
        assert!(find_entry_index(&entries, "aa").is_err());
        assert!(find_entry_index(&entries, "zzz").is_err());
    }
}
