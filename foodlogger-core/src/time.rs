//! Time utilities: timezone-aware "now" and clock-time parsing.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Parse an IANA timezone name like "America/Chicago".
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {name}"))
}

/// Current wall-clock time in `tz`, with the offset stripped. Everything
/// downstream works in the user's local time, so the zone is applied once
/// here and never carried further.
pub fn now_in(tz: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&tz).naive_local()
}

/// Parse a clock time like "20:00" into (hour, minute).
pub fn parse_clock_time(text: &str) -> Result<(u32, u32)> {
    let (h, m) = match text.split_once(':') {
        Some(parts) => parts,
        None => anyhow::bail!("invalid time '{text}', expected HH:MM"),
    };
    let hour: u32 = h
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid hour in '{text}'"))?;
    let minute: u32 = m
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid minute in '{text}'"))?;
    if hour > 23 || minute > 59 {
        anyhow::bail!("time '{text}' out of range");
    }
    Ok((hour, minute))
}

/// Parse a calendar date like "2026-08-19".
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{text}': {e}"))
}

/// Parse a month like "2026-08", normalised to the first of the month.
pub fn parse_month(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid month '{text}', expected YYYY-MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_timezone() {
        assert!(parse_timezone("America/Chicago").is_ok());
        assert!(parse_timezone("Asia/Kolkata").is_ok());
        assert!(parse_timezone("Not/AZone").is_err());
    }

    #[test]
    fn test_parse_clock_time_valid() {
        assert_eq!(parse_clock_time("20:00").unwrap(), (20, 0));
        assert_eq!(parse_clock_time("7:30").unwrap(), (7, 30));
    }

    #[test]
    fn test_parse_clock_time_rejects_garbage() {
        assert!(parse_clock_time("2000").is_err());
        assert!(parse_clock_time("24:00").is_err());
        assert!(parse_clock_time("12:60").is_err());
        assert!(parse_clock_time("noon").is_err());
    }

    #[test]
    fn test_parse_date_and_month() {
        assert_eq!(
            parse_date("2026-08-19").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 19).unwrap()
        );
        assert_eq!(
            parse_month("2026-02").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
        assert!(parse_date("08/19/2026").is_err());
        assert!(parse_month("2026-13").is_err());
    }
}
