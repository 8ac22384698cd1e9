//! Lenient date parsing for fixture and database date strings

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Date-time layouts without an offset, read as local time
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a date in the process-local time zone.
///
/// See [`parse_date_in`].
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    parse_date_in(raw, &Local)
}

/// Parse one of the three date shapes found in the data:
///
/// - ISO strings containing `T` (`2024-05-02T14:21:00Z`, with or without offset)
/// - `"YYYY-MM-DD hh:mm:ss"`, where only the date part is kept
/// - bare `"YYYY-MM-DD"`
///
/// The last two become midnight in `tz`, built from the split year, month and
/// day rather than through a generic ISO parser. ISO strings without an offset
/// are also read in `tz`.
///
/// Returns `None` for empty or malformed input, including impossible calendar
/// dates such as `2024-02-30`.
pub fn parse_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains('T') {
        return parse_iso(raw, tz);
    }

    let date_part = match raw.split_once(' ') {
        Some((date, _time)) => date,
        None => raw,
    };
    let date = parse_ymd(date_part)?;
    local_to_utc(date.and_hms_opt(0, 0, 0)?, tz)
}

fn parse_iso<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .and_then(|naive| local_to_utc(naive, tz))
}

fn parse_ymd(date: &str) -> Option<NaiveDate> {
    let mut parts = date.split('-');
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn local_to_utc<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
