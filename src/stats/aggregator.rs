//! Time-windowed counting and period-over-period trends

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use serde::Serialize;

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::stats::date::parse_date_in;

/// Counts for one entity over the current and the preceding window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityStats {
    /// Every record, dated or not
    pub total: usize,

    /// Records dated in `[now - window, now)`
    pub window_count: usize,

    /// Records dated in `[now - 2 * window, now - window)`
    pub previous_window_count: usize,

    /// Rounded percentage change between the two windows
    pub trend_percent: i64,
}

/// Percentage change from `previous` to `current`, rounded half away from zero.
///
/// Growth from nothing is reported as `100`, no activity in either window
/// as `0`.
pub fn trend_percent(current: usize, previous: usize) -> i64 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }
    let change = (current as f64 - previous as f64) / previous as f64 * 100.0;
    change.round() as i64
}

/// Aggregates record collections relative to a fixed "now".
///
/// Every method recomputes from the collections it is given; nothing is
/// cached between calls. Date-only values are read as midnight in `tz`, and
/// day buckets are keyed by UTC calendar date.
#[derive(Debug, Clone)]
pub struct StatsAggregator<Tz: TimeZone = Local> {
    now: DateTime<Utc>,
    tz: Tz,
}

impl StatsAggregator<Local> {
    /// Aggregator for the current instant in the process-local time zone
    pub fn now() -> Self {
        Self::at(Utc::now(), Local)
    }
}

impl<Tz: TimeZone> StatsAggregator<Tz> {
    pub fn at(now: DateTime<Utc>, tz: Tz) -> Self {
        Self { now, tz }
    }

    /// The instant all windows end at (exclusive)
    pub fn reference_time(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn time_zone(&self) -> &Tz {
        &self.tz
    }

    /// Parse a raw date string in this aggregator's time zone
    pub fn parse_date(&self, raw: &str) -> Option<DateTime<Utc>> {
        parse_date_in(raw, &self.tz)
    }

    /// Date held in `field`, if it is present and parseable
    pub fn record_date<R: Record>(&self, record: &R, field: &str) -> Option<DateTime<Utc>> {
        match record.field_value(field)? {
            FieldValue::String(raw) => {
                let parsed = self.parse_date(&raw);
                if parsed.is_none() {
                    tracing::trace!(field, raw = %raw, "skipping unparseable date");
                }
                parsed
            }
            FieldValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Start of the `days`-long window ending now, clamped to the earliest
    /// representable instant
    pub fn window_start(&self, days: u32) -> DateTime<Utc> {
        self.now
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Count records dated in `[from, to)`; undated records never count
    pub fn count_between<R: Record>(
        &self,
        records: &[R],
        date_field: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> usize {
        records
            .iter()
            .filter_map(|record| self.record_date(record, date_field))
            .filter(|date| *date >= from && *date < to)
            .count()
    }

    /// Count records dated within the last `days` days
    pub fn count_recent<R: Record>(&self, records: &[R], date_field: &str, days: u32) -> usize {
        self.count_between(records, date_field, self.window_start(days), self.now)
    }

    /// Totals, window counts and trend for one collection
    pub fn entity_stats<R: Record>(
        &self,
        records: &[R],
        date_field: &str,
        window_days: u32,
    ) -> EntityStats {
        let current_start = self.window_start(window_days);
        let previous_start = self.window_start(window_days.saturating_mul(2));

        let window_count = self.count_between(records, date_field, current_start, self.now);
        let previous_window_count =
            self.count_between(records, date_field, previous_start, current_start);

        tracing::debug!(
            date_field,
            window_days,
            total = records.len(),
            window_count,
            previous_window_count,
            "entity stats"
        );

        EntityStats {
            total: records.len(),
            window_count,
            previous_window_count,
            trend_percent: trend_percent(window_count, previous_window_count),
        }
    }
}
