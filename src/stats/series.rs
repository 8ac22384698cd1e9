//! Dense day-bucketed series for charts

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::core::record::Record;
use crate::stats::aggregator::StatsAggregator;

/// Counters for one calendar day
///
/// Serializes flat, e.g. `{"date": "2024-06-01", "jobSeekers": 2, "professionals": 0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeBucket {
    /// `YYYY-MM-DD`
    pub date: String,

    #[serde(flatten)]
    pub counters: IndexMap<String, u64>,
}

impl TimeBucket {
    /// Value of a counter, 0 when the counter was never declared
    pub fn get(&self, counter: &str) -> u64 {
        self.counters.get(counter).copied().unwrap_or(0)
    }
}

/// Builds a multi-counter series with one bucket per calendar day.
///
/// The buckets are the `window_days` consecutive UTC calendar days starting
/// on the day of `now - window_days`, so the last one is yesterday. Every
/// counter starts at 0. Each record stream is counted independently; a
/// record counts when its date lies in `[now - window_days, now)`. Records
/// from earlier today have no bucket and are left out, which keeps the
/// series exactly `window_days` long.
///
/// Windows reaching past the representable calendar start at its first day
/// and hold fewer buckets.
///
/// ```rust,ignore
/// let series = agg
///     .series(90, &["jobSeekers", "professionals"])
///     .add(&job_seekers, "dateInscription", "jobSeekers")
///     .add(&professionals, "dateInscription", "professionals")
///     .build();
/// ```
pub struct SeriesBuilder<'s, Tz: TimeZone> {
    aggregator: &'s StatsAggregator<Tz>,
    start: DateTime<Utc>,
    buckets: BTreeMap<NaiveDate, IndexMap<String, u64>>,
}

impl<'s, Tz: TimeZone> SeriesBuilder<'s, Tz> {
    pub fn new(aggregator: &'s StatsAggregator<Tz>, window_days: u32, counters: &[&str]) -> Self {
        let empty: IndexMap<String, u64> = counters.iter().map(|c| (c.to_string(), 0)).collect();
        let start = aggregator.window_start(window_days);
        let today = aggregator.reference_time().date_naive();

        let buckets = start
            .date_naive()
            .iter_days()
            .take(window_days as usize)
            .take_while(|day| *day < today)
            .map(|day| (day, empty.clone()))
            .collect();

        Self {
            aggregator,
            start,
            buckets,
        }
    }

    /// Count every dated record of `records` under `counter`
    pub fn add<R: Record>(self, records: &[R], date_field: &str, counter: &str) -> Self {
        self.add_where(records, date_field, counter, |_| true)
    }

    /// Count the dated records of `records` that satisfy `predicate`
    pub fn add_where<R, F>(
        mut self,
        records: &[R],
        date_field: &str,
        counter: &str,
        predicate: F,
    ) -> Self
    where
        R: Record,
        F: Fn(&R) -> bool,
    {
        for counters in self.buckets.values_mut() {
            counters.entry(counter.to_string()).or_insert(0);
        }

        let now = self.aggregator.reference_time();
        let mut skipped = 0usize;
        for record in records.iter().filter(|r| predicate(*r)) {
            let Some(date) = self.aggregator.record_date(record, date_field) else {
                continue;
            };
            if date < self.start || date >= now {
                continue;
            }
            match self.buckets.get_mut(&date.date_naive()) {
                Some(counters) => *counters.entry(counter.to_string()).or_insert(0) += 1,
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::trace!(counter, skipped, "records dated today left out");
        }
        self
    }

    /// Buckets in ascending date order
    pub fn build(self) -> Vec<TimeBucket> {
        self.buckets
            .into_iter()
            .map(|(day, counters)| TimeBucket {
                date: day.format("%Y-%m-%d").to_string(),
                counters,
            })
            .collect()
    }
}

impl<Tz: TimeZone> StatsAggregator<Tz> {
    /// Start a multi-counter day series
    pub fn series(&self, window_days: u32, counters: &[&str]) -> SeriesBuilder<'_, Tz> {
        SeriesBuilder::new(self, window_days, counters)
    }

    /// Single-counter dense series; always `window_days` buckets long
    pub fn bucket_by_day<R: Record>(
        &self,
        records: &[R],
        date_field: &str,
        window_days: u32,
        counter: &str,
    ) -> Vec<TimeBucket> {
        self.series(window_days, &[counter])
            .add(records, date_field, counter)
            .build()
    }
}
