//! Client-side table engine: search, sort, paginate
//!
//! The engine is stateless. Every call takes the record collection, the
//! caller-owned [`ViewState`] and the searchable fields, and returns the
//! visible page together with the post-search row count.
//!
//! ```text
//! records ──► filter(search) ──► total ──► sort(sorting) ──► paginate(page) ──► TablePage
//! ```

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::{filter, filter_refs};
pub use paginate::paginate;
pub use sort::{compare_by_keys, sort};

use crate::core::error::QueryError;
use crate::core::query::{PaginationMeta, ViewState};
use crate::core::record::Record;
use serde::Serialize;

/// One page of a table query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage<'a, R> {
    /// Rows of the requested page, at most `page_size` of them
    pub data: Vec<&'a R>,

    /// Row count after search, before pagination
    pub total: usize,
}

impl<R> TablePage<'_, R> {
    /// Number of pages for this total
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(page_size)
    }

    pub fn meta(&self, view: &ViewState) -> PaginationMeta {
        PaginationMeta::for_view(view, self.total)
    }

    /// Clone the visible rows out of the borrowed collection
    pub fn into_owned(self) -> (Vec<R>, usize)
    where
        R: Clone,
    {
        (self.data.into_iter().cloned().collect(), self.total)
    }
}

/// Stateless search → sort → paginate pipeline
pub struct TableQueryEngine;

impl TableQueryEngine {
    /// Run one table query.
    ///
    /// Fails only on a zero page size. An out-of-range page index yields an
    /// empty page with the correct total.
    pub fn run<'a, R: Record>(
        records: &'a [R],
        view: &ViewState,
        searchable_fields: &[&str],
    ) -> Result<TablePage<'a, R>, QueryError> {
        view.validate()?;

        let filtered = filter(records, &view.search, searchable_fields);
        let total = filtered.len();
        let sorted = sort(filtered, &view.sorting);
        let data = paginate(&sorted, view.page_index, view.page_size).to_vec();

        tracing::debug!(
            records = records.len(),
            total,
            page_index = view.page_index,
            page_size = view.page_size,
            sort_keys = view.sorting.len(),
            "table query"
        );

        Ok(TablePage { data, total })
    }

    /// Same as [`run`](Self::run) with owned field names, as loaded from
    /// configuration
    pub fn run_with_fields<'a, R: Record>(
        records: &'a [R],
        view: &ViewState,
        searchable_fields: &[String],
    ) -> Result<TablePage<'a, R>, QueryError> {
        let fields: Vec<&str> = searchable_fields.iter().map(String::as_str).collect();
        Self::run(records, view, &fields)
    }
}
