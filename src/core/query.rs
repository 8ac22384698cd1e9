//! View state, sort keys and pagination metadata

use crate::core::error::QueryError;
use serde::{Deserialize, Serialize};

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One entry of a sort list
///
/// `id` is the field name. Entries earlier in the list take priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub id: String,
    #[serde(default)]
    pub desc: bool,
}

impl SortKey {
    /// Creates a new ascending key for the given field
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    /// Creates a new descending key for the given field
    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }
}

/// Externally owned state of one table view
///
/// The engine never stores this: callers pass it in on every query.
///
/// Whenever `search` or `sorting` change, `page_index` must go back to 0.
/// The mutators below do that; callers editing the fields directly are
/// responsible for it themselves.
///
/// # Example
/// ```rust,ignore
/// let mut view = ViewState::new(25);
/// view.set_search("pilote");       // page_index = 0
/// view.toggle_sort("pays");        // pays ascending
/// view.toggle_sort("pays");        // pays descending
/// view.toggle_sort("pays");        // unsorted again
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Zero-based page cursor
    #[serde(default)]
    pub page_index: usize,

    /// Rows per page (must be positive)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Case-insensitive substring search, empty for none
    #[serde(default)]
    pub search: String,

    /// Ordered sort keys, first one primary
    #[serde(default)]
    pub sorting: Vec<SortKey>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Empty search, no sorting, first page
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size,
            search: String::new(),
            sorting: Vec::new(),
        }
    }

    /// Replace the sort list, resetting to the first page
    pub fn with_sorting(mut self, sorting: Vec<SortKey>) -> Self {
        self.sorting = sorting;
        self.page_index = 0;
        self
    }

    /// Fail fast on a view state no query can honour: a zero page size, or
    /// a sort list with an empty or repeated field.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page_size == 0 {
            return Err(QueryError::InvalidPageSize {
                page_size: self.page_size,
            });
        }
        validate_sorting(&self.sorting)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page_index = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page_index = 0;
    }

    pub fn clear_sorting(&mut self) {
        self.sorting.clear();
        self.page_index = 0;
    }

    /// Cycle a column through unsorted, ascending, descending, unsorted.
    ///
    /// A newly sorted column is appended, so it breaks ties of the columns
    /// already in the list.
    pub fn toggle_sort(&mut self, column: &str) {
        match self.sorting.iter().position(|key| key.id == column) {
            Some(idx) if self.sorting[idx].desc => {
                self.sorting.remove(idx);
            }
            Some(idx) => self.sorting[idx].desc = true,
            None => self.sorting.push(SortKey::asc(column)),
        }
        self.page_index = 0;
    }

    /// Number of pages for `total` filtered rows
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        total.div_ceil(self.page_size)
    }

    /// Move forward one page, staying on the last page
    pub fn next_page(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page_index = self.page_index.saturating_add(1).min(last);
    }

    /// Move back one page, staying on the first page
    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }
}

/// Parse a sort parameter such as `pays:asc,nomComplet:desc`.
///
/// A bare field sorts ascending. Empty fields, unknown directions and
/// repeated fields are rejected.
pub fn parse_sort_param(input: &str) -> Result<Vec<SortKey>, QueryError> {
    let mut keys: Vec<SortKey> = Vec::new();
    if input.trim().is_empty() {
        return Ok(keys);
    }

    for part in input.split(',') {
        let (field, dir) = match part.split_once(':') {
            Some((field, dir)) => (field.trim(), Some(dir.trim())),
            None => (part.trim(), None),
        };

        if field.is_empty() {
            return Err(QueryError::malformed_sort(input, "empty field name"));
        }

        let desc = match dir.map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => false,
            Some("desc") => true,
            Some(other) => {
                return Err(QueryError::malformed_sort(
                    input,
                    format!("unknown direction '{}'", other),
                ));
            }
        };

        if keys.iter().any(|key| key.id == field) {
            return Err(QueryError::malformed_sort(
                input,
                format!("field '{}' listed twice", field),
            ));
        }

        keys.push(SortKey {
            id: field.to_string(),
            desc,
        });
    }

    Ok(keys)
}

/// Check a sort list against the rules [`parse_sort_param`] enforces
pub fn validate_sorting(keys: &[SortKey]) -> Result<(), QueryError> {
    for (idx, key) in keys.iter().enumerate() {
        if key.id.trim().is_empty() {
            return Err(QueryError::malformed_sort(&render_sorting(keys), "empty field name"));
        }
        if keys[..idx].iter().any(|earlier| earlier.id == key.id) {
            return Err(QueryError::malformed_sort(
                &render_sorting(keys),
                format!("field '{}' listed twice", key.id),
            ));
        }
    }
    Ok(())
}

fn render_sorting(keys: &[SortKey]) -> String {
    keys.iter()
        .map(|key| format!("{}:{}", key.id, if key.desc { "desc" } else { "asc" }))
        .collect::<Vec<_>>()
        .join(",")
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page (starts at 0)
    pub page_index: usize,

    /// Number of rows per page
    pub page_size: usize,

    /// Total number of rows (after search)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,

    /// 1-based index of the first row shown, 0 when the page is empty
    pub first_row: usize,

    /// 1-based index of the last row shown, 0 when the page is empty
    pub last_row: usize,
}

impl PaginationMeta {
    pub fn new(page_index: usize, page_size: usize, total: usize) -> Self {
        // Ensure page size is at least 1 to avoid division by zero
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let start = page_index.saturating_mul(page_size);
        let end = start.saturating_add(page_size).min(total);
        let (first_row, last_row) = if start < total {
            (start + 1, end)
        } else {
            (0, 0)
        };

        Self {
            page_index,
            page_size,
            total,
            total_pages,
            has_next: start.saturating_add(page_size) < total,
            has_prev: page_index > 0,
            first_row,
            last_row,
        }
    }

    pub fn for_view(view: &ViewState, total: usize) -> Self {
        Self::new(view.page_index, view.page_size, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_defaults() {
        let view = ViewState::default();
        assert_eq!(view.page_index, 0);
        assert_eq!(view.page_size, 10);
        assert!(view.search.is_empty());
        assert!(view.sorting.is_empty());
    }

    #[test]
    fn test_view_state_deserialize_camel_case() {
        let view: ViewState = serde_json::from_str(
            r#"{"pageIndex": 2, "pageSize": 25, "search": "fra", "sorting": [{"id": "pays", "desc": true}]}"#,
        )
        .expect("valid view state");
        assert_eq!(view.page_index, 2);
        assert_eq!(view.page_size, 25);
        assert_eq!(view.sorting, vec![SortKey::desc("pays")]);

        let partial: ViewState = serde_json::from_str("{}").expect("all fields default");
        assert_eq!(partial, ViewState::default());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        assert_eq!(
            ViewState::new(0).validate(),
            Err(QueryError::InvalidPageSize { page_size: 0 })
        );
        assert!(ViewState::new(25).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_sorting() {
        let blank = ViewState::new(10).with_sorting(vec![SortKey::asc(" ")]);
        assert!(matches!(
            blank.validate(),
            Err(QueryError::MalformedSort { .. })
        ));

        let repeated: ViewState = serde_json::from_str(
            r#"{"sorting": [{"id": "pays"}, {"id": "nomComplet"}, {"id": "pays", "desc": true}]}"#,
        )
        .expect("valid json");
        assert_eq!(
            repeated.validate(),
            Err(QueryError::MalformedSort {
                input: "pays:asc,nomComplet:asc,pays:desc".to_string(),
                message: "field 'pays' listed twice".to_string(),
            })
        );

        let fine = ViewState::new(10).with_sorting(vec![SortKey::asc("pays"), SortKey::desc("email")]);
        assert!(fine.validate().is_ok());
    }

    #[test]
    fn test_next_page_saturates() {
        let mut view = ViewState::new(10);
        view.page_index = usize::MAX;
        view.next_page(usize::MAX);
        assert!(view.page_index < usize::MAX);

        let mut view = ViewState::new(10);
        view.page_index = usize::MAX;
        view.next_page(5);
        assert_eq!(view.page_index, 0);
    }

    #[test]
    fn test_search_and_page_size_reset_page() {
        let mut view = ViewState::new(10);
        view.page_index = 4;
        view.set_search("pilot");
        assert_eq!(view.page_index, 0);

        view.page_index = 3;
        view.set_page_size(50);
        assert_eq!(view.page_index, 0);
        assert_eq!(view.page_size, 50);
    }

    #[test]
    fn test_toggle_sort_cycle() {
        let mut view = ViewState::new(10);
        view.page_index = 2;

        view.toggle_sort("pays");
        assert_eq!(view.sorting, vec![SortKey::asc("pays")]);
        assert_eq!(view.page_index, 0);

        view.toggle_sort("email");
        assert_eq!(view.sorting, vec![SortKey::asc("pays"), SortKey::asc("email")]);

        view.toggle_sort("pays");
        assert_eq!(view.sorting, vec![SortKey::desc("pays"), SortKey::asc("email")]);

        view.toggle_sort("pays");
        assert_eq!(view.sorting, vec![SortKey::asc("email")]);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut view = ViewState::new(10);
        view.previous_page();
        assert_eq!(view.page_index, 0);

        view.next_page(23);
        view.next_page(23);
        view.next_page(23);
        assert_eq!(view.page_index, 2);

        view.next_page(0);
        assert_eq!(view.page_index, 0);
    }

    #[test]
    fn test_parse_sort_param() {
        assert!(parse_sort_param("").unwrap().is_empty());
        assert_eq!(
            parse_sort_param("pays:asc, nomComplet:DESC,email").unwrap(),
            vec![
                SortKey::asc("pays"),
                SortKey::desc("nomComplet"),
                SortKey::asc("email")
            ]
        );
    }

    #[test]
    fn test_parse_sort_param_rejects_malformed() {
        for bad in ["pays:up", ":asc", "pays,,email", "pays,pays:desc"] {
            let err = parse_sort_param(bad).unwrap_err();
            assert_eq!(err.error_code(), "MALFORMED_SORT", "input: {}", bad);
        }
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(2, 10, 23);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_prev);
        assert!(!meta.has_next);
        assert_eq!((meta.first_row, meta.last_row), (21, 23));

        let meta = PaginationMeta::new(0, 20, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
        assert_eq!((meta.first_row, meta.last_row), (1, 20));
    }

    #[test]
    fn test_pagination_meta_out_of_range() {
        let meta = PaginationMeta::new(9, 10, 23);
        assert_eq!((meta.first_row, meta.last_row), (0, 0));
        assert!(!meta.has_next);

        let empty = PaginationMeta::new(0, 10, 0);
        assert_eq!(empty.total_pages, 0);
        assert_eq!((empty.first_row, empty.last_row), (0, 0));
    }
}
