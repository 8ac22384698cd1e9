//! Core module containing the record model, view state and error types

pub mod error;
pub mod field;
pub mod query;
pub mod record;

pub use error::{ConfigError, ExportError, QueryError};
pub use field::FieldValue;
pub use query::{PaginationMeta, SortKey, ViewState, parse_sort_param, validate_sorting};
pub use record::{DynamicRecord, Record};
