//! Spreadsheet-friendly CSV export of record collections

pub mod csv;

pub use self::csv::{BOM, filename_for_today, filename_with_date, to_csv};
