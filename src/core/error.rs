//! Typed error handling for the aerostaff crate
//!
//! The data-shaping functions are total over well-typed input: missing fields,
//! unparseable dates and out-of-range pages degrade gracefully instead of
//! failing. The errors below only cover caller contract violations and
//! file-level problems.
//!
//! # Error Categories
//!
//! - [`QueryError`]: Invalid view state or sort parameter given to the table engine
//! - [`ConfigError`]: Errors related to configuration parsing and validation
//! - [`ExportError`]: Errors related to CSV export
//!
//! # Example
//!
//! ```rust,ignore
//! use aerostaff::prelude::*;
//!
//! match TableQueryEngine::run(&records, &view, &fields) {
//!     Ok(page) => println!("{} rows", page.total),
//!     Err(QueryError::InvalidPageSize { .. }) => eprintln!("page size must be positive"),
//!     Err(e) => eprintln!("{} ({})", e, e.error_code()),
//! }
//! ```

use thiserror::Error;

// =============================================================================
// Query Errors
// =============================================================================

/// Errors raised at the table engine boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Page size must be strictly positive
    #[error("Invalid page size {page_size}: must be greater than zero")]
    InvalidPageSize { page_size: usize },

    /// Sort parameter could not be parsed
    #[error("Malformed sort '{input}': {message}")]
    MalformedSort { input: String, message: String },

    /// No entity with this name is configured
    #[error("Unknown entity '{name}'")]
    UnknownEntity { name: String },
}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidPageSize { .. } => "INVALID_PAGE_SIZE",
            QueryError::MalformedSort { .. } => "MALFORMED_SORT",
            QueryError::UnknownEntity { .. } => "UNKNOWN_ENTITY",
        }
    }

    pub(crate) fn malformed_sort(input: &str, message: impl Into<String>) -> Self {
        QueryError::MalformedSort {
            input: input.to_string(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Missing required field in configuration
    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::MissingField { .. } => "CONFIG_MISSING_FIELD",
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    pub(crate) fn invalid(field: &str, value: impl ToString, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors related to CSV export
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export
    #[error("No data to export")]
    NoData,

    /// Header labels and field keys must line up one to one
    #[error("Headers and fields must have the same length ({headers} headers, {fields} fields)")]
    HeaderMismatch { headers: usize, fields: usize },

    /// CSV writer failure
    #[error("CSV error: {0}")]
    Csv(String),
}

impl ExportError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ExportError::NoData => "EXPORT_NO_DATA",
            ExportError::HeaderMismatch { .. } => "EXPORT_HEADER_MISMATCH",
            ExportError::Csv(_) => "EXPORT_CSV_ERROR",
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}
