//! # Aerostaff
//!
//! Data-shaping core for an aviation staffing back-office: job seekers,
//! professionals, job offers and "inspirations" articles.
//!
//! ## Features
//!
//! - **Table Engine**: Search, multi-key stable sort and pagination over any record collection
//! - **Explicit View State**: Search text, sort list and page cursor passed in on every call
//! - **Dashboard Statistics**: Totals, period-over-period trends and status breakdowns
//! - **Dense Time Series**: One point per calendar day, ready for charting
//! - **Typed Entities**: Field-descriptor based records keyed by their JSON field names
//! - **Configuration-Based**: Searchable fields, page sizes and windows defined in YAML
//! - **CSV Export**: Excel-friendly export of any record collection
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aerostaff::prelude::*;
//!
//! let config = DashboardConfig::default_config();
//! let mut view = config.view_state_for("job_seekers")?;
//! view.set_search("fra");
//! view.toggle_sort("pays");
//!
//! let fields = config.searchable_fields("job_seekers")?;
//! let page = TableQueryEngine::run(&job_seekers, &view, &fields)?;
//! println!("{} of {} rows", page.data.len(), page.total);
//!
//! let stats = StatsAggregator::now()
//!     .dashboard_stats(&data.sources(), config.stats.trend_window_days);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod export;
pub mod stats;
pub mod storage;
pub mod table;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, ExportError, QueryError},
        field::FieldValue,
        query::{PaginationMeta, SortKey, ViewState, parse_sort_param},
        record::{DynamicRecord, Record},
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Entities ===
    pub use crate::entities::{
        Inspiration, InspirationStatus, JobOffer, JobSeeker, Professional,
    };

    // === Table ===
    pub use crate::table::{TablePage, TableQueryEngine, filter, paginate, sort};

    // === Stats ===
    pub use crate::stats::{
        CategoryPoint, DashboardFields, DashboardSources, DashboardStats, EntityStats, SeriesBuilder, StatsAggregator,
        StatusSlice, TimeBucket, distribution_by_category, parse_date, parse_date_in,
    };

    // === Config ===
    pub use crate::config::{DashboardConfig, EntityConfig, StatsConfig, TableConfig};

    // === Storage / Export ===
    pub use crate::export::{filename_with_date, to_csv};
    pub use crate::storage::DashboardData;

    // === External dependencies ===
    pub use chrono::{DateTime, Local, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
}
