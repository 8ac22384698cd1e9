//! Loading record collections from JSON fixture files

pub mod fixtures;

pub use fixtures::{DashboardData, load_collection};
