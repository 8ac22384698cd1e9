//! Dashboard statistics: date parsing, windowed counts, trends, dense
//! day series and category distributions

pub mod aggregator;
pub mod dashboard;
pub mod date;
pub mod distribution;
pub mod series;

pub use aggregator::{EntityStats, StatsAggregator, trend_percent};
pub use dashboard::{
    DashboardFields, DashboardSources, DashboardStats, InspirationStats, JobOfferStats, JobSeekerStats,
    ProfessionalStats, RecentActivity, StatusSlice,
};
pub use date::{parse_date, parse_date_in};
pub use distribution::{CategoryPoint, category_points, distribution_by_category};
pub use series::{SeriesBuilder, TimeBucket};
