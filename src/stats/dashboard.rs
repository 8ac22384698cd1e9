//! Dashboard statistics over all back-office collections

use chrono::TimeZone;
use indexmap::IndexMap;
use serde::Serialize;

use crate::entities::{
    CREATED_AT_FIELD, Inspiration, InspirationStatus, JobOffer, JobSeeker, PUBLICATION_DATE_FIELD,
    Professional, REGISTRATION_DATE_FIELD,
};
use crate::stats::aggregator::StatsAggregator;
use crate::stats::distribution::{CategoryPoint, category_points, distribution_by_category};
use crate::stats::series::TimeBucket;

/// Category field of inspirations
pub const INSPIRATION_CATEGORY_FIELD: &str = "categorie";

/// Short recent-activity window, in days
pub const RECENT_SHORT_DAYS: u32 = 7;

/// Long recent-activity window, in days
pub const RECENT_LONG_DAYS: u32 = 30;

/// Field names the dashboard reads dates and categories from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardFields<'a> {
    pub professionals_date: &'a str,
    pub job_seekers_date: &'a str,
    pub job_offers_date: &'a str,
    pub inspirations_date: &'a str,
    /// `None` leaves the category distribution empty
    pub inspirations_category: Option<&'a str>,
}

impl Default for DashboardFields<'_> {
    fn default() -> Self {
        Self {
            professionals_date: REGISTRATION_DATE_FIELD,
            job_seekers_date: REGISTRATION_DATE_FIELD,
            job_offers_date: PUBLICATION_DATE_FIELD,
            inspirations_date: CREATED_AT_FIELD,
            inspirations_category: Some(INSPIRATION_CATEGORY_FIELD),
        }
    }
}

/// Borrowed view of every collection the dashboard reads
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardSources<'a> {
    pub fields: DashboardFields<'a>,
    pub professionals: &'a [Professional],
    pub professionals_pending: &'a [Professional],
    pub job_seekers: &'a [JobSeeker],
    pub job_seekers_pending: &'a [JobSeeker],
    pub job_seekers_rejected: &'a [JobSeeker],
    pub job_offers: &'a [JobOffer],
    pub inspirations: &'a [Inspiration],
    pub inspirations_pending: &'a [Inspiration],
    pub inspirations_rejected: &'a [Inspiration],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionalStats {
    pub total: usize,
    pub pending: usize,
    pub trend: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSeekerStats {
    pub total: usize,
    pub pending: usize,
    pub rejected: usize,
    pub trend: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobOfferStats {
    pub total: usize,
    /// Offers whose state is "En ligne"
    pub active: usize,
    pub trend: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspirationStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    pub archived: usize,
    pub by_category: IndexMap<String, usize>,
    pub trend: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentActivity {
    #[serde(rename = "last7Days")]
    pub last_7_days: usize,
    #[serde(rename = "last30Days")]
    pub last_30_days: usize,
}

/// Everything the dashboard header cards show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub professionals: ProfessionalStats,
    pub job_seekers: JobSeekerStats,
    pub job_offers: JobOfferStats,
    pub inspirations: InspirationStats,
    /// Pending professionals, job seekers and inspirations together
    pub pending_validations: usize,
    pub recent_activity: RecentActivity,
}

/// One slice of the inspirations status chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub status: InspirationStatus,
    pub label: &'static str,
    pub value: usize,
}

impl DashboardStats {
    /// Inspirations per moderation status, approved first
    pub fn status_breakdown(&self) -> Vec<StatusSlice> {
        InspirationStatus::ALL
            .iter()
            .map(|&status| StatusSlice {
                status,
                label: status.label(),
                value: match status {
                    InspirationStatus::Approved => self.inspirations.approved,
                    InspirationStatus::Pending => self.inspirations.pending,
                    InspirationStatus::Rejected => self.inspirations.rejected,
                    InspirationStatus::Archived => self.inspirations.archived,
                },
            })
            .collect()
    }

    /// Inspirations per category, in first-seen order
    pub fn category_distribution(&self) -> Vec<CategoryPoint> {
        category_points(&self.inspirations.by_category)
    }
}

impl<Tz: TimeZone> StatsAggregator<Tz> {
    /// Compute the dashboard statistics; trends compare the last
    /// `trend_window_days` with the window just before it.
    pub fn dashboard_stats(&self, sources: &DashboardSources<'_>, trend_window_days: u32) -> DashboardStats {
        let fields = sources.fields;
        let professionals =
            self.entity_stats(sources.professionals, fields.professionals_date, trend_window_days);
        let job_seekers =
            self.entity_stats(sources.job_seekers, fields.job_seekers_date, trend_window_days);
        let job_offers =
            self.entity_stats(sources.job_offers, fields.job_offers_date, trend_window_days);
        let inspirations =
            self.entity_stats(sources.inspirations, fields.inspirations_date, trend_window_days);

        let with_status = |status: InspirationStatus| {
            sources
                .inspirations
                .iter()
                .filter(|i| i.statut == status)
                .count()
        };

        let pending_validations = sources.professionals_pending.len()
            + sources.job_seekers_pending.len()
            + sources.inspirations_pending.len();

        let stats = DashboardStats {
            professionals: ProfessionalStats {
                total: professionals.total,
                pending: sources.professionals_pending.len(),
                trend: professionals.trend_percent,
            },
            job_seekers: JobSeekerStats {
                total: job_seekers.total,
                pending: sources.job_seekers_pending.len(),
                rejected: sources.job_seekers_rejected.len(),
                trend: job_seekers.trend_percent,
            },
            job_offers: JobOfferStats {
                total: job_offers.total,
                active: sources.job_offers.iter().filter(|o| o.is_online()).count(),
                trend: job_offers.trend_percent,
            },
            inspirations: InspirationStats {
                total: inspirations.total,
                approved: with_status(InspirationStatus::Approved),
                pending: sources.inspirations_pending.len(),
                rejected: sources.inspirations_rejected.len(),
                archived: with_status(InspirationStatus::Archived),
                by_category: fields
                    .inspirations_category
                    .map(|field| distribution_by_category(sources.inspirations, field))
                    .unwrap_or_default(),
                trend: inspirations.trend_percent,
            },
            pending_validations,
            recent_activity: RecentActivity {
                last_7_days: self.recent_activity(sources, RECENT_SHORT_DAYS),
                last_30_days: self.recent_activity(sources, RECENT_LONG_DAYS),
            },
        };

        tracing::debug!(
            trend_window_days,
            pending_validations,
            recent_7 = stats.recent_activity.last_7_days,
            "dashboard stats computed"
        );
        stats
    }

    /// Dated items across the four main collections in the last `days` days
    pub fn recent_activity(&self, sources: &DashboardSources<'_>, days: u32) -> usize {
        let fields = sources.fields;
        self.count_recent(sources.professionals, fields.professionals_date, days)
            + self.count_recent(sources.job_seekers, fields.job_seekers_date, days)
            + self.count_recent(sources.job_offers, fields.job_offers_date, days)
            + self.count_recent(sources.inspirations, fields.inspirations_date, days)
    }

    /// Daily registrations, split into `jobSeekers` and `professionals`
    pub fn registration_trends(&self, sources: &DashboardSources<'_>, days: u32) -> Vec<TimeBucket> {
        self.series(days, &["jobSeekers", "professionals"])
            .add(sources.job_seekers, sources.fields.job_seekers_date, "jobSeekers")
            .add(sources.professionals, sources.fields.professionals_date, "professionals")
            .build()
    }

    /// Daily job offer publications: `online` and `total`
    pub fn job_offers_timeline(&self, sources: &DashboardSources<'_>, days: u32) -> Vec<TimeBucket> {
        let field = sources.fields.job_offers_date;
        self.series(days, &["online", "total"])
            .add_where(sources.job_offers, field, "online", JobOffer::is_online)
            .add(sources.job_offers, field, "total")
            .build()
    }

    /// Daily `registrations` (job seekers and professionals together),
    /// `jobOffers` and `inspirations`
    pub fn activity_overview(&self, sources: &DashboardSources<'_>, days: u32) -> Vec<TimeBucket> {
        let fields = sources.fields;
        self.series(days, &["registrations", "jobOffers", "inspirations"])
            .add(sources.job_seekers, fields.job_seekers_date, "registrations")
            .add(sources.professionals, fields.professionals_date, "registrations")
            .add(sources.job_offers, fields.job_offers_date, "jobOffers")
            .add(sources.inspirations, fields.inspirations_date, "inspirations")
            .build()
    }
}
