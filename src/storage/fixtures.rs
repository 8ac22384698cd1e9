//! JSON fixture files backing the dashboard
//!
//! Each collection lives in its own file holding a JSON array. Unknown keys
//! are ignored and missing keys take their default, so fixtures exported
//! from the database with extra columns load as they are.

use crate::entities::{Inspiration, JobOffer, JobSeeker, Professional};
use crate::stats::{DashboardFields, DashboardSources};
use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON array of records from `path`
pub fn load_collection<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    let records: Vec<T> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fixture {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = records.len(), "loaded fixture");
    Ok(records)
}

/// Like [`load_collection`], but a missing file is an empty collection
fn load_optional<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "optional fixture missing, using empty collection");
        return Ok(Vec::new());
    }
    load_collection(path)
}

/// Every collection the dashboard reads, owned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub professionals: Vec<Professional>,
    pub professionals_pending: Vec<Professional>,
    pub job_seekers: Vec<JobSeeker>,
    pub job_seekers_pending: Vec<JobSeeker>,
    pub job_seekers_rejected: Vec<JobSeeker>,
    pub job_offers: Vec<JobOffer>,
    pub inspirations: Vec<Inspiration>,
    pub inspirations_pending: Vec<Inspiration>,
    pub inspirations_rejected: Vec<Inspiration>,
}

impl DashboardData {
    /// Load the fixture set from `dir`
    ///
    /// The main collections are required. The pending and rejected lists
    /// fall back to empty when their file is absent.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(anyhow!("Fixture directory not found: {}", dir.display()));
        }

        let data = Self {
            professionals: load_collection(dir.join("professionals.json"))?,
            professionals_pending: load_optional(&dir.join("professional-pending.json"))?,
            job_seekers: load_collection(dir.join("job-seekers.json"))?,
            job_seekers_pending: load_optional(&dir.join("job-seekers-pending.json"))?,
            job_seekers_rejected: load_optional(&dir.join("job-seekers-rejected.json"))?,
            job_offers: load_collection(dir.join("job-offers.json"))?,
            inspirations: load_collection(dir.join("inspirations.json"))?,
            inspirations_pending: load_optional(&dir.join("inspirations-pending.json"))?,
            inspirations_rejected: load_optional(&dir.join("inspirations-rejected.json"))?,
        };

        tracing::info!(
            dir = %dir.display(),
            professionals = data.professionals.len(),
            job_seekers = data.job_seekers.len(),
            job_offers = data.job_offers.len(),
            inspirations = data.inspirations.len(),
            "loaded dashboard fixtures"
        );
        Ok(data)
    }

    /// Borrow every collection for the statistics aggregator
    pub fn sources(&self) -> DashboardSources<'_> {
        self.sources_with(DashboardFields::default())
    }

    /// Like [`DashboardData::sources`], reading dates and categories from `fields`
    pub fn sources_with<'a>(&'a self, fields: DashboardFields<'a>) -> DashboardSources<'a> {
        DashboardSources {
            fields,
            professionals: &self.professionals,
            professionals_pending: &self.professionals_pending,
            job_seekers: &self.job_seekers,
            job_seekers_pending: &self.job_seekers_pending,
            job_seekers_rejected: &self.job_seekers_rejected,
            job_offers: &self.job_offers,
            inspirations: &self.inspirations,
            inspirations_pending: &self.inspirations_pending,
            inspirations_rejected: &self.inspirations_rejected,
        }
    }
}
