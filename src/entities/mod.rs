//! Typed records for the four entity kinds of the back-office
//!
//! Field names follow the JSON fixtures, so the same field keys work for
//! typed records, [`DynamicRecord`](crate::core::record::DynamicRecord) and
//! raw `serde_json::Value` objects.

pub mod inspiration;
pub mod job_offer;
pub mod job_seeker;
pub mod macros;
pub mod professional;

pub use inspiration::{Inspiration, InspirationStatus};
pub use job_offer::JobOffer;
pub use job_seeker::JobSeeker;
pub use professional::Professional;

/// Field holding the registration date of job seekers and professionals
pub const REGISTRATION_DATE_FIELD: &str = "dateInscription";

/// Field holding the publication date of a job offer
pub const PUBLICATION_DATE_FIELD: &str = "datePublication";

/// Field holding the creation date of an inspiration
pub const CREATED_AT_FIELD: &str = "createdAt";
