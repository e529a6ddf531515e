//! Axum route handler for the aggregated external-jobs listing.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::job::{JobPosting, JobQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExternalJobsParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub category: Option<String>,
    /// `newest` sorts by posting recency after the merge.
    pub sort: Option<String>,
}

/// GET /api/v1/jobs/external
///
/// Runs the aggregation pipeline over every registered source. Upstream
/// failures are folded into the merge, so this endpoint never errors for
/// them; the worst case is the filtered curated catalog, or an empty array
/// when the filters match nothing.
pub async fn handle_external_jobs(
    State(state): State<AppState>,
    Query(params): Query<ExternalJobsParams>,
) -> Json<Vec<JobPosting>> {
    let query = JobQuery {
        keyword: params.keyword,
        location: params.location,
        job_type: params.job_type,
        category: params.category,
    };

    let mut jobs = state.aggregator.aggregate(&query).await;

    if params.sort.as_deref() == Some("newest") {
        jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
    }

    Json(jobs)
}
