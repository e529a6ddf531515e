//! Remotive remote-jobs fetcher. The API accepts a single search term, so
//! the first usable filter value is forwarded as light pre-filtering.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::classify::detect_experience_level;
use crate::models::job::{
    Company, JobOrigin, JobPosting, JobQuery, JobStatus, JobType, SalaryRange,
};
use crate::sources::{fallback_description, JobSource, SourceError, MAX_JOBS_PER_SOURCE};
use crate::text::strip_html;
use crate::translation::Translator;

const API_URL: &str = "https://remotive.com/api/remote-jobs";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_SEARCH_TERM: &str = "software";

#[derive(Debug, Deserialize)]
struct RemotiveResponse {
    jobs: Vec<RemotiveJob>,
}

#[derive(Debug, Deserialize)]
struct RemotiveJob {
    id: u64,
    url: String,
    title: String,
    company_name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    job_type: String,
    #[serde(default)]
    publication_date: String,
    #[serde(default)]
    candidate_required_location: String,
    #[serde(default)]
    description: String,
}

/// Picks the search term forwarded upstream: the first non-empty of keyword,
/// category and type, else a broad default so the feed is never empty.
fn search_term(query: &JobQuery) -> &str {
    query
        .keyword
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| query.category.as_deref().filter(|s| !s.trim().is_empty()))
        .or_else(|| query.job_type.as_deref().filter(|s| !s.trim().is_empty()))
        .unwrap_or(DEFAULT_SEARCH_TERM)
}

/// Remotive publishes naive timestamps (`2024-02-03T22:20:02`); treat them
/// as UTC. Unparseable values fall back to the aggregation time.
fn parse_publication_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.and_utc())
        })
}

pub struct RemotiveSource {
    client: Client,
    translator: Arc<Translator>,
}

impl RemotiveSource {
    pub fn new(translator: Arc<Translator>) -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            translator,
        }
    }

    async fn normalize(&self, job: RemotiveJob) -> JobPosting {
        let cleaned = strip_html(&job.description);
        let mut description = self.translator.translate_to_english(&cleaned).await;
        let title = self.translator.translate_to_english(&job.title).await;

        if description.trim().is_empty() {
            description = fallback_description(&title, &job.company_name);
        }

        let experience_level = detect_experience_level(&title, &description);
        let job_type = JobType::from_source_tag(&job.job_type, true);
        let posted_date = parse_publication_date(&job.publication_date).unwrap_or_else(Utc::now);

        let location = if job.candidate_required_location.trim().is_empty() {
            "Remote".to_string()
        } else {
            job.candidate_required_location
        };
        let category = if job.category.trim().is_empty() {
            "Technology".to_string()
        } else {
            job.category
        };

        JobPosting {
            id: format!("ext_rm_{}", job.id),
            title,
            description,
            company: Company {
                name: job.company_name,
            },
            location,
            job_type,
            category,
            salary_range: SalaryRange::unspecified(),
            experience_level,
            requirements: Vec::new(),
            benefits: Vec::new(),
            // Remotive lists remote work exclusively.
            is_remote: true,
            status: JobStatus::Active,
            source: JobOrigin::External,
            source_name: "Remotive".to_string(),
            source_url: Some(job.url),
            posted_date,
        }
    }
}

#[async_trait]
impl JobSource for RemotiveSource {
    fn name(&self) -> &'static str {
        "Remotive"
    }

    async fn fetch(&self, query: &JobQuery) -> Result<Vec<JobPosting>, SourceError> {
        let response = self
            .client
            .get(API_URL)
            .query(&[("search", search_term(query)), ("limit", "100")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                name: self.name(),
                status: status.as_u16(),
            });
        }

        let payload: RemotiveResponse = response.json().await?;

        let mut jobs = Vec::with_capacity(payload.jobs.len().min(MAX_JOBS_PER_SOURCE));
        for job in payload.jobs.into_iter().take(MAX_JOBS_PER_SOURCE) {
            jobs.push(self.normalize(job).await);
        }
        Ok(jobs)
    }
}
