//! Arbeitnow job-board fetcher. Listings skew German, so descriptions and
//! gender-tagged titles go through the translation pipeline.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::classify::detect_experience_level;
use crate::models::job::{
    Company, JobOrigin, JobPosting, JobQuery, JobStatus, JobType, SalaryRange,
};
use crate::sources::{fallback_description, JobSource, SourceError, MAX_JOBS_PER_SOURCE};
use crate::text::strip_html;
use crate::translation::Translator;

const API_URL: &str = "https://www.arbeitnow.com/api/job-board-api";
const FETCH_TIMEOUT: Duration = Duration::from_secs(12);

/// German gender-inclusive tags stripped from titles before translation.
const GENDER_TAGS: &[&str] = &[" (m/w/d)", " (gn)"];

#[derive(Debug, Deserialize)]
struct ArbeitnowResponse {
    data: Vec<ArbeitnowJob>,
}

#[derive(Debug, Deserialize)]
struct ArbeitnowJob {
    slug: String,
    title: String,
    #[serde(default)]
    description: String,
    company_name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    remote: bool,
    #[serde(default)]
    tags: Vec<String>,
    url: String,
    #[serde(default)]
    created_at: i64,
}

pub struct ArbeitnowSource {
    client: Client,
    translator: Arc<Translator>,
}

impl ArbeitnowSource {
    pub fn new(translator: Arc<Translator>) -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            translator,
        }
    }

    async fn normalize(&self, job: ArbeitnowJob) -> JobPosting {
        let cleaned = strip_html(&job.description);
        let mut description = self.translator.translate_to_english(&cleaned).await;

        let mut title = job.title;
        if GENDER_TAGS.iter().any(|tag| title.contains(tag)) {
            for tag in GENDER_TAGS {
                title = title.replace(tag, "");
            }
            title = self.translator.translate_to_english(&title).await;
        }

        if description.trim().is_empty() {
            description = fallback_description(&title, &job.company_name);
        }

        let experience_level = detect_experience_level(&title, &description);
        let posted_date = DateTime::from_timestamp(job.created_at, 0).unwrap_or_else(Utc::now);

        JobPosting {
            id: format!("ext_an_{}", job.slug),
            title,
            description,
            company: Company {
                name: job.company_name,
            },
            location: job.location,
            job_type: if job.remote {
                JobType::Remote
            } else {
                JobType::FullTime
            },
            category: "Technology".to_string(),
            salary_range: SalaryRange::unspecified(),
            experience_level,
            requirements: job.tags,
            benefits: Vec::new(),
            is_remote: job.remote,
            status: JobStatus::Active,
            source: JobOrigin::External,
            source_name: "Arbeitnow".to_string(),
            source_url: Some(job.url),
            posted_date,
        }
    }
}

#[async_trait]
impl JobSource for ArbeitnowSource {
    fn name(&self) -> &'static str {
        "Arbeitnow"
    }

    // Arbeitnow's public endpoint takes no search parameters; filtering
    // happens centrally in the aggregator.
    async fn fetch(&self, _query: &JobQuery) -> Result<Vec<JobPosting>, SourceError> {
        let response = self.client.get(API_URL).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                name: self.name(),
                status: status.as_u16(),
            });
        }

        let payload: ArbeitnowResponse = response.json().await?;

        let mut jobs = Vec::with_capacity(payload.data.len().min(MAX_JOBS_PER_SOURCE));
        for job in payload.data.into_iter().take(MAX_JOBS_PER_SOURCE) {
            jobs.push(self.normalize(job).await);
        }
        Ok(jobs)
    }
}
