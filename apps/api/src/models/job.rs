//! Canonical job record — the one shape every source is normalized into.
//! Serialized field names are the wire contract; consumers never branch on
//! source-specific fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employment type vocabulary. Sources that use a different vocabulary are
/// mapped onto it during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Freelance,
    Internship,
    Remote,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
            JobType::Internship => "Internship",
            JobType::Remote => "Remote",
        }
    }

    /// Maps a free-text source tag (e.g. Remotive's `full_time`) onto the
    /// canonical vocabulary. A bare is-remote flag maps to `Remote` when the
    /// tag itself carries no usable type.
    pub fn from_source_tag(tag: &str, is_remote: bool) -> Self {
        let tag = tag.to_lowercase();
        if tag.contains("part") {
            JobType::PartTime
        } else if tag.contains("contract") {
            JobType::Contract
        } else if tag.contains("freelance") {
            JobType::Freelance
        } else if tag.contains("intern") {
            JobType::Internship
        } else if tag.contains("remote") {
            JobType::Remote
        } else if tag.contains("full") {
            JobType::FullTime
        } else if is_remote {
            JobType::Remote
        } else {
            JobType::FullTime
        }
    }
}

/// Seniority band, inferred by the classifier when a source lacks the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    Entry,
    #[serde(rename = "Mid Level")]
    Mid,
    #[serde(rename = "Senior Level")]
    Senior,
    Executive,
    Internship,
}

/// Lifecycle status. Aggregated external records are always `active`; the
/// full vocabulary exists only for wire compatibility with internal records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Closed,
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobOrigin {
    Internal,
    External,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: String,
}

impl SalaryRange {
    /// Most aggregated listings publish no salary data.
    pub fn unspecified() -> Self {
        SalaryRange {
            min: None,
            max: None,
            currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub company: Company,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub category: String,
    pub salary_range: SalaryRange,
    pub experience_level: ExperienceLevel,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub is_remote: bool,
    pub status: JobStatus,
    pub source: JobOrigin,
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub posted_date: DateTime<Utc>,
}

/// The four optional filters accepted by the public query interface. Sources
/// may use them for light pre-filtering; the aggregator always re-applies
/// them centrally.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posting() -> JobPosting {
        JobPosting {
            id: "ext_an_rust-engineer".to_string(),
            title: "Senior Rust Engineer".to_string(),
            description: "Build backend services.".to_string(),
            company: Company {
                name: "Acme".to_string(),
            },
            location: "Berlin".to_string(),
            job_type: JobType::FullTime,
            category: "Technology".to_string(),
            salary_range: SalaryRange::unspecified(),
            experience_level: ExperienceLevel::Senior,
            requirements: vec!["rust".to_string()],
            benefits: vec![],
            is_remote: false,
            status: JobStatus::Active,
            source: JobOrigin::External,
            source_name: "Arbeitnow".to_string(),
            source_url: Some("https://example.com/job".to_string()),
            posted_date: Utc::now(),
        }
    }

    #[test]
    fn test_wire_shape_uses_camel_case_keys() {
        let value = serde_json::to_value(sample_posting()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "title",
            "description",
            "company",
            "location",
            "type",
            "category",
            "salaryRange",
            "experienceLevel",
            "requirements",
            "benefits",
            "isRemote",
            "status",
            "source",
            "sourceName",
            "sourceUrl",
            "postedDate",
        ] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
    }

    #[test]
    fn test_wire_enum_labels() {
        let value = serde_json::to_value(sample_posting()).unwrap();
        assert_eq!(value["type"], "Full-time");
        assert_eq!(value["experienceLevel"], "Senior Level");
        assert_eq!(value["status"], "active");
        assert_eq!(value["source"], "external");
    }

    #[test]
    fn test_posting_round_trips_through_json() {
        let posting = sample_posting();
        let json = serde_json::to_string(&posting).unwrap();
        let back: JobPosting = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, posting.id);
        assert_eq!(back.job_type, posting.job_type);
        assert_eq!(back.experience_level, posting.experience_level);
    }

    #[test]
    fn test_from_source_tag_maps_remotive_vocabulary() {
        assert_eq!(JobType::from_source_tag("full_time", true), JobType::FullTime);
        assert_eq!(JobType::from_source_tag("part_time", false), JobType::PartTime);
        assert_eq!(JobType::from_source_tag("contract", false), JobType::Contract);
        assert_eq!(JobType::from_source_tag("freelance", false), JobType::Freelance);
        assert_eq!(JobType::from_source_tag("internship", false), JobType::Internship);
    }

    #[test]
    fn test_from_source_tag_unknown_falls_back_to_remote_flag() {
        assert_eq!(JobType::from_source_tag("other", true), JobType::Remote);
        assert_eq!(JobType::from_source_tag("", true), JobType::Remote);
        assert_eq!(JobType::from_source_tag("other", false), JobType::FullTime);
    }

    #[test]
    fn test_unspecified_salary_has_no_bounds() {
        let salary = SalaryRange::unspecified();
        assert!(salary.min.is_none());
        assert!(salary.max.is_none());
        assert_eq!(salary.currency, "USD");
    }
}
