//! The four query predicates, applied uniformly to every collected record
//! regardless of origin. Upstream pre-filtering is never trusted to match
//! the caller's intent, so these always run centrally.

use crate::models::job::{JobPosting, JobQuery};

/// A record passes when every supplied predicate matches. Unsupplied or
/// blank filters pass everything.
pub fn matches_query(job: &JobPosting, query: &JobQuery) -> bool {
    active(&query.keyword).map_or(true, |k| matches_keyword(job, k))
        && active(&query.location).map_or(true, |l| matches_location(job, l))
        && active(&query.job_type).map_or(true, |t| matches_type(job, t))
        && active(&query.category).map_or(true, |c| matches_category(job, c))
}

fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|s| !s.trim().is_empty())
}

/// Case-insensitive substring match against title, company name or
/// description; any one is sufficient.
fn matches_keyword(job: &JobPosting, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    job.title.to_lowercase().contains(&needle)
        || job.company.name.to_lowercase().contains(&needle)
        || job.description.to_lowercase().contains(&needle)
}

fn matches_location(job: &JobPosting, location: &str) -> bool {
    job.location.to_lowercase().contains(&location.to_lowercase())
}

/// Type matching carries two special rules: "internship" also matches a
/// title containing "intern", and "full-time" is satisfied by a remote type
/// tag as well — most aggregated listings mark remote work as a type rather
/// than full-time explicitly, so the filter must not exclude them.
fn matches_type(job: &JobPosting, job_type: &str) -> bool {
    let wanted = job_type.to_lowercase();
    let label = job.job_type.label().to_lowercase();

    if wanted == "internship" {
        return job.title.to_lowercase().contains("intern") || label.contains("intern");
    }
    if wanted == "full-time" {
        return label.contains("full") || label.contains("remote");
    }
    label.contains(&wanted)
}

/// Case-insensitive substring match against category or title.
fn matches_category(job: &JobPosting, category: &str) -> bool {
    let needle = category.to_lowercase();
    job.category.to_lowercase().contains(&needle) || job.title.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{
        Company, ExperienceLevel, JobOrigin, JobStatus, JobType, SalaryRange,
    };
    use chrono::Utc;

    fn job(title: &str, company: &str, description: &str) -> JobPosting {
        JobPosting {
            id: format!("ext_an_{}", title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            description: description.to_string(),
            company: Company {
                name: company.to_string(),
            },
            location: "Berlin".to_string(),
            job_type: JobType::FullTime,
            category: "Technology".to_string(),
            salary_range: SalaryRange::unspecified(),
            experience_level: ExperienceLevel::Mid,
            requirements: vec![],
            benefits: vec![],
            is_remote: false,
            status: JobStatus::Active,
            source: JobOrigin::External,
            source_name: "Arbeitnow".to_string(),
            source_url: None,
            posted_date: Utc::now(),
        }
    }

    fn query() -> JobQuery {
        JobQuery::default()
    }

    #[test]
    fn test_empty_query_passes_everything() {
        assert!(matches_query(&job("Engineer", "Acme", "desc"), &query()));
    }

    #[test]
    fn test_blank_filters_pass_everything() {
        let q = JobQuery {
            keyword: Some(String::new()),
            location: Some("  ".to_string()),
            ..query()
        };
        assert!(matches_query(&job("Engineer", "Acme", "desc"), &q));
    }

    #[test]
    fn test_keyword_matches_title_company_or_description() {
        let q = JobQuery {
            keyword: Some("rust".to_string()),
            ..query()
        };
        assert!(matches_query(&job("Rust Engineer", "Acme", ""), &q));
        assert!(matches_query(&job("Engineer", "Rustworks", ""), &q));
        assert!(matches_query(&job("Engineer", "Acme", "We use Rust daily"), &q));
        assert!(!matches_query(&job("Engineer", "Acme", "We use Go"), &q));
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let q = JobQuery {
            keyword: Some("RUST".to_string()),
            ..query()
        };
        assert!(matches_query(&job("rust engineer", "Acme", ""), &q));
    }

    #[test]
    fn test_location_substring_match() {
        let q = JobQuery {
            location: Some("berl".to_string()),
            ..query()
        };
        assert!(matches_query(&job("Engineer", "Acme", ""), &q));

        let q = JobQuery {
            location: Some("Munich".to_string()),
            ..query()
        };
        assert!(!matches_query(&job("Engineer", "Acme", ""), &q));
    }

    #[test]
    fn test_type_filter_exact_vocabulary() {
        let mut contract = job("Engineer", "Acme", "");
        contract.job_type = JobType::Contract;

        let q = JobQuery {
            job_type: Some("contract".to_string()),
            ..query()
        };
        assert!(matches_query(&contract, &q));
        assert!(!matches_query(&job("Engineer", "Acme", ""), &q));
    }

    #[test]
    fn test_full_time_filter_accepts_remote_type() {
        let mut remote = job("Engineer", "Acme", "");
        remote.job_type = JobType::Remote;

        let q = JobQuery {
            job_type: Some("Full-time".to_string()),
            ..query()
        };
        assert!(matches_query(&remote, &q));
        assert!(matches_query(&job("Engineer", "Acme", ""), &q));
    }

    #[test]
    fn test_full_time_filter_rejects_part_time() {
        let mut part_time = job("Engineer", "Acme", "");
        part_time.job_type = JobType::PartTime;

        let q = JobQuery {
            job_type: Some("full-time".to_string()),
            ..query()
        };
        assert!(!matches_query(&part_time, &q));
    }

    #[test]
    fn test_internship_filter_matches_title_marker() {
        let q = JobQuery {
            job_type: Some("Internship".to_string()),
            ..query()
        };
        // Type says Full-time but the title reveals an internship.
        assert!(matches_query(&job("Marketing Intern", "Acme", ""), &q));
        assert!(!matches_query(&job("Engineer", "Acme", ""), &q));

        let mut intern = job("Engineer", "Acme", "");
        intern.job_type = JobType::Internship;
        assert!(matches_query(&intern, &q));
    }

    #[test]
    fn test_category_matches_category_or_title() {
        let q = JobQuery {
            category: Some("Design".to_string()),
            ..query()
        };

        let mut designer = job("Product Designer", "Acme", "");
        designer.category = "Creative".to_string();
        assert!(matches_query(&designer, &q));

        let mut categorized = job("Engineer", "Acme", "");
        categorized.category = "Design".to_string();
        assert!(matches_query(&categorized, &q));

        assert!(!matches_query(&job("Engineer", "Acme", ""), &q));
    }

    #[test]
    fn test_all_supplied_predicates_must_match() {
        let q = JobQuery {
            keyword: Some("engineer".to_string()),
            location: Some("paris".to_string()),
            ..query()
        };
        // Keyword matches but location does not.
        assert!(!matches_query(&job("Engineer", "Acme", ""), &q));
    }
}
