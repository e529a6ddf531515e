//! Curated catalog of example big-tech listings, exposed as an ordinary
//! source. Registered after the live providers so id-based dedup gives live
//! records precedence, and guaranteed non-empty so a total upstream outage
//! still yields a usable response.

use async_trait::async_trait;
use chrono::Utc;

use crate::models::job::{
    Company, ExperienceLevel, JobOrigin, JobPosting, JobQuery, JobStatus, JobType, SalaryRange,
};
use crate::sources::{JobSource, SourceError};

pub struct CatalogSource;

#[async_trait]
impl JobSource for CatalogSource {
    fn name(&self) -> &'static str {
        "Curated Catalog"
    }

    async fn fetch(&self, _query: &JobQuery) -> Result<Vec<JobPosting>, SourceError> {
        Ok(catalog_listings())
    }
}

#[derive(Clone, Copy)]
struct CatalogEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    company: &'static str,
    location: &'static str,
    job_type: JobType,
    category: &'static str,
    salary_min: f64,
    salary_max: f64,
    currency: &'static str,
    experience_level: ExperienceLevel,
    requirements: &'static [&'static str],
    benefits: &'static [&'static str],
    is_remote: bool,
    source_name: &'static str,
    source_url: &'static str,
}

impl CatalogEntry {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            company: Company {
                name: self.company.to_string(),
            },
            location: self.location.to_string(),
            job_type: self.job_type,
            category: self.category.to_string(),
            salary_range: SalaryRange {
                min: Some(self.salary_min),
                max: Some(self.salary_max),
                currency: self.currency.to_string(),
            },
            experience_level: self.experience_level,
            requirements: self.requirements.iter().map(|s| s.to_string()).collect(),
            benefits: self.benefits.iter().map(|s| s.to_string()).collect(),
            is_remote: self.is_remote,
            status: JobStatus::Active,
            source: JobOrigin::External,
            source_name: self.source_name.to_string(),
            source_url: Some(self.source_url.to_string()),
            posted_date: Utc::now(),
        }
    }
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "ext_mock_google_1",
        title: "Software Engineer, University Graduate",
        description: "Join Google as a software engineer...",
        company: "Google",
        location: "Mountain View, CA",
        job_type: JobType::FullTime,
        category: "Software Engineering",
        salary_min: 140_000.0,
        salary_max: 190_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Entry,
        requirements: &["C++", "Java"],
        benefits: &["Health", "401k"],
        is_remote: false,
        source_name: "Google Careers",
        source_url: "https://www.google.com/about/careers/applications/jobs/results/",
    },
    CatalogEntry {
        id: "ext_mock_apple_1",
        title: "iOS Frameworks Engineer",
        description: "Design and implement new features for Apple platforms...",
        company: "Apple",
        location: "Cupertino, CA",
        job_type: JobType::FullTime,
        category: "Software Engineering",
        salary_min: 160_000.0,
        salary_max: 220_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Senior,
        requirements: &["Swift", "Objective-C"],
        benefits: &["Product Discounts", "Health Insurance"],
        is_remote: false,
        source_name: "Apple Jobs",
        source_url: "https://www.apple.com/careers/us/apps.html",
    },
    CatalogEntry {
        id: "ext_mock_msft_1",
        title: "Cloud Solutions Architect",
        description: "Work with Azure cloud technologies to solve complex problems...",
        company: "Microsoft",
        location: "Redmond, WA",
        job_type: JobType::FullTime,
        category: "Technology",
        salary_min: 150_000.0,
        salary_max: 210_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Senior,
        requirements: &["Azure", "Cloud Architecture"],
        benefits: &["Remote Work Options", "Pension Plan"],
        is_remote: true,
        source_name: "Microsoft Careers",
        source_url: "https://careers.microsoft.com/",
    },
    CatalogEntry {
        id: "ext_mock_netflix_1",
        title: "UI Engineer - Content Engineering",
        description: "Build high-performance UIs for Netflix streaming service...",
        company: "Netflix",
        location: "Los Gatos, CA",
        job_type: JobType::FullTime,
        category: "Design",
        salary_min: 200_000.0,
        salary_max: 350_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Senior,
        requirements: &["React", "JavaScript", "CSS"],
        benefits: &["Personal Top of Market Pay", "Work Life Balance"],
        is_remote: true,
        source_name: "Netflix Jobs",
        source_url: "https://jobs.netflix.com/",
    },
    CatalogEntry {
        id: "ext_mock_meta_1",
        title: "Product Designer (New Grad)",
        description: "Design the future of social connection at Meta...",
        company: "Meta",
        location: "Menlo Park, CA",
        job_type: JobType::FullTime,
        category: "Design",
        salary_min: 120_000.0,
        salary_max: 160_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Entry,
        requirements: &["Figma", "UI/UX Design"],
        benefits: &["Mental Health Support", "On-site Meals"],
        is_remote: false,
        source_name: "Meta Careers",
        source_url: "https://www.metacareers.com/",
    },
    CatalogEntry {
        id: "ext_mock_tsla_1",
        title: "Autopilot Software Engineer",
        description: "Develop the algorithms that power Tesla Autopilot...",
        company: "Tesla",
        location: "Palo Alto, CA",
        job_type: JobType::FullTime,
        category: "Software Engineering",
        salary_min: 155_000.0,
        salary_max: 240_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Mid,
        requirements: &["Python", "C++", "Computer Vision"],
        benefits: &["Stock Options", "Innovation Hub"],
        is_remote: false,
        source_name: "Tesla Careers",
        source_url: "https://www.tesla.com/careers",
    },
    CatalogEntry {
        id: "ext_mock_uber_1",
        title: "Backend Engineer - Marketplace",
        description: "Optimize the real-time pricing and matching algorithms for Uber...",
        company: "Uber",
        location: "San Francisco, CA",
        job_type: JobType::FullTime,
        category: "Software Engineering",
        salary_min: 145_000.0,
        salary_max: 210_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Mid,
        requirements: &["Go", "Java", "Distributed Systems"],
        benefits: &["Commuter Credits", "Global Impact"],
        is_remote: false,
        source_name: "Uber Careers",
        source_url: "https://www.uber.com/careers",
    },
    CatalogEntry {
        id: "ext_mock_airbnb_1",
        title: "Frontend Developer - Guest Experience",
        description: "Create beautiful, accessible experiences for Airbnb guests...",
        company: "Airbnb",
        location: "Remote",
        job_type: JobType::FullTime,
        category: "Web Development",
        salary_min: 140_000.0,
        salary_max: 200_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Mid,
        requirements: &["React", "TypeScript"],
        benefits: &["Travel Credits", "Flexible Work"],
        is_remote: true,
        source_name: "Airbnb Careers",
        source_url: "https://careers.airbnb.com/",
    },
    CatalogEntry {
        id: "ext_mock_spotify_1",
        title: "Data Scientist - Personalization",
        description: "Help shape the future of music discovery at Spotify...",
        company: "Spotify",
        location: "New York, NY",
        job_type: JobType::FullTime,
        category: "Data Science",
        salary_min: 130_000.0,
        salary_max: 185_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Mid,
        requirements: &["Python", "SQL", "Machine Learning"],
        benefits: &["Work from Anywhere", "Mental Health Days"],
        is_remote: true,
        source_name: "Spotify Jobs",
        source_url: "https://www.lifeatspotify.com/",
    },
    CatalogEntry {
        id: "ext_mock_nvidia_1",
        title: "Deep Learning Software Engineer",
        description: "Work on the cutting edge of AI and GPU computing...",
        company: "Nvidia",
        location: "Santa Clara, CA",
        job_type: JobType::FullTime,
        category: "Software Engineering",
        salary_min: 170_000.0,
        salary_max: 260_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Senior,
        requirements: &["CUDA", "PyTorch", "C++"],
        benefits: &["Leading Edge R&D", "Comprehensive Health"],
        is_remote: false,
        source_name: "Nvidia Careers",
        source_url: "https://www.nvidia.com/en-us/about-nvidia/careers/",
    },
    CatalogEntry {
        id: "ext_mock_amzn_2",
        title: "Software Development Manager",
        description: "Lead a team of engineers to build scalable systems for Amazon Retail...",
        company: "Amazon",
        location: "Seattle, WA",
        job_type: JobType::FullTime,
        category: "Software Engineering",
        salary_min: 180_000.0,
        salary_max: 280_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Senior,
        requirements: &["Engineering Management", "System Design"],
        benefits: &["Stocks", "Relocation"],
        is_remote: false,
        source_name: "Amazon Jobs",
        source_url: "https://www.amazon.jobs/",
    },
    CatalogEntry {
        id: "ext_mock_goog_2",
        title: "Cloud Security Engineer",
        description: "Ensure the security and reliability of Google Cloud Platform...",
        company: "Google",
        location: "London, UK",
        job_type: JobType::FullTime,
        category: "Technology",
        salary_min: 110_000.0,
        salary_max: 160_000.0,
        currency: "GBP",
        experience_level: ExperienceLevel::Mid,
        requirements: &["Cloud Security", "Kubernetes"],
        benefits: &["Bonus", "Private Healthcare"],
        is_remote: true,
        source_name: "Google Careers",
        source_url: "https://www.google.com/about/careers/",
    },
    CatalogEntry {
        id: "ext_mock_sam_1",
        title: "Senior Android Developer",
        description: "Create the next generation of mobile experiences for Galaxy devices...",
        company: "Samsung",
        location: "Seoul, South Korea",
        job_type: JobType::FullTime,
        category: "Software Engineering",
        salary_min: 90_000_000.0,
        salary_max: 130_000_000.0,
        currency: "KRW",
        experience_level: ExperienceLevel::Senior,
        requirements: &["Kotlin", "Android SDK"],
        benefits: &["Housing Support", "Performance Bonus"],
        is_remote: false,
        source_name: "Samsung Careers",
        source_url: "https://www.samsung.com/global/ir/governance/careers/",
    },
    CatalogEntry {
        id: "ext_mock_intc_1",
        title: "Hardware Design Intern",
        description: "Help design the next generation of processors at Intel...",
        company: "Intel",
        location: "Austin, TX",
        job_type: JobType::Internship,
        category: "Technology",
        salary_min: 35.0,
        salary_max: 50.0,
        currency: "USD/hr",
        experience_level: ExperienceLevel::Internship,
        requirements: &["VHDL", "Verilog", "Computer Architecture"],
        benefits: &["Mentorship", "Intern Events"],
        is_remote: false,
        source_name: "Intel Jobs",
        source_url: "https://www.intel.com/content/www/us/en/jobs/jobs-at-intel.html",
    },
    CatalogEntry {
        id: "ext_mock_crm_1",
        title: "Salesforce Developer",
        description: "Build custom solutions on the Salesforce platform for enterprise clients...",
        company: "Salesforce",
        location: "San Francisco, CA",
        job_type: JobType::FullTime,
        category: "Software Engineering",
        salary_min: 135_000.0,
        salary_max: 190_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Mid,
        requirements: &["Apex", "Lightning Components"],
        benefits: &["Wellness Reimbursement", "VTO"],
        is_remote: true,
        source_name: "Salesforce Careers",
        source_url: "https://www.salesforce.com/company/careers/",
    },
    CatalogEntry {
        id: "ext_mock_adbe_1",
        title: "Product Manager - Creative Cloud",
        description: "Define the roadmap for the world's leading creative tools...",
        company: "Adobe",
        location: "San Jose, CA",
        job_type: JobType::FullTime,
        category: "Technology",
        salary_min: 150_000.0,
        salary_max: 210_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Mid,
        requirements: &["Product Strategy", "UI/UX Knowledge"],
        benefits: &["Sabbatical", "Education Subsidy"],
        is_remote: false,
        source_name: "Adobe Careers",
        source_url: "https://www.adobe.com/careers.html",
    },
    CatalogEntry {
        id: "ext_mock_ora_1",
        title: "Database Engineer",
        description: "Maintain and optimize high-performance database clusters...",
        company: "Oracle",
        location: "Remote",
        job_type: JobType::FullTime,
        category: "Technology",
        salary_min: 125_000.0,
        salary_max: 180_000.0,
        currency: "USD",
        experience_level: ExperienceLevel::Mid,
        requirements: &["SQL", "Database Administration"],
        benefits: &["Flexible Working", "Global Opportunities"],
        is_remote: true,
        source_name: "Oracle Careers",
        source_url: "https://www.oracle.com/corporate/careers/",
    },
];

/// Materializes the catalog with fresh posting timestamps.
pub fn catalog_listings() -> Vec<JobPosting> {
    CATALOG.iter().map(|entry| entry.into_posting()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_never_empty() {
        assert!(!catalog_listings().is_empty());
    }

    #[test]
    fn test_catalog_ids_are_unique_and_prefixed() {
        let listings = catalog_listings();
        let ids: HashSet<_> = listings.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), listings.len());
        assert!(listings.iter().all(|j| j.id.starts_with("ext_mock_")));
    }

    #[test]
    fn test_catalog_records_are_active_external() {
        for job in catalog_listings() {
            assert_eq!(job.status, JobStatus::Active);
            assert_eq!(job.source, JobOrigin::External);
            assert!(job.source_url.is_some());
            assert!(!job.company.name.is_empty());
        }
    }

    #[test]
    fn test_catalog_contains_an_internship() {
        assert!(catalog_listings()
            .iter()
            .any(|j| j.job_type == JobType::Internship
                && j.experience_level == ExperienceLevel::Internship));
    }

    #[tokio::test]
    async fn test_fetch_always_succeeds() {
        let jobs = CatalogSource.fetch(&JobQuery::default()).await.unwrap();
        assert_eq!(jobs.len(), catalog_listings().len());
    }
}
