//! Experience-level inference for sources that publish no seniority field.

use crate::models::job::ExperienceLevel;

const SENIOR_MARKERS: &[&str] = &["senior", "sr.", "lead", "principal", "staff"];
const ENTRY_MARKERS: &[&str] = &["junior", "jr.", "entry", "graduate", "associate"];
const INTERN_MARKERS: &[&str] = &["intern", "student", "apprenticeship"];

/// Keyword heuristic over title + description, case-insensitive.
/// Tiers are checked in fixed priority order and the first match wins:
/// senior markers outrank entry markers, which outrank internship markers.
/// No marker at all means Mid Level.
pub fn detect_experience_level(title: &str, description: &str) -> ExperienceLevel {
    let text = format!("{title} {description}").to_lowercase();

    if SENIOR_MARKERS.iter().any(|m| text.contains(m)) {
        ExperienceLevel::Senior
    } else if ENTRY_MARKERS.iter().any(|m| text.contains(m)) {
        ExperienceLevel::Entry
    } else if INTERN_MARKERS.iter().any(|m| text.contains(m)) {
        ExperienceLevel::Internship
    } else {
        ExperienceLevel::Mid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_title_is_senior_level() {
        assert_eq!(
            detect_experience_level("Senior Backend Engineer", ""),
            ExperienceLevel::Senior
        );
    }

    #[test]
    fn test_intern_title_is_internship() {
        assert_eq!(
            detect_experience_level("Marketing Intern", ""),
            ExperienceLevel::Internship
        );
    }

    #[test]
    fn test_unmarked_title_defaults_to_mid_level() {
        assert_eq!(
            detect_experience_level("Software Engineer", ""),
            ExperienceLevel::Mid
        );
    }

    #[test]
    fn test_entry_markers_in_description() {
        assert_eq!(
            detect_experience_level("Developer", "Great role for a recent graduate."),
            ExperienceLevel::Entry
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            detect_experience_level("PRINCIPAL ENGINEER", ""),
            ExperienceLevel::Senior
        );
    }

    #[test]
    fn test_senior_outranks_entry() {
        assert_eq!(
            detect_experience_level("Senior Engineer", "mentors junior developers"),
            ExperienceLevel::Senior
        );
    }

    #[test]
    fn test_entry_outranks_internship() {
        assert_eq!(
            detect_experience_level("Junior Developer", "former intern welcome"),
            ExperienceLevel::Entry
        );
    }

    #[test]
    fn test_abbreviated_markers() {
        assert_eq!(
            detect_experience_level("Sr. Platform Engineer", ""),
            ExperienceLevel::Senior
        );
        assert_eq!(
            detect_experience_level("Jr. QA Analyst", ""),
            ExperienceLevel::Entry
        );
    }
}
