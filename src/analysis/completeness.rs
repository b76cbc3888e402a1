//! Required-section presence and topical coverage

use crate::analysis::text::ResumeView;
use serde::{Deserialize, Serialize};

const REQUIRED_SECTIONS: &[&str] = &["experience", "education", "skills"];

const EXPERIENCE_TERMS: &[&str] = &[
    "worked", "job", "position", "role", "responsibilities", "achieved", "managed",
];

const EDUCATION_TERMS: &[&str] = &[
    "degree", "university", "college", "bachelor", "master", "phd", "graduated", "gpa",
];

const SECTION_POINTS: f64 = 50.0;
const COVERAGE_POINTS_CAP: f64 = 25.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessAnalysis {
    pub score: f64,
    pub found_sections: Vec<String>,
    pub missing_sections: Vec<String>,
    /// Percentage of experience-related terms present, 0-100.
    pub experience_coverage: f64,
    /// Percentage of education-related terms present, 0-100.
    pub education_coverage: f64,
}

pub struct CompletenessAnalyzer;

impl CompletenessAnalyzer {
    pub fn analyze(view: &ResumeView<'_>) -> CompletenessAnalysis {
        let found_sections: Vec<String> = REQUIRED_SECTIONS
            .iter()
            .filter(|section| view.contains(section))
            .map(|section| section.to_string())
            .collect();
        let missing_sections: Vec<String> = REQUIRED_SECTIONS
            .iter()
            .filter(|section| !view.contains(section))
            .map(|section| section.to_string())
            .collect();

        let experience_coverage = coverage(view, EXPERIENCE_TERMS);
        let education_coverage = coverage(view, EDUCATION_TERMS);

        let section_points =
            found_sections.len() as f64 / REQUIRED_SECTIONS.len() as f64 * SECTION_POINTS;
        let experience_points = (experience_coverage * 0.25).min(COVERAGE_POINTS_CAP);
        let education_points = (education_coverage * 0.25).min(COVERAGE_POINTS_CAP);

        CompletenessAnalysis {
            score: section_points + experience_points + education_points,
            found_sections,
            missing_sections,
            experience_coverage,
            education_coverage,
        }
    }
}

fn coverage(view: &ResumeView<'_>, terms: &[&str]) -> f64 {
    let matched = terms.iter().filter(|term| view.contains(term)).count();
    matched as f64 / terms.len() as f64 * 100.0
}
