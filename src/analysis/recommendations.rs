//! Prioritized improvement guidance derived from category scores

use crate::analysis::scoring::{Category, CategoryScores};
use serde::{Deserialize, Serialize};

const CRITICAL_THRESHOLD: f64 = 60.0;
const IMPORTANT_THRESHOLD: f64 = 80.0;

/// One message per category and priority band. Kept as data so the copy can
/// be reviewed without touching the routing logic.
const CATEGORY_MESSAGES: [(Category, &str, &str); 6] = [
    (
        Category::Keywords,
        "Add more role-specific keywords from the target job description; \
         automated screening filters on them before a human ever reads the resume.",
        "Work a few more profession keywords into your experience bullets to \
         strengthen keyword coverage.",
    ),
    (
        Category::ContentQuality,
        "Rewrite experience bullets to lead with action verbs and quantified \
         results; the current content reads as duties rather than achievements.",
        "Quantify more of your accomplishments with numbers, percentages or \
         dollar amounts.",
    ),
    (
        Category::Formatting,
        "Simplify the formatting: remove special characters and decorative \
         symbols, and make sure contact details appear in plain text.",
        "Tighten the formatting; standard section names and a conventional \
         length parse most reliably.",
    ),
    (
        Category::Structure,
        "Restructure the resume with clear uppercase section headers and \
         bulleted accomplishments, with experience listed before education.",
        "Add a few more section headers or bullets so scanners can follow the \
         document's structure.",
    ),
    (
        Category::Completeness,
        "Add the missing core sections; screening systems expect experience, \
         education and skills to all be present.",
        "Expand the experience and education sections with more specifics \
         (roles, institutions, dates, outcomes).",
    ),
    (
        Category::Optimization,
        "Add technology and industry terms recruiters search for; the resume \
         currently carries very few of them.",
        "Mention a few more in-demand tools and industry phrases where they \
         genuinely apply.",
    ),
];

/// Always-on suggestions, independent of any score.
const OPTIONAL_CATALOG: [&str; 4] = [
    "Consider adding a brief professional summary at the top.",
    "Include a link to your portfolio, GitHub or LinkedIn profile.",
    "Use one consistent date format throughout the document.",
    "Tailor the resume for each application rather than sending one version everywhere.",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub critical: Vec<String>,
    pub important: Vec<String>,
    pub optional: Vec<String>,
}

pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Pure function of the category scores; iteration order is fixed so the
    /// output is stable across calls.
    pub fn generate(scores: &CategoryScores) -> Recommendations {
        let mut critical = Vec::new();
        let mut important = Vec::new();

        for (category, critical_msg, important_msg) in CATEGORY_MESSAGES {
            let score = scores.get(category);
            if score < CRITICAL_THRESHOLD {
                critical.push(critical_msg.to_string());
            } else if score < IMPORTANT_THRESHOLD {
                important.push(important_msg.to_string());
            }
        }

        Recommendations {
            critical,
            important,
            optional: OPTIONAL_CATALOG.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [f64; 6]) -> CategoryScores {
        CategoryScores {
            keywords: values[0],
            content_quality: values[1],
            formatting: values[2],
            structure: values[3],
            completeness: values[4],
            optimization: values[5],
        }
    }

    #[test]
    fn test_low_formatting_is_critical_only() {
        let recs = RecommendationEngine::generate(&scores([90.0, 90.0, 45.0, 90.0, 90.0, 90.0]));

        let formatting_critical = CATEGORY_MESSAGES[2].1;
        let formatting_important = CATEGORY_MESSAGES[2].2;
        assert!(recs.critical.contains(&formatting_critical.to_string()));
        assert!(!recs.important.contains(&formatting_important.to_string()));
        assert!(!recs.optional.contains(&formatting_critical.to_string()));
    }

    #[test]
    fn test_mid_band_goes_to_important() {
        let recs = RecommendationEngine::generate(&scores([70.0, 90.0, 90.0, 90.0, 90.0, 90.0]));

        assert!(recs.critical.is_empty());
        assert_eq!(recs.important.len(), 1);
    }

    #[test]
    fn test_boundaries_are_exact() {
        // 60 is important, 59.9 critical; 80 is neither.
        let at_60 = RecommendationEngine::generate(&scores([60.0, 90.0, 90.0, 90.0, 90.0, 90.0]));
        assert!(at_60.critical.is_empty());
        assert_eq!(at_60.important.len(), 1);

        let below_60 =
            RecommendationEngine::generate(&scores([59.9, 90.0, 90.0, 90.0, 90.0, 90.0]));
        assert_eq!(below_60.critical.len(), 1);

        let at_80 = RecommendationEngine::generate(&scores([80.0, 90.0, 90.0, 90.0, 90.0, 90.0]));
        assert!(at_80.critical.is_empty());
        assert!(at_80.important.is_empty());
    }

    #[test]
    fn test_optional_catalog_always_present() {
        let strong = RecommendationEngine::generate(&scores([95.0; 6]));
        let weak = RecommendationEngine::generate(&scores([10.0; 6]));

        assert_eq!(strong.optional.len(), 4);
        assert_eq!(strong.optional, weak.optional);
    }

    #[test]
    fn test_fixed_category_order() {
        let recs = RecommendationEngine::generate(&scores([10.0; 6]));

        assert_eq!(recs.critical.len(), 6);
        assert_eq!(recs.critical[0], CATEGORY_MESSAGES[0].1);
        assert_eq!(recs.critical[5], CATEGORY_MESSAGES[5].1);
    }
}
