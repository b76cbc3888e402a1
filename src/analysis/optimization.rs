//! SEO-style keyword density, industry phrases and modern formatting

use crate::analysis::text::{PatternSet, ResumeView};
use serde::{Deserialize, Serialize};

const SEO_TERMS: &[&str] = &[
    "python", "javascript", "react", "node.js", "sql", "aws", "docker",
];

const INDUSTRY_PHRASES: &[&str] = &[
    "software development",
    "web applications",
    "database design",
    "cloud computing",
    "agile methodology",
];

/// Curated snapshot shown to users; not derived from the input.
const TRENDING_SKILLS: &[&str] = &[
    "cloud computing",
    "machine learning",
    "devops",
    "data analysis",
    "cybersecurity",
];

const SEO_DENSITY_CAP: f64 = 40.0;
const INDUSTRY_POINTS: f64 = 10.0;
const INDUSTRY_POINTS_CAP: f64 = 30.0;
const MODERN_FORMAT_POINTS: f64 = 30.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationAnalysis {
    pub score: f64,
    /// Matched SEO terms per 100 words.
    pub seo_density: f64,
    pub industry_keywords: Vec<String>,
    pub trending_skills: Vec<String>,
    pub modern_formatting: bool,
}

pub struct OptimizationAnalyzer;

impl OptimizationAnalyzer {
    pub fn analyze(view: &ResumeView<'_>, patterns: &PatternSet) -> OptimizationAnalysis {
        let seo_matches = SEO_TERMS
            .iter()
            .filter(|term| view.contains(term))
            .count();
        let seo_density = if view.word_count == 0 {
            0.0
        } else {
            seo_matches as f64 / view.word_count as f64 * 100.0
        };

        let industry_keywords: Vec<String> = INDUSTRY_PHRASES
            .iter()
            .filter(|phrase| view.contains(phrase))
            .map(|phrase| phrase.to_string())
            .collect();

        let modern_formatting = patterns.is_ats_charset(view.raw);

        let score = (seo_density * 10.0).min(SEO_DENSITY_CAP)
            + (industry_keywords.len() as f64 * INDUSTRY_POINTS).min(INDUSTRY_POINTS_CAP)
            + if modern_formatting {
                MODERN_FORMAT_POINTS
            } else {
                0.0
            };

        OptimizationAnalysis {
            score,
            seo_density,
            industry_keywords,
            trending_skills: TRENDING_SKILLS.iter().map(|s| s.to_string()).collect(),
            modern_formatting,
        }
    }
}
