//! Action-verb usage, quantification, tone and achievement focus

use crate::analysis::text::{PatternSet, ResumeView};
use serde::{Deserialize, Serialize};

const ACTION_VERBS: &[&str] = &[
    "achieved", "managed", "led", "developed", "created", "implemented",
    "designed", "improved", "increased", "decreased", "reduced", "delivered",
    "launched", "built", "established", "coordinated", "executed",
    "optimized", "streamlined", "spearheaded", "initiated", "transformed",
    "negotiated", "mentored", "directed",
];

const INFORMAL_MARKERS: &[&str] = &[
    "awesome", "cool", "stuff", "things", "gonna", "wanna", "kinda", "sorta",
];

const ACHIEVEMENT_WORDS: &[&str] = &[
    "achieved", "exceeded", "awarded", "recognized", "improved", "increased",
    "delivered", "won", "earned",
];

const VERB_POINTS: f64 = 10.0;
const QUANTIFIABLE_POINTS: f64 = 20.0;
const ACHIEVEMENT_POINTS_CAP: f64 = 30.0;
const IMPACT_POINTS_CAP: f64 = 20.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentQualityAnalysis {
    pub score: f64,
    pub found_action_verbs: Vec<String>,
    pub has_quantifiable_results: bool,
    pub professional_tone: String,
    pub achievement_focus: String,
    /// Bulleted lines carrying a number, percentage or dollar amount.
    pub impact_statements: usize,
}

pub struct ContentQualityAnalyzer;

impl ContentQualityAnalyzer {
    pub fn analyze(view: &ResumeView<'_>, patterns: &PatternSet) -> ContentQualityAnalysis {
        let found_verbs: Vec<String> = ACTION_VERBS
            .iter()
            .filter(|verb| view.contains(verb))
            .map(|verb| verb.to_string())
            .collect();
        let verb_score = (found_verbs.len() as f64 * VERB_POINTS).min(100.0);

        let has_quantifiable_results = patterns.has_quantifiable_results(view.raw);

        let informal_count = INFORMAL_MARKERS
            .iter()
            .filter(|marker| view.contains(marker))
            .count();
        let (professional_tone, tone_points) = match informal_count {
            0 => ("Professional", 20.0),
            1..=2 => ("Mostly Professional", 10.0),
            _ => ("Needs Improvement", 0.0),
        };

        let achievement_count = ACHIEVEMENT_WORDS
            .iter()
            .filter(|word| view.contains(word))
            .count();
        let achievement_focus = if achievement_count >= 5 {
            "Achievement-Focused"
        } else if achievement_count >= 2 {
            "Some Achievements"
        } else {
            "Needs More Achievements"
        };
        let achievement_points =
            (achievement_count as f64 * 5.0).min(ACHIEVEMENT_POINTS_CAP);

        let impact_statements = view
            .bullet_lines()
            .filter(|line| {
                line.chars().any(|c| c.is_ascii_digit()) || line.contains('%') || line.contains('$')
            })
            .count();
        let impact_points = (impact_statements as f64 * 5.0).min(IMPACT_POINTS_CAP);

        let quantifiable_points = if has_quantifiable_results {
            QUANTIFIABLE_POINTS
        } else {
            0.0
        };

        let score = (verb_score
            + tone_points
            + achievement_points
            + impact_points
            + quantifiable_points)
            .min(100.0);

        ContentQualityAnalysis {
            score,
            found_action_verbs: found_verbs,
            has_quantifiable_results,
            professional_tone: professional_tone.to_string(),
            achievement_focus: achievement_focus.to_string(),
            impact_statements,
        }
    }
}
