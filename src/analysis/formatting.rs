//! ATS-parseable formatting, section presence, length and readability

use crate::analysis::text::{sentence_count, syllable_estimate, PatternSet, ResumeView};
use serde::{Deserialize, Serialize};

const STANDARD_SECTIONS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "work history",
    "employment",
];

const ATS_FRIENDLY_POINTS: f64 = 30.0;
const SECTION_POINTS: f64 = 7.5;
const SECTION_POINTS_CAP: f64 = 30.0;
const LENGTH_BAND_FULL: f64 = 20.0;
const LENGTH_BAND_PARTIAL: f64 = 10.0;
const DEFAULT_READABILITY: f64 = 50.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingAnalysis {
    pub score: f64,
    /// Text is limited to characters common ATS parsers accept.
    pub ats_friendly: bool,
    pub standard_sections_found: Vec<String>,
    pub word_count: usize,
    /// Flesch-Reading-Ease approximation; informational only.
    pub readability_score: f64,
    pub has_email: bool,
    pub has_phone: bool,
    pub contact_info_complete: bool,
}

pub struct FormattingAnalyzer;

impl FormattingAnalyzer {
    pub fn analyze(view: &ResumeView<'_>, patterns: &PatternSet) -> FormattingAnalysis {
        let ats_friendly = patterns.is_ats_charset(view.raw);

        let standard_sections_found: Vec<String> = STANDARD_SECTIONS
            .iter()
            .filter(|section| view.contains(section))
            .map(|section| section.to_string())
            .collect();
        let section_points =
            (standard_sections_found.len() as f64 * SECTION_POINTS).min(SECTION_POINTS_CAP);

        let word_count = view.word_count;
        let length_points = length_band(word_count);

        let readability_score = readability(view.raw, word_count);

        let has_email = patterns.has_email(view.raw);
        let has_phone = patterns.has_phone(view.raw);
        let contact_info_complete = has_email && has_phone;
        let contact_points = match (has_email, has_phone) {
            (true, true) => 20.0,
            (true, false) | (false, true) => 10.0,
            (false, false) => 0.0,
        };

        let score = (if ats_friendly { ATS_FRIENDLY_POINTS } else { 0.0 })
            + section_points
            + length_points
            + contact_points;

        FormattingAnalysis {
            score,
            ats_friendly,
            standard_sections_found,
            word_count,
            readability_score,
            has_email,
            has_phone,
            contact_info_complete,
        }
    }
}

fn length_band(word_count: usize) -> f64 {
    if (300..=800).contains(&word_count) {
        LENGTH_BAND_FULL
    } else if (200..=1000).contains(&word_count) {
        LENGTH_BAND_PARTIAL
    } else {
        0.0
    }
}

/// Flesch Reading Ease with a vowel-cluster syllable proxy. Defaults to a
/// neutral midpoint when there is nothing to measure.
fn readability(text: &str, word_count: usize) -> f64 {
    let sentences = sentence_count(text);
    if sentences == 0 || word_count == 0 {
        return DEFAULT_READABILITY;
    }
    let words = word_count as f64;
    let syllables = syllable_estimate(text) as f64;
    let score = 206.835 - 1.015 * (words / sentences as f64) - 84.6 * (syllables / words);
    score.clamp(0.0, 100.0)
}
