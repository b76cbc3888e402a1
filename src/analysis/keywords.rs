//! Profession-keyword coverage and density analysis

use crate::analysis::text::ResumeView;
use crate::error::{Result, ScorerError};
use crate::professions::Profession;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use strsim::jaro_winkler;

const FOUND_KEYWORD_CAP: usize = 15;
const MISSING_KEYWORD_CAP: usize = 10;
const NEAR_MATCH_CAP: usize = 5;
const NEAR_MATCH_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub score: f64,
    /// Fraction of the profession keyword list found in the text, 0.0-1.0.
    pub profession_match: f64,
    /// Matched keywords per 100 words.
    pub keyword_density: f64,
    pub industry_relevance: f64,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_count: usize,
    pub total_keywords: usize,
    /// Resume tokens that nearly match a missing keyword. Informational
    /// only; never contributes to the score.
    pub near_matches: Vec<NearMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearMatch {
    pub keyword: String,
    pub candidate: String,
    pub similarity: f64,
}

/// Matches profession keyword lists against the resume with a
/// case-insensitive multi-pattern automaton, one per profession, built once.
pub struct KeywordAnalyzer {
    matchers: HashMap<Profession, AhoCorasick>,
}

impl KeywordAnalyzer {
    pub fn new() -> Result<Self> {
        let mut matchers = HashMap::new();
        for profession in Profession::ALL {
            let matcher = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(profession.keywords())
                .map_err(|e| {
                    ScorerError::Pattern(format!(
                        "failed to build keyword matcher for {}: {}",
                        profession, e
                    ))
                })?;
            matchers.insert(profession, matcher);
        }
        Ok(Self { matchers })
    }

    pub fn analyze(&self, view: &ResumeView<'_>, profession: Profession) -> KeywordAnalysis {
        let keywords = profession.keywords();
        let matcher = &self.matchers[&profession];

        let mut matched: HashSet<usize> = HashSet::new();
        for hit in matcher.find_iter(view.raw) {
            matched.insert(hit.pattern().as_usize());
        }

        let found: Vec<String> = keywords
            .iter()
            .enumerate()
            .filter(|(idx, _)| matched.contains(idx))
            .map(|(_, kw)| kw.to_string())
            .collect();
        let missing: Vec<String> = keywords
            .iter()
            .enumerate()
            .filter(|(idx, _)| !matched.contains(idx))
            .map(|(_, kw)| kw.to_string())
            .collect();

        let matched_count = found.len();
        let total_keywords = keywords.len();

        let profession_match = if total_keywords == 0 {
            0.0
        } else {
            matched_count as f64 / total_keywords as f64
        };
        let keyword_density = if view.word_count == 0 {
            0.0
        } else {
            matched_count as f64 / view.word_count as f64 * 100.0
        };

        let industry_relevance =
            (profession_match * 100.0 + keyword_density * 10.0).min(100.0);
        let score = (profession_match * 60.0
            + keyword_density * 2.0
            + matched_count as f64 * 2.0)
            .min(100.0);

        let near_matches = Self::near_matches(view, &missing);

        KeywordAnalysis {
            score,
            profession_match,
            keyword_density,
            industry_relevance,
            found_keywords: found.into_iter().take(FOUND_KEYWORD_CAP).collect(),
            missing_keywords: missing.iter().take(MISSING_KEYWORD_CAP).cloned().collect(),
            matched_count,
            total_keywords,
            near_matches,
        }
    }

    /// Suggest resume tokens that are close misspellings of missing
    /// keywords, e.g. "Pythong" for "python".
    fn near_matches(view: &ResumeView<'_>, missing: &[String]) -> Vec<NearMatch> {
        let tokens: HashSet<String> = view
            .lower
            .split_whitespace()
            .map(clean_token)
            .filter(|t| t.len() >= 3)
            .collect();

        let mut matches = Vec::new();
        for keyword in missing.iter().take(NEAR_MATCH_CAP) {
            let mut best: Option<(f64, &str)> = None;
            for token in &tokens {
                if token == keyword {
                    continue;
                }
                let similarity = jaro_winkler(token, keyword);
                if similarity >= NEAR_MATCH_THRESHOLD
                    && best.map_or(true, |(s, _)| similarity > s)
                {
                    best = Some((similarity, token));
                }
            }
            if let Some((similarity, token)) = best {
                matches.push(NearMatch {
                    keyword: keyword.clone(),
                    candidate: token.to_string(),
                    similarity,
                });
            }
        }
        matches
    }
}

fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '+' || *c == '#' || *c == '.')
        .collect::<String>()
        .trim_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> KeywordAnalyzer {
        KeywordAnalyzer::new().unwrap()
    }

    #[test]
    fn test_keywords_found_case_insensitive() {
        let view = ResumeView::new("Experienced in Python, JavaScript and AWS deployments.");
        let analysis = analyzer().analyze(&view, Profession::SoftwareEngineer);

        assert!(analysis.found_keywords.contains(&"python".to_string()));
        assert!(analysis.found_keywords.contains(&"javascript".to_string()));
        assert!(analysis.found_keywords.contains(&"aws".to_string()));
        assert!(analysis.matched_count >= 3);
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let view = ResumeView::new("");
        let analysis = analyzer().analyze(&view, Profession::SoftwareEngineer);

        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.profession_match, 0.0);
        assert_eq!(analysis.keyword_density, 0.0);
        assert_eq!(analysis.matched_count, 0);
        assert_eq!(analysis.missing_keywords.len(), 10);
    }

    #[test]
    fn test_more_keywords_never_lower_score() {
        let engine = analyzer();
        let base = "Software developer with professional experience building systems.";
        let view_base = ResumeView::new(base);
        let score_base = engine.analyze(&view_base, Profession::SoftwareEngineer).score;

        let enriched = format!("{} Skilled in python, docker, aws, sql.", base);
        let view_enriched = ResumeView::new(&enriched);
        let score_enriched = engine
            .analyze(&view_enriched, Profession::SoftwareEngineer)
            .score;

        assert!(score_enriched >= score_base);
    }

    #[test]
    fn test_output_caps() {
        let all = Profession::SoftwareEngineer.keywords().join(", ");
        let view = ResumeView::new(&all);
        let analysis = analyzer().analyze(&view, Profession::SoftwareEngineer);

        assert!(analysis.found_keywords.len() <= 15);
        assert!(analysis.missing_keywords.len() <= 10);
        assert_eq!(analysis.profession_match, 1.0);
    }

    #[test]
    fn test_score_clamped_to_100() {
        // All keywords in very short text drives density far past the clamp.
        let all = Profession::DataScientist.keywords().join(" ");
        let view = ResumeView::new(&all);
        let analysis = analyzer().analyze(&view, Profession::DataScientist);

        assert_eq!(analysis.score, 100.0);
        assert_eq!(analysis.industry_relevance, 100.0);
    }

    #[test]
    fn test_near_match_suggestion() {
        let view = ResumeView::new("Wrote services in Pythn and shipped weekly.");
        let analysis = analyzer().analyze(&view, Profession::SoftwareEngineer);

        assert!(analysis
            .near_matches
            .iter()
            .any(|m| m.keyword == "python" && m.candidate == "pythn"));
    }
}
