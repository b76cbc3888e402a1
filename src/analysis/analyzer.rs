//! Analysis engine coordinating the six category analyzers

use crate::analysis::completeness::CompletenessAnalyzer;
use crate::analysis::content_quality::ContentQualityAnalyzer;
use crate::analysis::formatting::FormattingAnalyzer;
use crate::analysis::keywords::KeywordAnalyzer;
use crate::analysis::optimization::OptimizationAnalyzer;
use crate::analysis::performance::PerformanceEstimator;
use crate::analysis::recommendations::RecommendationEngine;
use crate::analysis::scoring::{AtsCompatibility, CategoryScores, Employability};
use crate::analysis::structure::StructureAnalyzer;
use crate::analysis::text::{PatternSet, ResumeView};
use crate::error::Result;
use crate::output::report::{AnalysisReport, DetailedAnalysis, ReportMetadata};
use crate::professions::Profession;
use std::collections::HashMap;

/// Deterministic scoring engine. Construction compiles the pattern tables
/// and keyword automatons; after that the engine is read-only and safe to
/// share across threads.
pub struct AnalysisEngine {
    keyword_analyzer: KeywordAnalyzer,
    patterns: PatternSet,
}

impl AnalysisEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            keyword_analyzer: KeywordAnalyzer::new()?,
            patterns: PatternSet::compile()?,
        })
    }

    /// Run the full pipeline over one resume. Total for any string input,
    /// including the empty string.
    pub fn analyze(
        &self,
        resume_text: &str,
        profession_id: Option<&str>,
        job_title: Option<&str>,
    ) -> AnalysisReport {
        let profession = Profession::from_id(profession_id);
        log::debug!(
            "analyzing {} chars as {} (job title: {:?})",
            resume_text.len(),
            profession.id(),
            job_title
        );

        let view = ResumeView::new(resume_text);

        // The six analyzers are independent; order is irrelevant.
        let keywords = self.keyword_analyzer.analyze(&view, profession);
        let content_quality = ContentQualityAnalyzer::analyze(&view, &self.patterns);
        let formatting = FormattingAnalyzer::analyze(&view, &self.patterns);
        let structure = StructureAnalyzer::analyze(&view, &self.patterns);
        let completeness = CompletenessAnalyzer::analyze(&view);
        let optimization = OptimizationAnalyzer::analyze(&view, &self.patterns);

        let category_scores = CategoryScores {
            keywords: keywords.score,
            content_quality: content_quality.score,
            formatting: formatting.score,
            structure: structure.score,
            completeness: completeness.score,
            optimization: optimization.score,
        };
        let overall_score = category_scores.overall();

        let recommendations = RecommendationEngine::generate(&category_scores);
        let real_world_performance =
            PerformanceEstimator::estimate(overall_score, keywords.profession_match);

        AnalysisReport {
            overall_score,
            ats_compatibility: AtsCompatibility::from_score(overall_score),
            employability: Employability::from_score(overall_score),
            category_scores,
            detailed_analysis: DetailedAnalysis {
                keywords,
                content_quality,
                formatting,
                structure,
                completeness,
                optimization,
            },
            recommendations,
            market_insights: profession.market_insights(),
            real_world_performance,
            metadata: ReportMetadata::new(profession, job_title),
        }
    }

    /// Memoized variant. The cache is caller-owned; the engine itself holds
    /// no mutable state across calls.
    pub fn analyze_with_cache(
        &self,
        cache: &mut HashMap<String, AnalysisReport>,
        key: &str,
        resume_text: &str,
        profession_id: Option<&str>,
        job_title: Option<&str>,
    ) -> AnalysisReport {
        if let Some(report) = cache.get(key) {
            return report.clone();
        }
        let report = self.analyze(resume_text, profession_id, job_title);
        cache.insert(key.to_string(), report.clone());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
JANE DOE
jane.doe@example.com (555) 123-4567

SUMMARY
Software engineer with cloud experience.

EXPERIENCE
- Led a team that delivered python services on aws, improved latency 40%
- Managed ci/cd pipelines with docker and kubernetes

EDUCATION
Bachelor degree, State University, graduated 2018

SKILLS
python, sql, react, git, agile
";

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new().unwrap()
    }

    #[test]
    fn test_report_scores_in_range() {
        let report = engine().analyze(SAMPLE, Some("software_engineer"), None);

        assert!(report.overall_score >= 0.0 && report.overall_score <= 100.0);
        for category in crate::analysis::scoring::Category::ALL {
            let score = report.category_scores.get(category);
            assert!((0.0..=100.0).contains(&score), "{:?} = {}", category, score);
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let e = engine();
        let first = e.analyze(SAMPLE, Some("software_engineer"), None);
        let second = e.analyze(SAMPLE, Some("software_engineer"), None);

        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(
            first.recommendations.critical,
            second.recommendations.critical
        );
    }

    #[test]
    fn test_empty_input_is_total() {
        let report = engine().analyze("", None, None);

        assert!(report.overall_score >= 0.0);
        assert!(report.overall_score < 20.0);
        assert_eq!(report.detailed_analysis.keywords.profession_match, 0.0);
        assert_eq!(report.detailed_analysis.formatting.word_count, 0);
    }

    #[test]
    fn test_unknown_profession_uses_default() {
        let e = engine();
        let unknown = e.analyze(SAMPLE, Some("unknown_role"), None);
        let default = e.analyze(SAMPLE, Some("software_engineer"), None);

        assert_eq!(unknown.overall_score, default.overall_score);
        assert_eq!(unknown.metadata.profession, Profession::SoftwareEngineer);
    }

    #[test]
    fn test_performance_derived_from_overall() {
        let report = engine().analyze(SAMPLE, Some("software_engineer"), None);

        assert_eq!(
            report.real_world_performance.ats_pass_rate,
            report.overall_score
        );
        assert_eq!(
            report.real_world_performance.keyword_match_percentage,
            report.detailed_analysis.keywords.profession_match * 100.0
        );
    }

    #[test]
    fn test_cache_returns_same_report() {
        let e = engine();
        let mut cache = HashMap::new();
        let first = e.analyze_with_cache(&mut cache, "k1", SAMPLE, None, None);
        let second = e.analyze_with_cache(&mut cache, "k1", SAMPLE, None, None);

        assert_eq!(cache.len(), 1);
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(
            first.metadata.generated_at,
            second.metadata.generated_at
        );
    }

    #[test]
    fn test_job_title_echoed_in_metadata() {
        let report = engine().analyze(SAMPLE, None, Some("Backend Engineer"));
        assert_eq!(
            report.metadata.job_title.as_deref(),
            Some("Backend Engineer")
        );
    }
}
