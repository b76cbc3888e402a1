//! The analysis report returned to callers

use crate::analysis::completeness::CompletenessAnalysis;
use crate::analysis::content_quality::ContentQualityAnalysis;
use crate::analysis::formatting::FormattingAnalysis;
use crate::analysis::keywords::KeywordAnalysis;
use crate::analysis::optimization::OptimizationAnalysis;
use crate::analysis::performance::RealWorldPerformance;
use crate::analysis::recommendations::Recommendations;
use crate::analysis::scoring::{AtsCompatibility, CategoryScores, Employability};
use crate::analysis::structure::StructureAnalysis;
use crate::professions::{MarketInsights, Profession};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full result of one analysis pass. Built fresh per call and never mutated
/// afterwards; callers serialize it however they need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: f64,
    pub ats_compatibility: AtsCompatibility,
    pub employability: Employability,
    pub category_scores: CategoryScores,
    pub detailed_analysis: DetailedAnalysis,
    pub recommendations: Recommendations,
    pub market_insights: MarketInsights,
    pub real_world_performance: RealWorldPerformance,
    pub metadata: ReportMetadata,
}

/// Per-category detail blocks, one per analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub keywords: KeywordAnalysis,
    pub content_quality: ContentQualityAnalysis,
    pub formatting: FormattingAnalysis,
    pub structure: StructureAnalysis,
    pub completeness: CompletenessAnalysis,
    pub optimization: OptimizationAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    pub profession: Profession,
    pub job_title: Option<String>,
}

impl ReportMetadata {
    pub fn new(profession: Profession, job_title: Option<&str>) -> Self {
        Self {
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            profession,
            job_title: job_title.map(String::from),
        }
    }
}
