//! Integration tests for the resume scorer

use resume_scorer::analysis::recommendations::RecommendationEngine;
use resume_scorer::analysis::scoring::{AtsCompatibility, Category, CategoryScores, WEIGHTS};
use resume_scorer::analysis::AnalysisEngine;
use resume_scorer::professions::Profession;

fn fixture() -> String {
    std::fs::read_to_string("tests/fixtures/sample_resume.txt").unwrap()
}

#[test]
fn test_fixture_scores_in_range() {
    let engine = AnalysisEngine::new().unwrap();
    let report = engine.analyze(&fixture(), Some("software_engineer"), None);

    assert!(report.overall_score >= 0.0 && report.overall_score <= 100.0);
    for category in Category::ALL {
        let score = report.category_scores.get(category);
        assert!((0.0..=100.0).contains(&score), "{:?} = {}", category, score);
    }
}

#[test]
fn test_strong_fixture_scores_well() {
    let engine = AnalysisEngine::new().unwrap();
    let report = engine.analyze(&fixture(), Some("software_engineer"), None);

    // The fixture hits most keyword, structure and completeness signals.
    assert!(report.overall_score >= 70.0, "got {}", report.overall_score);
    assert!(report.detailed_analysis.keywords.profession_match > 0.5);
    assert!(report.detailed_analysis.formatting.contact_info_complete);
    assert!(report.detailed_analysis.structure.logical_flow);
}

#[test]
fn test_analysis_is_pure_and_deterministic() {
    let engine = AnalysisEngine::new().unwrap();
    let text = fixture();

    let first = engine.analyze(&text, Some("software_engineer"), None);
    let second = engine.analyze(&text, Some("software_engineer"), None);

    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(
        serde_json::to_value(&first.category_scores).unwrap(),
        serde_json::to_value(&second.category_scores).unwrap()
    );
    assert_eq!(
        first.recommendations.important,
        second.recommendations.important
    );
}

#[test]
fn test_weights_sum_to_exactly_one() {
    let total: f64 = WEIGHTS.iter().map(|(_, w)| w).sum();
    assert_eq!(total, 1.0);
}

#[test]
fn test_overall_matches_weighted_rounding() {
    let engine = AnalysisEngine::new().unwrap();
    let report = engine.analyze(&fixture(), Some("software_engineer"), None);

    let weighted: f64 = WEIGHTS
        .iter()
        .map(|(category, weight)| report.category_scores.get(*category) * weight)
        .sum();
    let expected = (weighted * 10.0).round() / 10.0;

    assert_eq!(report.overall_score, expected);
}

#[test]
fn test_adding_keywords_never_lowers_keyword_score() {
    let engine = AnalysisEngine::new().unwrap();
    let base = "Engineer with professional background in shipping reliable software.";

    let mut text = base.to_string();
    let mut last_score = engine
        .analyze(&text, Some("software_engineer"), None)
        .detailed_analysis
        .keywords
        .score;

    for keyword in ["python", "docker", "aws", "kubernetes", "sql"] {
        text.push(' ');
        text.push_str(keyword);
        let score = engine
            .analyze(&text, Some("software_engineer"), None)
            .detailed_analysis
            .keywords
            .score;
        assert!(score >= last_score, "{} lowered the score", keyword);
        last_score = score;
    }
}

#[test]
fn test_tier_boundaries_are_exact() {
    assert_eq!(
        AtsCompatibility::from_score(85.0),
        AtsCompatibility::HighlyCompatible
    );
    assert_eq!(
        AtsCompatibility::from_score(84.9),
        AtsCompatibility::Compatible
    );
}

#[test]
fn test_report_tier_consistent_with_score() {
    let engine = AnalysisEngine::new().unwrap();
    for text in ["", "experience education skills", fixture().as_str()] {
        let report = engine.analyze(text, None, None);
        assert_eq!(
            report.ats_compatibility,
            AtsCompatibility::from_score(report.overall_score)
        );
    }
}

#[test]
fn test_empty_string_is_total() {
    let engine = AnalysisEngine::new().unwrap();
    let report = engine.analyze("", None, None);

    let keywords = &report.detailed_analysis.keywords;
    assert_eq!(report.detailed_analysis.formatting.word_count, 0);
    assert_eq!(keywords.keyword_density, 0.0);
    assert_eq!(keywords.profession_match, 0.0);
    assert!(report.overall_score < 20.0);
}

#[test]
fn test_completeness_worked_example() {
    // All 7 experience terms, all 8 education terms, and the three required
    // section names with experience ahead of education.
    let text = "experience education skills \
                worked job position role responsibilities achieved managed \
                degree university college bachelor master phd graduated gpa";
    let engine = AnalysisEngine::new().unwrap();
    let report = engine.analyze(text, Some("software_engineer"), None);

    assert_eq!(report.category_scores.completeness, 100.0);
    assert!(report.detailed_analysis.structure.logical_flow);
}

#[test]
fn test_unknown_profession_uses_default_profile() {
    let engine = AnalysisEngine::new().unwrap();
    let text = fixture();

    let unknown = engine.analyze(&text, Some("unknown_role"), None);
    let default = engine.analyze(&text, Some("software_engineer"), None);

    assert_eq!(unknown.overall_score, default.overall_score);
    assert_eq!(unknown.metadata.profession, Profession::SoftwareEngineer);
}

#[test]
fn test_low_formatting_routes_to_critical_only() {
    let scores = CategoryScores {
        keywords: 90.0,
        content_quality: 90.0,
        formatting: 45.0,
        structure: 90.0,
        completeness: 90.0,
        optimization: 90.0,
    };
    let recs = RecommendationEngine::generate(&scores);

    let formatting_critical = recs
        .critical
        .iter()
        .find(|msg| msg.contains("formatting"))
        .expect("formatting message missing from critical");
    assert!(!recs.important.contains(formatting_critical));
    assert!(!recs.optional.contains(formatting_critical));
}

#[test]
fn test_market_insights_follow_profession() {
    let engine = AnalysisEngine::new().unwrap();
    let report = engine.analyze(&fixture(), Some("data_scientist"), None);

    assert_eq!(
        report.market_insights.profession,
        Profession::DataScientist
    );
}

#[test]
fn test_one_shot_analyze_matches_engine() {
    let text = fixture();
    let one_shot = resume_scorer::analyze(&text, Some("software_engineer"), None).unwrap();
    let engine = AnalysisEngine::new().unwrap();
    let via_engine = engine.analyze(&text, Some("software_engineer"), None);

    assert_eq!(one_shot.overall_score, via_engine.overall_score);
}

#[test]
fn test_report_serializes_to_json() {
    let engine = AnalysisEngine::new().unwrap();
    let report = engine.analyze(&fixture(), Some("software_engineer"), Some("Platform Engineer"));

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("overall_score"));
    assert!(json.contains("real_world_performance"));
    assert!(json.contains("Platform Engineer"));
}
