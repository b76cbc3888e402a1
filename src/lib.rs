//! Resume scorer library
//!
//! Deterministic ATS compliance scoring: raw resume text in, a full
//! `AnalysisReport` out, with no I/O and no shared mutable state.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod professions;

pub use analysis::AnalysisEngine;
pub use config::Config;
pub use error::{Result, ScorerError};
pub use output::report::AnalysisReport;
pub use professions::Profession;

/// One-shot convenience wrapper around [`AnalysisEngine`]. Prefer holding an
/// engine when analyzing more than one resume; construction compiles the
/// pattern tables.
pub fn analyze(
    resume_text: &str,
    profession_id: Option<&str>,
    job_title: Option<&str>,
) -> Result<AnalysisReport> {
    let engine = AnalysisEngine::new()?;
    Ok(engine.analyze(resume_text, profession_id, job_title))
}
