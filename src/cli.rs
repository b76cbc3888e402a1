//! CLI interface for the resume scorer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-scorer")]
#[command(about = "Deterministic ATS compliance scoring for resumes")]
#[command(
    long_about = "Score a resume for ATS compatibility: keyword coverage, content quality, formatting, structure, completeness and optimization, with prioritized recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume file and print the compliance report
    Analyze {
        /// Path to the resume as plain text or markdown
        #[arg(short, long)]
        resume: PathBuf,

        /// Profession profile id (see `professions`); defaults to software_engineer
        #[arg(short, long)]
        profession: Option<String>,

        /// Target job title, echoed into the report metadata
        #[arg(short, long)]
        job_title: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file instead of stdout
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include per-category details in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the supported profession profiles and their keyword lists
    Professions,
}

/// Parse a user-supplied output format name.
pub fn parse_output_format(name: &str) -> Result<OutputFormat, String> {
    match name.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => Err(format!(
            "Unsupported output format '{}'. Use console, json or markdown.",
            other
        )),
    }
}
