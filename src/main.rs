//! Resume scorer: deterministic ATS compliance scoring for resumes

use anyhow::Context as _;
use clap::Parser;
use log::{error, info};
use resume_scorer::analysis::AnalysisEngine;
use resume_scorer::cli::{parse_output_format, Cli, Commands};
use resume_scorer::config::Config;
use resume_scorer::error::{Result, ScorerError};
use resume_scorer::output::formatter::ReportRenderer;
use resume_scorer::professions::Profession;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            profession,
            job_title,
            output,
            save,
            detailed,
        } => {
            let format = match output {
                Some(name) => parse_output_format(&name).map_err(ScorerError::InvalidInput)?,
                None => config.output.format,
            };

            info!("Reading resume from {}", resume.display());
            let resume_text = std::fs::read_to_string(&resume)
                .with_context(|| format!("failed to read resume at {}", resume.display()))?;

            let engine = AnalysisEngine::new()?;
            let report = engine.analyze(
                &resume_text,
                profession.as_deref(),
                job_title.as_deref(),
            );
            info!(
                "Scored {:.1} ({})",
                report.overall_score,
                report.ats_compatibility.label()
            );

            // Color only when printing to a terminal-bound console report.
            let use_colors = config.output.color_output && save.is_none();
            let rendered = ReportRenderer::render(
                &report,
                format,
                use_colors,
                detailed || config.output.detailed,
            )?;

            match save {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    info!("Report saved to {}", path.display());
                }
                None => print!("{}", rendered),
            }
            Ok(())
        }
        Commands::Professions => {
            for profession in Profession::ALL {
                println!("{} ({})", profession.display_name(), profession.id());
                println!("  keywords: {}", profession.keywords().join(", "));
            }
            Ok(())
        }
    }
}
