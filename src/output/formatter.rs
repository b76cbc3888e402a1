//! Output formatters: console, JSON and Markdown renderings of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};
use std::fmt::Write as _;

/// Trait for rendering analysis reports into a printable string.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

pub struct ConsoleFormatter {
    pub use_colors: bool,
    pub detailed: bool,
}

pub struct JsonFormatter {
    pub pretty: bool,
}

pub struct MarkdownFormatter;

/// Picks the right formatter for a requested output format.
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn render(
        report: &AnalysisReport,
        format: OutputFormat,
        use_colors: bool,
        detailed: bool,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => ConsoleFormatter {
                use_colors,
                detailed,
            }
            .format_report(report),
            OutputFormat::Json => JsonFormatter { pretty: true }.format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }
}

fn score_color(score: f64) -> Color {
    if score >= 80.0 {
        Color::Green
    } else if score >= 60.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        let paint = |text: String, color: Color| -> String {
            if self.use_colors {
                text.color(color).to_string()
            } else {
                text
            }
        };

        let _ = writeln!(out, "ATS Compliance Report");
        let _ = writeln!(out, "=====================");
        let _ = writeln!(
            out,
            "Overall score: {} ({})",
            paint(
                format!("{:.1}", report.overall_score),
                score_color(report.overall_score)
            ),
            report.ats_compatibility.label()
        );
        let _ = writeln!(
            out,
            "Employability: {} - {}",
            report.employability.rating, report.employability.summary
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "Category scores");
        for category in crate::analysis::scoring::Category::ALL {
            let score = report.category_scores.get(category);
            let _ = writeln!(
                out,
                "  {:<16} {}",
                format!("{:?}", category),
                paint(format!("{:>5.1}", score), score_color(score))
            );
        }
        let _ = writeln!(out);

        let recs = &report.recommendations;
        if !recs.critical.is_empty() {
            let _ = writeln!(out, "{}", paint("Critical".to_string(), Color::Red));
            for rec in &recs.critical {
                let _ = writeln!(out, "  - {}", rec);
            }
        }
        if !recs.important.is_empty() {
            let _ = writeln!(out, "{}", paint("Important".to_string(), Color::Yellow));
            for rec in &recs.important {
                let _ = writeln!(out, "  - {}", rec);
            }
        }
        let _ = writeln!(out, "Optional");
        for rec in &recs.optional {
            let _ = writeln!(out, "  - {}", rec);
        }
        let _ = writeln!(out);

        let perf = &report.real_world_performance;
        let _ = writeln!(out, "Projected performance");
        let _ = writeln!(
            out,
            "  Estimated interview rate: {:.1}%",
            perf.estimated_interview_rate
        );
        let _ = writeln!(out, "  ATS pass rate:            {:.1}%", perf.ats_pass_rate);
        let _ = writeln!(
            out,
            "  Recruiter scan time:      {:.1}s",
            perf.recruiter_scan_time_seconds
        );
        let _ = writeln!(
            out,
            "  Keyword match:            {:.1}%",
            perf.keyword_match_percentage
        );

        if self.detailed {
            let keywords = &report.detailed_analysis.keywords;
            let _ = writeln!(out);
            let _ = writeln!(out, "Keyword detail ({})", report.metadata.profession);
            let _ = writeln!(out, "  Found:   {}", keywords.found_keywords.join(", "));
            let _ = writeln!(out, "  Missing: {}", keywords.missing_keywords.join(", "));
            for near in &keywords.near_matches {
                let _ = writeln!(
                    out,
                    "  Possible typo: '{}' looks close to '{}'",
                    near.candidate, near.keyword
                );
            }

            let insights = &report.market_insights;
            let _ = writeln!(out);
            let _ = writeln!(out, "Market insights ({})", insights.profession);
            let _ = writeln!(out, "  Demand: {}", insights.demand_level);
            let _ = writeln!(out, "  Competition: {}", insights.competition);
            let _ = writeln!(out, "  Trending: {}", insights.trending_keywords.join(", "));
            let _ = writeln!(out, "  {}", insights.advice);
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(rendered)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "# ATS Compliance Report");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "**Overall score:** {:.1} ({})",
            report.overall_score,
            report.ats_compatibility.label()
        );
        let _ = writeln!(
            out,
            "**Employability:** {} - {}",
            report.employability.rating, report.employability.summary
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "## Category scores");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Category | Score |");
        let _ = writeln!(out, "|----------|-------|");
        for category in crate::analysis::scoring::Category::ALL {
            let _ = writeln!(
                out,
                "| {:?} | {:.1} |",
                category,
                report.category_scores.get(category)
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "## Recommendations");
        let _ = writeln!(out);
        for (title, items) in [
            ("Critical", &report.recommendations.critical),
            ("Important", &report.recommendations.important),
            ("Optional", &report.recommendations.optional),
        ] {
            if items.is_empty() {
                continue;
            }
            let _ = writeln!(out, "### {}", title);
            for item in items {
                let _ = writeln!(out, "- {}", item);
            }
            let _ = writeln!(out);
        }

        let perf = &report.real_world_performance;
        let _ = writeln!(out, "## Projected performance");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "- Estimated interview rate: {:.1}%",
            perf.estimated_interview_rate
        );
        let _ = writeln!(out, "- ATS pass rate: {:.1}%", perf.ats_pass_rate);
        let _ = writeln!(
            out,
            "- Recruiter scan time: {:.1}s",
            perf.recruiter_scan_time_seconds
        );
        let _ = writeln!(
            out,
            "- Keyword match: {:.1}%",
            perf.keyword_match_percentage
        );

        Ok(out)
    }
}
