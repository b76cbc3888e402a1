//! Section headers, bullet usage, ordering and consistency

use crate::analysis::text::{PatternSet, ResumeView};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const HEADER_REPORT_CAP: usize = 8;
const HEADER_POINTS: f64 = 8.0;
const HEADER_POINTS_CAP: f64 = 40.0;
const BULLET_POINTS_EACH: f64 = 1.5;
const BULLET_COUNT_CAP: usize = 20;
const BULLET_POINTS_CAP: f64 = 30.0;
const FLOW_POINTS: f64 = 20.0;
const FLOW_PENALIZED_POINTS: f64 = 10.0;
const CONSISTENCY_POINTS: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub score: f64,
    pub section_headers: Vec<String>,
    pub bullet_points: usize,
    /// False when education is listed before experience.
    pub logical_flow: bool,
    pub consistent_formatting: bool,
}

pub struct StructureAnalyzer;

impl StructureAnalyzer {
    pub fn analyze(view: &ResumeView<'_>, patterns: &PatternSet) -> StructureAnalysis {
        let mut headers = Vec::new();
        let mut distinct_headers = HashSet::new();
        for line in view.lines() {
            if patterns.is_all_caps_header(line) {
                let header = line.trim().to_string();
                distinct_headers.insert(header.clone());
                headers.push(header);
            }
        }
        let header_points = (headers.len() as f64 * HEADER_POINTS).min(HEADER_POINTS_CAP);

        let bullet_points = view.bullet_lines().count();
        let bullet_score =
            (bullet_points.min(BULLET_COUNT_CAP) as f64 * BULLET_POINTS_EACH).min(BULLET_POINTS_CAP);

        let logical_flow = match (view.lower.find("experience"), view.lower.find("education")) {
            (Some(exp), Some(edu)) => edu >= exp,
            _ => true,
        };
        let flow_points = if logical_flow {
            FLOW_POINTS
        } else {
            FLOW_PENALIZED_POINTS
        };

        let consistent_formatting = distinct_headers.len() > 1;
        let consistency_points = if consistent_formatting {
            CONSISTENCY_POINTS
        } else {
            0.0
        };

        headers.truncate(HEADER_REPORT_CAP);

        StructureAnalysis {
            score: header_points + bullet_score + flow_points + consistency_points,
            section_headers: headers,
            bullet_points,
            logical_flow,
            consistent_formatting,
        }
    }
}
