//! Real-world outcome proxies derived from the overall score

use serde::{Deserialize, Serialize};

const INTERVIEW_RATE_CAP: f64 = 95.0;
const INTERVIEW_RATE_BASE: f64 = 20.0;
const SCAN_TIME_FLOOR_SECONDS: f64 = 3.0;
const SCAN_TIME_BASE_SECONDS: f64 = 15.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealWorldPerformance {
    /// Estimated share of applications leading to an interview, percent.
    pub estimated_interview_rate: f64,
    pub ats_pass_rate: f64,
    pub recruiter_scan_time_seconds: f64,
    pub keyword_match_percentage: f64,
}

pub struct PerformanceEstimator;

impl PerformanceEstimator {
    /// Derived proxies only; none of these values come from external data.
    pub fn estimate(overall_score: f64, profession_match: f64) -> RealWorldPerformance {
        RealWorldPerformance {
            estimated_interview_rate: (overall_score * 0.8 + INTERVIEW_RATE_BASE)
                .min(INTERVIEW_RATE_CAP),
            ats_pass_rate: overall_score,
            recruiter_scan_time_seconds: (SCAN_TIME_BASE_SECONDS - overall_score / 10.0)
                .max(SCAN_TIME_FLOOR_SECONDS),
            keyword_match_percentage: profession_match * 100.0,
        }
    }
}
