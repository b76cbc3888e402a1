//! Profession profiles: static keyword lists and market insights
//!
//! Professions are a closed enum with an explicit fallback rather than a
//! free-form string lookup, so an unknown id can never panic or silently
//! change scoring behavior.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profession {
    SoftwareEngineer,
    DataScientist,
    MarketingManager,
    SalesProfessional,
}

/// Static advisory data keyed by profession. Informational only; never
/// feeds back into any score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInsights {
    pub profession: Profession,
    pub demand_level: String,
    pub competition: String,
    pub trending_keywords: Vec<String>,
    pub advice: String,
}

impl Profession {
    pub const ALL: [Profession; 4] = [
        Profession::SoftwareEngineer,
        Profession::DataScientist,
        Profession::MarketingManager,
        Profession::SalesProfessional,
    ];

    /// Resolve a profession id, falling back to the default profile for
    /// `None` and for ids not present in the static table.
    pub fn from_id(id: Option<&str>) -> Self {
        match id {
            Some("software_engineer") => Profession::SoftwareEngineer,
            Some("data_scientist") => Profession::DataScientist,
            Some("marketing_manager") => Profession::MarketingManager,
            Some("sales_professional") => Profession::SalesProfessional,
            _ => Profession::SoftwareEngineer,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Profession::SoftwareEngineer => "software_engineer",
            Profession::DataScientist => "data_scientist",
            Profession::MarketingManager => "marketing_manager",
            Profession::SalesProfessional => "sales_professional",
        }
    }

    /// Domain keyword list used by the keyword analyzer. Order is stable so
    /// that found/missing output is deterministic.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Profession::SoftwareEngineer => &[
                "python", "javascript", "java", "react", "node.js", "sql",
                "aws", "docker", "kubernetes", "git", "agile", "api",
                "microservices", "ci/cd", "testing", "debugging",
                "algorithms", "data structures", "cloud", "devops",
                "backend", "frontend", "full stack",
            ],
            Profession::DataScientist => &[
                "python", "data mining", "sql", "machine learning", "deep learning",
                "statistics", "pandas", "numpy", "tensorflow", "pytorch",
                "data visualization", "tableau", "big data", "spark",
                "nlp", "regression", "classification", "clustering",
                "feature engineering", "a/b testing", "etl", "jupyter",
            ],
            Profession::MarketingManager => &[
                "seo", "sem", "content marketing", "social media",
                "google analytics", "email marketing", "brand management",
                "campaign management", "market research", "crm",
                "lead generation", "conversion optimization", "copywriting",
                "digital marketing", "marketing automation", "budget",
                "roi", "kpi", "segmentation", "positioning",
            ],
            Profession::SalesProfessional => &[
                "sales", "negotiation", "crm", "salesforce", "prospecting",
                "lead generation", "cold calling", "account management",
                "pipeline", "quota", "closing", "b2b", "b2c",
                "relationship building", "territory management",
                "revenue growth", "customer acquisition", "forecasting", "upselling",
                "customer retention",
            ],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Profession::SoftwareEngineer => "Software Engineer",
            Profession::DataScientist => "Data Scientist",
            Profession::MarketingManager => "Marketing Manager",
            Profession::SalesProfessional => "Sales Professional",
        }
    }

    pub fn market_insights(&self) -> MarketInsights {
        let (demand_level, competition, trending_keywords, advice) = match self {
            Profession::SoftwareEngineer => (
                "High",
                "Strong",
                vec!["rust", "kubernetes", "serverless", "llm integration"],
                "Lead with shipped systems and measurable reliability or \
                 performance wins; recruiters scan for cloud and CI/CD signals.",
            ),
            Profession::DataScientist => (
                "High",
                "Very strong",
                vec!["mlops", "llm fine-tuning", "causal inference", "dbt"],
                "Pair every model with the business metric it moved; notebooks \
                 alone rarely pass a hiring screen.",
            ),
            Profession::MarketingManager => (
                "Moderate",
                "Strong",
                vec!["marketing automation", "attribution", "short-form video"],
                "Quantify campaign outcomes (CAC, ROAS, conversion lift) and \
                 name the channels you own end to end.",
            ),
            Profession::SalesProfessional => (
                "Moderate",
                "Moderate",
                vec!["social selling", "sales enablement", "revops"],
                "State quota attainment as a percentage and show pipeline \
                 numbers; hiring managers anchor on them first.",
            ),
        };

        MarketInsights {
            profession: *self,
            demand_level: demand_level.to_string(),
            competition: competition.to_string(),
            trending_keywords: trending_keywords.into_iter().map(String::from).collect(),
            advice: advice.to_string(),
        }
    }
}

impl std::fmt::Display for Profession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
