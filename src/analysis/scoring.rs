//! Weighted aggregation and tier classification

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Keywords,
    ContentQuality,
    Formatting,
    Structure,
    Completeness,
    Optimization,
}

impl Category {
    /// Canonical iteration order; the recommendation engine depends on it.
    pub const ALL: [Category; 6] = [
        Category::Keywords,
        Category::ContentQuality,
        Category::Formatting,
        Category::Structure,
        Category::Completeness,
        Category::Optimization,
    ];
}

/// Fixed aggregation weights. The sum is exactly 1.0 and is asserted in
/// tests; tune here, nowhere else.
pub const WEIGHTS: [(Category, f64); 6] = [
    (Category::Keywords, 0.25),
    (Category::ContentQuality, 0.20),
    (Category::Formatting, 0.15),
    (Category::Structure, 0.15),
    (Category::Completeness, 0.15),
    (Category::Optimization, 0.10),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryScores {
    pub keywords: f64,
    pub content_quality: f64,
    pub formatting: f64,
    pub structure: f64,
    pub completeness: f64,
    pub optimization: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Keywords => self.keywords,
            Category::ContentQuality => self.content_quality,
            Category::Formatting => self.formatting,
            Category::Structure => self.structure,
            Category::Completeness => self.completeness,
            Category::Optimization => self.optimization,
        }
    }

    /// Weighted overall score, rounded to one decimal place.
    pub fn overall(&self) -> f64 {
        let weighted: f64 = WEIGHTS
            .iter()
            .map(|(category, weight)| self.get(*category).clamp(0.0, 100.0) * weight)
            .sum();
        (weighted * 10.0).round() / 10.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtsCompatibility {
    #[serde(rename = "Highly Compatible")]
    HighlyCompatible,
    #[serde(rename = "Compatible")]
    Compatible,
    #[serde(rename = "Moderately Compatible")]
    ModeratelyCompatible,
    #[serde(rename = "Low Compatibility")]
    LowCompatibility,
    #[serde(rename = "Not Compatible")]
    NotCompatible,
}

impl AtsCompatibility {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            AtsCompatibility::HighlyCompatible
        } else if score >= 70.0 {
            AtsCompatibility::Compatible
        } else if score >= 55.0 {
            AtsCompatibility::ModeratelyCompatible
        } else if score >= 40.0 {
            AtsCompatibility::LowCompatibility
        } else {
            AtsCompatibility::NotCompatible
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AtsCompatibility::HighlyCompatible => "Highly Compatible",
            AtsCompatibility::Compatible => "Compatible",
            AtsCompatibility::ModeratelyCompatible => "Moderately Compatible",
            AtsCompatibility::LowCompatibility => "Low Compatibility",
            AtsCompatibility::NotCompatible => "Not Compatible",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employability {
    pub rating: String,
    pub summary: String,
}

impl Employability {
    pub fn from_score(score: f64) -> Self {
        let (rating, summary) = if score >= 90.0 {
            (
                "Excellent",
                "Your resume is highly competitive and should perform well with \
                 both automated screening and human reviewers.",
            )
        } else if score >= 80.0 {
            (
                "Very Good",
                "Your resume is strong; a few targeted refinements would make it \
                 stand out further.",
            )
        } else if score >= 70.0 {
            (
                "Good",
                "Your resume is solid but leaves points on the table in several \
                 scoring categories.",
            )
        } else if score >= 60.0 {
            (
                "Fair",
                "Your resume needs focused improvements before it will screen \
                 reliably for competitive roles.",
            )
        } else if score >= 50.0 {
            (
                "Poor",
                "Your resume is likely to be filtered out by automated screening; \
                 address the critical recommendations first.",
            )
        } else {
            (
                "Very Poor",
                "Your resume needs substantial rework across most categories to \
                 pass automated screening.",
            )
        };
        Self {
            rating: rating.to_string(),
            summary: summary.to_string(),
        }
    }
}
