//! Shared text view and declarative pattern tables
//!
//! The resume text is normalized exactly once per analysis call and the
//! resulting view is shared read-only by every analyzer. Pattern rules are
//! kept as `(name, pattern)` data so the scoring rules stay reviewable.

use crate::error::Result;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Regex rules used across analyzers, compiled once at engine construction.
const PATTERN_TABLE: &[(&str, &str)] = &[
    ("email", r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"),
    (
        "phone",
        r"\b(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b",
    ),
    ("percentage", r"\d+(?:\.\d+)?\s*%"),
    ("currency", r"\$\s*\d"),
    ("magnitude", r"(?i)\b\d+(?:\.\d+)?\+?\s*(?:million|thousand|k|m)\b"),
    // Letters, digits, whitespace and basic punctuation only. Anything else
    // (bullets like `•`, box-drawing, emoji) trips common ATS parsers.
    ("ats_charset", r#"^[a-zA-Z0-9\s.,;:!?'"()&@%$#*+/\-_\[\]|=]*$"#),
    ("all_caps_header", r"^[A-Z][A-Z\s&/:\-]{3,}$"),
];

pub struct PatternSet {
    email: Regex,
    phone: Regex,
    percentage: Regex,
    currency: Regex,
    magnitude: Regex,
    ats_charset: Regex,
    all_caps_header: Regex,
}

impl PatternSet {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            email: Self::entry("email")?,
            phone: Self::entry("phone")?,
            percentage: Self::entry("percentage")?,
            currency: Self::entry("currency")?,
            magnitude: Self::entry("magnitude")?,
            ats_charset: Self::entry("ats_charset")?,
            all_caps_header: Self::entry("all_caps_header")?,
        })
    }

    fn entry(name: &str) -> Result<Regex> {
        let (_, pattern) = PATTERN_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| {
                crate::error::ScorerError::Pattern(format!("no pattern named '{}'", name))
            })?;
        Ok(Regex::new(pattern)?)
    }

    pub fn has_email(&self, text: &str) -> bool {
        self.email.is_match(text)
    }

    pub fn has_phone(&self, text: &str) -> bool {
        self.phone.is_match(text)
    }

    /// Percentage, currency amount, or number followed by a magnitude word.
    pub fn has_quantifiable_results(&self, text: &str) -> bool {
        self.percentage.is_match(text)
            || self.currency.is_match(text)
            || self.magnitude.is_match(text)
    }

    pub fn is_ats_charset(&self, text: &str) -> bool {
        self.ats_charset.is_match(text)
    }

    pub fn is_all_caps_header(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.len() > 3 && self.all_caps_header.is_match(trimmed)
    }
}

/// Read-only view over the raw resume text, derived once per analysis.
pub struct ResumeView<'a> {
    pub raw: &'a str,
    pub lower: String,
    pub word_count: usize,
}

impl<'a> ResumeView<'a> {
    pub fn new(raw: &'a str) -> Self {
        let lower = raw.to_lowercase();
        let word_count = raw.split_whitespace().count();
        Self {
            raw,
            lower,
            word_count,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.raw.lines()
    }

    /// Lines whose trimmed form starts with a bullet glyph.
    pub fn bullet_lines(&self) -> impl Iterator<Item = &str> {
        self.raw.lines().filter(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with('•') || trimmed.starts_with('-') || trimmed.starts_with('*')
        })
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }
}

/// Sentence count via unicode segmentation; used by the readability proxy.
pub fn sentence_count(text: &str) -> usize {
    text.unicode_sentences()
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Syllable proxy: vowel clusters per word, minimum one per word.
pub fn syllable_estimate(text: &str) -> usize {
    text.split_whitespace()
        .map(|word| {
            let mut clusters = 0usize;
            let mut in_cluster = false;
            for c in word.chars() {
                let vowel = matches!(
                    c.to_ascii_lowercase(),
                    'a' | 'e' | 'i' | 'o' | 'u' | 'y'
                );
                if vowel && !in_cluster {
                    clusters += 1;
                }
                in_cluster = vowel;
            }
            clusters.max(1)
        })
        .sum()
}
