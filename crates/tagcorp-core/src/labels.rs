//! # Corpus Labels
//!
//! Maps the named-entity categories produced by the annotation pipeline onto
//! the short label set used in the training corpus.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output label written in the NER column of a corpus row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CorpusLabel {
    /// `LOCATION`
    #[serde(rename = "Loc")]
    Loc,
    /// `ORGANIZATION`
    #[serde(rename = "Org")]
    Org,
    /// `PERSON`
    #[serde(rename = "Peop")]
    Peop,
    /// No entity.
    #[serde(rename = "O")]
    Outside,
    /// Any category outside the table (DATE, MONEY, MISC, ...).
    #[serde(rename = "OTHER")]
    Other,
}

impl CorpusLabel {
    /// Total number of distinct labels.
    pub const NUM_LABELS: usize = 5;

    /// Get all labels in column order.
    pub fn all_labels() -> &'static [CorpusLabel] {
        &[
            CorpusLabel::Loc,
            CorpusLabel::Org,
            CorpusLabel::Peop,
            CorpusLabel::Outside,
            CorpusLabel::Other,
        ]
    }

    /// Map a raw pipeline NER category to its corpus label.
    ///
    /// Total: unknown categories become [`CorpusLabel::Other`].
    pub fn from_ner(category: &str) -> Self {
        match category {
            "LOCATION" => CorpusLabel::Loc,
            "ORGANIZATION" => CorpusLabel::Org,
            "PERSON" => CorpusLabel::Peop,
            "O" | "none" | "" => CorpusLabel::Outside,
            _ => CorpusLabel::Other,
        }
    }

    /// Check if this label marks a named entity.
    pub fn is_entity(&self) -> bool {
        !matches!(self, CorpusLabel::Outside)
    }

    /// Column text for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CorpusLabel::Loc => "Loc",
            CorpusLabel::Org => "Org",
            CorpusLabel::Peop => "Peop",
            CorpusLabel::Outside => "O",
            CorpusLabel::Other => "OTHER",
        }
    }
}

impl fmt::Display for CorpusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a corpus column does not hold a known label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown corpus label {:?}", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for CorpusLabel {
    type Err = UnknownLabel;

    /// Parse the column text written by [`fmt::Display`], not a raw NER category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CorpusLabel::all_labels()
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Map a raw NER category straight to its column text.
pub fn map_ner(category: &str) -> &'static str {
    CorpusLabel::from_ner(category).as_str()
}
