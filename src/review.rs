//! Reviews and sentiment labels.
//!
//! A review is labeled from its star rating only:
//!
//! | rating            | label |
//! |-------------------|-------|
//! | `>= 4.0`          | `pos` |
//! | `3.0 <= r < 4.0`  | `mid` |
//! | `< 3.0`           | `neg` |
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Highest rating the review site hands out.
pub const MAX_RATING: f64 = 5.0;

/// Sentiment label derived from a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Pos,
    Mid,
    Neg,
}

impl Label {
    /// Textual forms, in the order they are accepted on the command line.
    pub const VARIANTS: [&'static str; 3] = ["pos", "mid", "neg"];

    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            Label::Pos
        } else if rating >= 3.0 {
            Label::Mid
        } else {
            Label::Neg
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Pos => "pos",
            Label::Mid => "mid",
            Label::Neg => "neg",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pos" => Ok(Label::Pos),
            "mid" => Ok(Label::Mid),
            "neg" => Ok(Label::Neg),
            other => Err(format!(
                "unknown label {:?}, expected one of {}",
                other,
                Label::VARIANTS.join(", ")
            )),
        }
    }
}

/// Parse a rating as displayed by the site.
///
/// The site uses a comma as decimal separator (`"4,5"`), which is normalized
/// before parsing. Returns `None` for anything that is not a finite number
/// between `0.0` and [MAX_RATING].
pub fn parse_rating(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    let rating: f64 = normalized.parse().ok()?;
    if rating.is_finite() && (0.0..=MAX_RATING).contains(&rating) {
        Some(rating)
    } else {
        None
    }
}

/// A labeled review, as written in the output file.
///
/// Field names are the column names of the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRecord {
    #[serde(rename = "Note", serialize_with = "one_decimal")]
    rating: f64,
    #[serde(rename = "Comment")]
    comment: String,
    #[serde(rename = "Class")]
    label: Label,
}

impl ReviewRecord {
    /// Create a record, deriving the label from the rating.
    pub fn new(rating: f64, comment: String) -> Self {
        Self {
            rating,
            comment,
            label: Label::from_rating(rating),
        }
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn label(&self) -> Label {
        self.label
    }
}

fn one_decimal<S: Serializer>(rating: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.1}", rating))
}
