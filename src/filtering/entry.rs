//! Entry-level filtering.
use log::warn;

use super::{Filter, Length};
use crate::review::{parse_rating, Label, ReviewRecord};
use crate::sources::RawEntry;

/// What happened to a single entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    Accepted(ReviewRecord),
    /// Holds the raw rating.
    SkippedMalformedRating(String),
    SkippedNoComment,
    /// Holds the comment length, in codepoints.
    SkippedTooShort(usize),
    /// Holds the label the entry would have had.
    SkippedWrongLabel(Label),
}

/// Keeps entries with a valid rating, a long enough comment and the target label.
///
/// Checks are done in that order, and the first failing one gives the outcome.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    length: Length,
    target: Label,
}

impl EntryFilter {
    pub fn new(target: Label, min_comment_length: usize) -> Self {
        Self {
            length: Length::with_min_size(min_comment_length),
            target,
        }
    }

    pub fn classify(&self, entry: &RawEntry) -> EntryOutcome {
        let rating = match parse_rating(&entry.rating) {
            Some(rating) => rating,
            None => {
                warn!("skipping review with malformed rating {:?}", entry.rating);
                return EntryOutcome::SkippedMalformedRating(entry.rating.clone());
            }
        };

        let comment = entry.comment.trim();
        if comment.is_empty() {
            return EntryOutcome::SkippedNoComment;
        }

        if !self.length.detect(comment) {
            return EntryOutcome::SkippedTooShort(comment.chars().count());
        }

        let label = Label::from_rating(rating);
        if label != self.target {
            return EntryOutcome::SkippedWrongLabel(label);
        }

        EntryOutcome::Accepted(ReviewRecord::new(rating, comment.to_string()))
    }
}

/// Outcome counters for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub accepted: usize,
    pub malformed_rating: usize,
    pub no_comment: usize,
    pub too_short: usize,
    pub wrong_label: usize,
}

impl Tally {
    pub fn add(&mut self, outcome: &EntryOutcome) {
        match outcome {
            EntryOutcome::Accepted(_) => self.accepted += 1,
            EntryOutcome::SkippedMalformedRating(_) => self.malformed_rating += 1,
            EntryOutcome::SkippedNoComment => self.no_comment += 1,
            EntryOutcome::SkippedTooShort(_) => self.too_short += 1,
            EntryOutcome::SkippedWrongLabel(_) => self.wrong_label += 1,
        }
    }

    /// Number of entries that went through classification.
    pub fn seen(&self) -> usize {
        self.accepted + self.skipped()
    }

    pub fn skipped(&self) -> usize {
        self.malformed_rating + self.no_comment + self.too_short + self.wrong_label
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryFilter, EntryOutcome, Tally};
    use crate::review::{Label, ReviewRecord};
    use crate::sources::RawEntry;

    #[test]
    fn accepted() {
        let f = EntryFilter::new(Label::Pos, 5);
        assert_eq!(
            f.classify(&RawEntry::new("4,5", "Un film magnifique")),
            EntryOutcome::Accepted(ReviewRecord::new(4.5, "Un film magnifique".to_string()))
        );
    }

    #[test]
    fn malformed_rating_comes_first() {
        let f = EntryFilter::new(Label::Pos, 5);
        assert_eq!(
            f.classify(&RawEntry::new("--", "")),
            EntryOutcome::SkippedMalformedRating("--".to_string())
        );
    }

    #[test]
    fn no_comment() {
        let f = EntryFilter::new(Label::Neg, 0);
        assert_eq!(
            f.classify(&RawEntry::new("1,0", "   ")),
            EntryOutcome::SkippedNoComment
        );
    }

    #[test]
    fn too_short() {
        let f = EntryFilter::new(Label::Neg, 10);
        assert_eq!(
            f.classify(&RawEntry::new("1,0", "Nul.")),
            EntryOutcome::SkippedTooShort(4)
        );
    }

    #[test]
    fn wrong_label() {
        let f = EntryFilter::new(Label::Neg, 0);
        assert_eq!(
            f.classify(&RawEntry::new("3,0", "Moyen")),
            EntryOutcome::SkippedWrongLabel(Label::Mid)
        );
        assert_eq!(
            f.classify(&RawEntry::new("4,0", "Bien")),
            EntryOutcome::SkippedWrongLabel(Label::Pos)
        );
    }

    #[test]
    fn tally_counts() {
        let f = EntryFilter::new(Label::Mid, 3);
        let entries = vec![
            RawEntry::new("3,5", "Sympathique"),
            RawEntry::new("3,5", "Ok"),
            RawEntry::new("x", "Sympathique"),
            RawEntry::new("4,5", "Excellent"),
            RawEntry::new("3,0", ""),
        ];

        let mut tally = Tally::default();
        for entry in &entries {
            tally.add(&f.classify(entry));
        }

        assert_eq!(
            tally,
            Tally {
                accepted: 1,
                malformed_rating: 1,
                no_comment: 1,
                too_short: 1,
                wrong_label: 1,
            }
        );
        assert_eq!(tally.seen(), 5);
        assert_eq!(tally.skipped(), 4);
    }
}
