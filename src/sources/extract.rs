//! Review extraction from listing pages.
//!
//! A listing page holds a number of review cards, each one carrying a star rating
//! and the review text. Cards that lack one of them (pending moderation, rating-only
//! reviews) are skipped without notice.
use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::Error;

const CARD_SELECTOR: &str = "div.hred.review-card.cf";
const RATING_SELECTOR: &str = "span.stareval-note";
const COMMENT_SELECTOR: &str = "div.content-txt.review-card-content";

/// A review as found on the page, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub rating: String,
    pub comment: String,
}

impl RawEntry {
    pub fn new(rating: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            rating: rating.into(),
            comment: comment.into(),
        }
    }
}

/// Result of the extraction of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Number of review cards on the page, complete or not.
    pub cards: usize,
    /// Complete cards, in page order.
    pub entries: Vec<RawEntry>,
}

/// Finds review cards in a page and reads their rating and comment.
pub struct ReviewExtractor {
    card: Selector,
    rating: Selector,
    comment: Selector,
}

impl ReviewExtractor {
    /// Extractor for the spectator review listings of the review site.
    pub fn new() -> Result<Self, Error> {
        Self::with_selectors(CARD_SELECTOR, RATING_SELECTOR, COMMENT_SELECTOR)
    }

    /// Extractor using custom CSS selectors.
    ///
    /// `rating` and `comment` are matched inside each element matched by `card`.
    pub fn with_selectors(card: &str, rating: &str, comment: &str) -> Result<Self, Error> {
        Ok(Self {
            card: parse_selector(card)?,
            rating: parse_selector(rating)?,
            comment: parse_selector(comment)?,
        })
    }

    /// Extract entries in page order.
    pub fn extract(&self, html: &str) -> Vec<RawEntry> {
        self.extract_page(html).entries
    }

    /// Extract entries, keeping track of how many cards the page holds.
    ///
    /// A page made of incomplete cards only yields no entry but is not an empty page.
    pub fn extract_page(&self, html: &str) -> ExtractedPage {
        let document = Html::parse_document(html);
        let mut cards = 0;

        let entries: Vec<RawEntry> = document
            .select(&self.card)
            .inspect(|_| cards += 1)
            .filter_map(|card| {
                let rating = card.select(&self.rating).next()?;
                let comment = card.select(&self.comment).next()?;
                Some(RawEntry {
                    rating: element_text(rating),
                    comment: element_text(comment),
                })
            })
            .collect();

        debug!("{}/{} review cards are complete", entries.len(), cards);
        ExtractedPage { cards, entries }
    }
}

fn parse_selector(selector: &str) -> Result<Selector, Error> {
    Selector::parse(selector)
        .map_err(|e| Error::Selector(format!("invalid selector {:?}: {:?}", selector, e)))
}

/// Text content of an element, with each text node trimmed
/// and empty ones dropped.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
