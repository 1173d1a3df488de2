//! Paginated review collection.
//!
//! The collector walks the listing one page at a time:
//! 1. the page is fetched; a non-200 answer stops the walk,
//! 1. review cards are extracted; a page without any card stops the walk,
//! 1. each entry is classified, accepted ones are kept until the quota is reached,
//! 1. the walk stops on the last allowed page, or waits before fetching the next one.
//!
//! Requests are strictly sequential.
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use url::Url;

use crate::error::Error;
use crate::filtering::{EntryFilter, EntryOutcome, Tally};
use crate::request::CollectionRequest;
use crate::review::ReviewRecord;
use crate::sources::{Fetch, RawEntry, ReviewExtractor};

/// Default pause between two page fetches.
pub const POLITENESS_DELAY: Duration = Duration::from_secs(1);

/// Interpretation of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Page with at least one review card.
    /// Holds the complete cards, which may be none.
    Page(Vec<RawEntry>),
    /// The site answered with a non-200 status.
    Blocked(u16),
    /// The page holds no review card.
    End,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    QuotaReached,
    Blocked(u16),
    EndOfListing,
    PageLimit,
}

/// Result of a collection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub records: Vec<ReviewRecord>,
    pub pages_fetched: u32,
    pub stop: StopReason,
    pub tally: Tally,
}

impl Collection {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            pages_fetched: 0,
            stop: StopReason::EndOfListing,
            tally: Tally::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Drives a [Fetch] implementation across listing pages.
pub struct ReviewCollector<F> {
    fetcher: F,
    extractor: ReviewExtractor,
    delay: Duration,
}

impl<F: Fetch> ReviewCollector<F> {
    /// Collector using the default extractor and [POLITENESS_DELAY].
    pub fn new(fetcher: F) -> Result<Self, Error> {
        Ok(Self::with_extractor(fetcher, ReviewExtractor::new()?))
    }

    pub fn with_extractor(fetcher: F, extractor: ReviewExtractor) -> Self {
        Self {
            fetcher,
            extractor,
            delay: POLITENESS_DELAY,
        }
    }

    /// Set the pause between two page fetches.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fetch a single page and interpret it.
    pub fn fetch_page(&self, url: &Url) -> Result<PageOutcome, Error> {
        let response = self.fetcher.fetch(url)?;
        if !response.is_ok() {
            return Ok(PageOutcome::Blocked(response.status));
        }

        let page = self.extractor.extract_page(&response.body);
        if page.cards == 0 {
            Ok(PageOutcome::End)
        } else {
            Ok(PageOutcome::Page(page.entries))
        }
    }

    /// Collect up to `request.quota` reviews of `request.target_label`.
    ///
    /// Refused pages end the run like the end of the listing does,
    /// unless [CollectionRequest::fail_on_blocked] is set.
    pub fn collect(&self, request: &CollectionRequest) -> Result<Collection, Error> {
        let mut collection = Collection::new();
        if request.quota == 0 {
            collection.stop = StopReason::QuotaReached;
            return Ok(collection);
        }

        let filter = EntryFilter::new(request.target_label, request.min_comment_length);
        let mut page = 1;

        loop {
            let url = request.page_url(page);
            info!("fetching page {}: {}", page, url);
            let outcome = self.fetch_page(&url)?;
            collection.pages_fetched += 1;

            let entries = match outcome {
                PageOutcome::Page(entries) => entries,
                PageOutcome::Blocked(status) => {
                    warn!("could not access page {} (status {})", page, status);
                    if request.fail_on_blocked {
                        return Err(Error::Blocked { page, status });
                    }
                    collection.stop = StopReason::Blocked(status);
                    break;
                }
                PageOutcome::End => {
                    info!("no more reviews found");
                    collection.stop = StopReason::EndOfListing;
                    break;
                }
            };

            debug!("page {}: {} entries", page, entries.len());
            for entry in &entries {
                let outcome = filter.classify(entry);
                collection.tally.add(&outcome);

                if let EntryOutcome::Accepted(record) = outcome {
                    collection.records.push(record);
                    if collection.records.len() >= request.quota {
                        info!("{} reviews collected, stopping", request.quota);
                        collection.stop = StopReason::QuotaReached;
                        return Ok(collection);
                    }
                }
            }

            if request.is_last_page(page) {
                info!("reached page limit ({})", page);
                collection.stop = StopReason::PageLimit;
                break;
            }

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            page += 1;
        }

        Ok(collection)
    }
}
