/*! Review sources.

A source is made of two parts:
- a [Fetch] implementation that retrieves listing pages (over HTTP with [HttpFetcher]),
- a [ReviewExtractor] that turns a page into [RawEntry] items.
!*/
mod extract;
mod fetcher;

pub use extract::{ExtractedPage, RawEntry, ReviewExtractor};
pub use fetcher::{Fetch, HttpFetcher, PageResponse, USER_AGENT};
