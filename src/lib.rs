//! # reviewcrawl
//!
//! Collects labeled spectator reviews from a paginated review listing,
//! to build sentiment classification corpora.
//!
//! Each review gets a label from its rating (`pos` from 4.0, `mid` from 3.0, `neg` below),
//! and only reviews of a single label are kept, up to a quota.
//!
//! ```no_run
//! use reviewcrawl::pipelines::{Pipeline, ReviewCollector, ReviewPipeline};
//! use reviewcrawl::request::{parse_listing_url, CollectionRequest};
//! use reviewcrawl::review::Label;
//! use reviewcrawl::sources::HttpFetcher;
//!
//! # fn main() -> Result<(), reviewcrawl::error::Error> {
//! let url = parse_listing_url("https://www.allocine.fr/film/fichefilm-293908/critiques/spectateurs/")?;
//! let mut request = CollectionRequest::new(url, Label::Pos, 30);
//! request.max_pages = Some(5);
//! request.min_comment_length = 200;
//!
//! let collector = ReviewCollector::new(HttpFetcher::new()?)?;
//! let pipeline = ReviewPipeline::new(collector, request, "pos.csv".into());
//! let collection = pipeline.run()?;
//! println!("{} reviews", collection.len());
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod request;
pub mod review;
pub mod sources;
