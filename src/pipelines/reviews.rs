//! Collect-then-save pipeline.
use std::path::PathBuf;

use log::info;

use super::collector::{Collection, ReviewCollector};
use super::pipeline::Pipeline;
use crate::error::Error;
use crate::io::CsvWriter;
use crate::request::CollectionRequest;
use crate::sources::Fetch;

/// Runs one [CollectionRequest] and writes the result to `dst`.
///
/// The output file is only written once the collection is over.
/// If the collection fails, nothing is written.
pub struct ReviewPipeline<F> {
    collector: ReviewCollector<F>,
    request: CollectionRequest,
    dst: PathBuf,
}

impl<F: Fetch> ReviewPipeline<F> {
    pub fn new(collector: ReviewCollector<F>, request: CollectionRequest, dst: PathBuf) -> Self {
        Self {
            collector,
            request,
            dst,
        }
    }
}

impl<F: Fetch> Pipeline<Collection> for ReviewPipeline<F> {
    fn run(&self) -> Result<Collection, Error> {
        info!(
            "collecting {} '{}' reviews from {}",
            self.request.quota, self.request.target_label, self.request.base_url
        );
        let collection = self.collector.collect(&self.request)?;

        info!(
            "stopped after {} page(s): {:?}, {} kept / {} seen",
            collection.pages_fetched,
            collection.stop,
            collection.len(),
            collection.tally.seen()
        );

        CsvWriter::new(&self.dst).write(&collection.records)?;
        Ok(collection)
    }
}
