//! # reviewcrawl
//!
//! Collects labeled spectator reviews from a paginated review listing.
//!
//! ```sh
//! reviewcrawl https://www.allocine.fr/film/fichefilm-293908/critiques/spectateurs/ 2 200 mid mid.csv
//! ```
//!
//! Walks at most 2 pages and keeps up to 30 `mid` reviews (rated from 3.0 to 3.9)
//! whose comment is at least 200 characters long.
//! Logging verbosity is controlled with `RUST_LOG` (default is `info`).
use reviewcrawl::error::Error;
use reviewcrawl::pipelines::{Pipeline, ReviewCollector, ReviewPipeline};
use reviewcrawl::sources::HttpFetcher;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::ReviewCrawl::from_args();
    debug!("cli args\n{:#?}", opt);

    let collector = ReviewCollector::new(HttpFetcher::new()?)?.with_delay(opt.delay());
    let pipeline = ReviewPipeline::new(collector, opt.request(), opt.output_csv.clone());
    let collection = pipeline.run()?;

    println!("\nTotal reviews collected: {}", collection.len());
    Ok(())
}
