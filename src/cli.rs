//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;
use url::Url;

use reviewcrawl::request::{parse_listing_url, CollectionRequest};
use reviewcrawl::review::Label;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "reviewcrawl",
    about = "Collects spectator reviews of a single label from a review listing."
)]
/// Collection command and parameters.
///
/// ```sh
/// reviewcrawl 0.1.0
/// Collects spectator reviews of a single label from a review listing.
///
/// USAGE:
///     reviewcrawl [FLAGS] [OPTIONS] <url> <pages-max> <min-length> <label> <output-csv>
///
/// FLAGS:
///         --fail-on-blocked    fail instead of stopping when a page is refused
///     -h, --help               Prints help information
///     -V, --version            Prints version information
///
/// OPTIONS:
///         --delay-ms <delay-ms>                pause between two pages, in milliseconds [default: 1000]
///     -n, --total-reviews <total-reviews>    number of reviews to collect [default: 30]
///
/// ARGS:
///     <url>           review listing url
///     <pages-max>     maximum number of pages to walk (0 for no limit)
///     <min-length>    minimum comment length (in characters)
///     <label>         label of the reviews to keep [possible values: pos, mid, neg]
///     <output-csv>    output csv file
/// ```
pub struct ReviewCrawl {
    #[structopt(parse(try_from_str = parse_listing_url), help = "review listing url")]
    pub url: Url,
    #[structopt(help = "maximum number of pages to walk (0 for no limit)")]
    pub pages_max: u32,
    #[structopt(help = "minimum comment length (in characters)")]
    pub min_length: usize,
    #[structopt(
        help = "label of the reviews to keep",
        possible_values = &Label::VARIANTS
    )]
    pub label: Label,
    #[structopt(parse(from_os_str), help = "output csv file")]
    pub output_csv: PathBuf,
    #[structopt(
        short = "n",
        long = "total-reviews",
        alias = "total_reviews",
        default_value = "30",
        help = "number of reviews to collect"
    )]
    pub total_reviews: usize,
    #[structopt(
        long = "delay-ms",
        default_value = "1000",
        help = "pause between two pages, in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(
        long = "fail-on-blocked",
        help = "fail instead of stopping when a page is refused"
    )]
    pub fail_on_blocked: bool,
}

impl ReviewCrawl {
    pub fn request(&self) -> CollectionRequest {
        let mut request = CollectionRequest::new(self.url.clone(), self.label, self.total_reviews);
        request.max_pages = match self.pages_max {
            0 => None,
            max => Some(max),
        };
        request.min_comment_length = self.min_length;
        request.fail_on_blocked = self.fail_on_blocked;
        request
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
