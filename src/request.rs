//! Collection requests.
use url::Url;

use crate::review::Label;

/// Parameters of a single collection run.
#[derive(Debug, Clone)]
pub struct CollectionRequest {
    /// Listing URL, without pagination.
    pub base_url: Url,
    /// Last page to fetch. `None` walks the listing until it ends.
    pub max_pages: Option<u32>,
    /// Minimum comment length, in unicode codepoints.
    pub min_comment_length: usize,
    pub target_label: Label,
    /// Maximum number of reviews to collect.
    pub quota: usize,
    /// Fail the run instead of stopping quietly when a page is refused.
    pub fail_on_blocked: bool,
}

impl CollectionRequest {
    /// Request with no page limit, no minimum length and quietly stopping on refused pages.
    pub fn new(base_url: Url, target_label: Label, quota: usize) -> Self {
        Self {
            base_url,
            max_pages: None,
            min_comment_length: 0,
            target_label,
            quota,
            fail_on_blocked: false,
        }
    }

    /// URL of the `page`th listing page (starting at 1).
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());
        url
    }

    /// Whether `page` is the last page allowed by [CollectionRequest::max_pages].
    pub fn is_last_page(&self, page: u32) -> bool {
        matches!(self.max_pages, Some(max) if page >= max)
    }
}

/// Parse a listing URL, dropping trailing slashes.
pub fn parse_listing_url(raw: &str) -> Result<Url, url::ParseError> {
    Url::parse(raw.trim().trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::{parse_listing_url, CollectionRequest};
    use crate::review::Label;

    #[test]
    fn listing_url_trailing_slash() {
        let url = parse_listing_url(
            "https://www.allocine.fr/film/fichefilm-293908/critiques/spectateurs/",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.allocine.fr/film/fichefilm-293908/critiques/spectateurs"
        );
    }

    #[test]
    fn listing_url_malformed() {
        assert!(parse_listing_url("not a url").is_err());
        assert!(parse_listing_url("").is_err());
    }

    #[test]
    fn page_url() {
        let base = parse_listing_url("https://example.org/critiques/spectateurs/").unwrap();
        let req = CollectionRequest::new(base, Label::Pos, 10);
        assert_eq!(
            req.page_url(3).as_str(),
            "https://example.org/critiques/spectateurs?page=3"
        );
        // base url is left untouched
        assert_eq!(
            req.page_url(1).as_str(),
            "https://example.org/critiques/spectateurs?page=1"
        );
    }

    #[test]
    fn page_url_keeps_query() {
        let base = parse_listing_url("https://example.org/reviews?sort=recent").unwrap();
        let req = CollectionRequest::new(base, Label::Neg, 1);
        assert_eq!(
            req.page_url(2).as_str(),
            "https://example.org/reviews?sort=recent&page=2"
        );
    }

    #[test]
    fn last_page() {
        let base = parse_listing_url("https://example.org/reviews").unwrap();
        let mut req = CollectionRequest::new(base, Label::Mid, 1);
        assert!(!req.is_last_page(1000));

        req.max_pages = Some(2);
        assert!(!req.is_last_page(1));
        assert!(req.is_last_page(2));
        assert!(req.is_last_page(3));
    }
}
