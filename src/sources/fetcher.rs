//! Page fetching.
use log::debug;
use reqwest::blocking::{Client, ClientBuilder};
use url::Url;

use crate::error::Error;

/// Client identity sent with every request.
///
/// The review site turns away clients without a browser-like user agent.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Raw answer to a page request.
///
/// Non-200 statuses are kept as-is: the caller decides what they mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
}

impl PageResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Something that can retrieve a listing page.
pub trait Fetch {
    /// Issue a single request for `url`.
    ///
    /// Only transport failures are errors; HTTP error statuses are returned in the [PageResponse].
    fn fetch(&self, url: &Url) -> Result<PageResponse, Error>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn fetch(&self, url: &Url) -> Result<PageResponse, Error> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, Error> {
        Self::from_builder(Client::builder())
    }

    /// Fetcher from a pre-configured client builder (proxies, timeouts).
    ///
    /// The user agent is always set to [USER_AGENT].
    pub fn from_builder(builder: ClientBuilder) -> Result<Self, Error> {
        let client = builder.user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<PageResponse, Error> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!("{} answered {} ({} bytes)", url, status, body.len());

        Ok(PageResponse { status, body })
    }
}
