// src/core/net.rs
// Blocking HTTP GET of one facility page.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::{BASE_URL, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Source of facility pages. The scraper only needs this one call, which
/// also lets tests feed captured HTML without a network.
pub trait Fetch {
    fn fetch(&self, id: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client, base_url: s!(base_url) })
    }

    pub fn url_for(&self, id: &str) -> String {
        join!(&self.base_url, id)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, id: &str) -> Result<String> {
        let url = self.url_for(id);
        debug!(%url, "GET");
        let http = |source| Error::Http { id: s!(id), source };
        self.client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(http)
    }
}
