//! Content documents fetched over HTTP.

use async_trait::async_trait;
use folio_core::{Error, Result};

use crate::source::ContentSource;

/// Fetches documents from `<base_url>/<name>`.
///
/// Only successful (2xx) responses count as a document; any other status is
/// treated as "not available".
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source for `base_url` with a default client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a source that reuses an existing client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// URL of the document called `name`.
    pub fn url_for(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<Option<String>> {
        let url = self.url_for(name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::http_with_source(format!("GET {url} failed"), e))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("GET {url} returned {status}");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::http_with_source(format!("Reading body of {url} failed"), e))?;
        Ok(Some(body))
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
