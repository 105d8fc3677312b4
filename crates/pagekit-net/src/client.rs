//! HTTP transport
//!
//! Blocking reqwest client behind the Fetch seam.

use url::Url;

use crate::{FetchError, FetchResponse};

/// Transport seam for fragment fetching
///
/// Implementations run on blocking threads; they may block freely.
pub trait Fetch: Send + Sync {
    /// GET a path relative to the site base
    fn get(&self, path: &str) -> Result<FetchResponse, FetchError>;
}

/// reqwest-backed transport
pub struct HttpClient {
    client: reqwest::blocking::Client,
    base: Url,
}

impl HttpClient {
    /// Create a client rooted at a site base URL
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let client = reqwest::blocking::Client::builder()
            .user_agent("pagekit/0.1")
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client, base })
    }

    /// Site base URL
    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl Fetch for HttpClient {
    fn get(&self, path: &str) -> Result<FetchResponse, FetchError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        tracing::info!("HTTP GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(FetchResponse { status, body })
    }
}
