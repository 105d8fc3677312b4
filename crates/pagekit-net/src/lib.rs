//! pagekit networking
//!
//! HTTP transport and fragment loading.

mod client;
mod fragment;
mod loader;

pub use client::{Fetch, HttpClient};
pub use fragment::{Fragment, FragmentResult};
pub use loader::FragmentLoader;
pub use url::Url;

/// HTTP response reduced to what fragment injection needs
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    /// Check if response is OK (2xx)
    pub fn ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Network error
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
