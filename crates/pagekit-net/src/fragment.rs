//! Fragments
//!
//! Shared markup snippets resolved into placeholder regions at load time.

use crate::FetchError;

/// A (placeholder-id, source-path) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Id of the placeholder element the markup lands in
    pub placeholder: String,
    /// Path fetched for the markup, relative to the site base
    pub path: String,
}

impl Fragment {
    pub fn new(placeholder: &str, path: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            path: path.to_string(),
        }
    }
}

/// Settled outcome of one fragment load
///
/// Failure is a value here, not an error path: callers always get markup
/// to inject.
#[derive(Debug, Clone)]
pub struct FragmentResult {
    pub fragment: Fragment,
    pub outcome: Result<String, FetchError>,
}

impl FragmentResult {
    /// Check if the fragment body arrived
    pub fn is_loaded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Markup to inject: the fetched body verbatim, or an inline error
    /// message naming the failed path
    pub fn markup(&self) -> String {
        match &self.outcome {
            Ok(body) => body.clone(),
            Err(_) => format!(
                "<p style=\"color:red;padding:20px;\">Failed to load {}</p>",
                self.fragment.path
            ),
        }
    }
}
