//! Fragment Loader
//!
//! Concurrent, failure-isolated fragment fetching.

use std::sync::Arc;

use crate::{Fetch, FetchError, Fragment, FragmentResult};

/// Loads fragments over a transport
///
/// Every load settles: failures become part of the result, never an error
/// returned to the caller.
#[derive(Clone)]
pub struct FragmentLoader {
    fetcher: Arc<dyn Fetch>,
}

impl FragmentLoader {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self { fetcher }
    }

    /// Load one fragment
    ///
    /// A non-2xx status counts as failure, same as a transport error.
    pub async fn load(&self, fragment: Fragment) -> FragmentResult {
        let fetcher = Arc::clone(&self.fetcher);
        let path = fragment.path.clone();

        let outcome = smol::unblock(move || {
            let response = fetcher.get(&path)?;
            if !response.ok() {
                return Err(FetchError::Http {
                    status: response.status,
                });
            }
            Ok(response.body)
        })
        .await;

        if let Err(err) = &outcome {
            tracing::error!("failed to load fragment {}: {err}", fragment.path);
        }

        FragmentResult { fragment, outcome }
    }

    /// Load every fragment concurrently and collect all results, in input
    /// order
    ///
    /// One fragment's failure neither prevents nor delays its siblings.
    pub async fn load_all(&self, fragments: &[Fragment]) -> Vec<FragmentResult> {
        let tasks: Vec<_> = fragments
            .iter()
            .cloned()
            .map(|fragment| {
                let loader = self.clone();
                smol::spawn(async move { loader.load(fragment).await })
            })
            .collect();

        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            results.push(task.await);
        }
        results
    }
}
