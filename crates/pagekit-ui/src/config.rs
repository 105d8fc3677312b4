//! Site configuration
//!
//! Keyword list, fragment table, and behavior thresholds. The defaults
//! reproduce the stock documentation page.

use pagekit_net::Fragment;
use serde::Deserialize;

use crate::DEFAULT_KEYWORDS;
use crate::scroll::DEFAULT_SCROLL_THRESHOLD;

/// Default viewport width at or below which sidebar outside-click
/// dismissal applies
pub const DEFAULT_SIDEBAR_BREAKPOINT: f64 = 992.0;

/// Default cap on rendered suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Site behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Search keywords, in suggestion order
    pub keywords: Vec<String>,
    /// Fragments injected at bootstrap
    pub fragments: Vec<FragmentSpec>,
    /// Most suggestions shown at once
    pub suggestion_limit: usize,
    /// Sidebar outside-click dismissal breakpoint
    pub sidebar_breakpoint: f64,
    /// Header scroll threshold
    pub scroll_threshold: f64,
}

/// One fragment table entry
#[derive(Debug, Clone, Deserialize)]
pub struct FragmentSpec {
    pub placeholder: String,
    pub path: String,
}

impl From<&FragmentSpec> for Fragment {
    fn from(spec: &FragmentSpec) -> Self {
        Fragment::new(&spec.placeholder, &spec.path)
    }
}

impl SiteConfig {
    /// Parse a configuration from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            fragments: vec![
                FragmentSpec {
                    placeholder: "header-container".to_string(),
                    path: "/header.html".to_string(),
                },
                FragmentSpec {
                    placeholder: "sidebar-container".to_string(),
                    path: "/sidebar.html".to_string(),
                },
                FragmentSpec {
                    placeholder: "footer-container".to_string(),
                    path: "/footer.html".to_string(),
                },
            ],
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            sidebar_breakpoint: DEFAULT_SIDEBAR_BREAKPOINT,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = SiteConfig::default();
        assert_eq!(config.keywords.len(), 19);
        assert_eq!(config.fragments.len(), 3);
        assert_eq!(config.fragments[0].placeholder, "header-container");
        assert_eq!(config.suggestion_limit, 8);
        assert_eq!(config.sidebar_breakpoint, 992.0);
        assert_eq!(config.scroll_threshold, 50.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"suggestion_limit": 5}"#).unwrap();
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.keywords.len(), 19);
        assert_eq!(config.sidebar_breakpoint, 992.0);
    }

    #[test]
    fn test_fragment_spec_conversion() {
        let spec = FragmentSpec {
            placeholder: "x".to_string(),
            path: "/x.html".to_string(),
        };
        assert_eq!(Fragment::from(&spec), Fragment::new("x", "/x.html"));
    }
}
