//! Header scroll effect
//!
//! Derives the header's scrolled state from the vertical offset.

use pagekit_dom::{Document, NodeId};

/// Class marking the header in its scrolled style
const SCROLLED: &str = "scrolled";

/// Default offset past which the header counts as scrolled
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Toggles the header's scrolled class from the scroll offset
#[derive(Debug, Clone, Copy)]
pub struct HeaderScrollEffect {
    /// The header element
    pub header: Option<NodeId>,
    /// Offset past which the scrolled state applies
    pub threshold: f64,
}

impl HeaderScrollEffect {
    pub fn new(header: Option<NodeId>, threshold: f64) -> Self {
        Self { header, threshold }
    }

    /// Recompute the state for the current offset
    ///
    /// Purely derived and idempotent; an offset exactly at the threshold
    /// does not count as scrolled.
    pub fn on_scroll(&self, doc: &mut Document, offset: f64) {
        let Some(header) = self.header else {
            return;
        };
        doc.tree_mut().set_class(header, SCROLLED, offset > self.threshold);
    }
}

impl Default for HeaderScrollEffect {
    fn default() -> Self {
        Self::new(None, DEFAULT_SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut doc = Document::default();
        let root = doc.root();
        let header = doc.append_element_with_id(root, "header", "header");
        let effect = HeaderScrollEffect::new(Some(header), DEFAULT_SCROLL_THRESHOLD);

        effect.on_scroll(&mut doc, 50.0);
        assert!(!doc.tree().has_class(header, "scrolled"));

        effect.on_scroll(&mut doc, 51.0);
        assert!(doc.tree().has_class(header, "scrolled"));

        effect.on_scroll(&mut doc, 0.0);
        assert!(!doc.tree().has_class(header, "scrolled"));
    }

    #[test]
    fn test_missing_header_is_noop() {
        let mut doc = Document::default();
        let effect = HeaderScrollEffect::default();
        effect.on_scroll(&mut doc, 500.0);
    }
}
