//! Page surfaces
//!
//! The named UI regions the behaviors operate on, resolved once at
//! bootstrap. Every surface is optional; a missing element disables the
//! dependent behavior and nothing else.

use pagekit_dom::{Document, NodeId};

/// Resolved interactive regions of the page
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSurfaces {
    pub desktop_search: Option<NodeId>,
    pub desktop_suggestions: Option<NodeId>,
    pub mobile_search: Option<NodeId>,
    pub mobile_suggestions: Option<NodeId>,
    pub hamburger: Option<NodeId>,
    pub mobile_menu: Option<NodeId>,
    pub close_menu: Option<NodeId>,
    pub sidebar: Option<NodeId>,
    pub sidebar_toggle: Option<NodeId>,
    pub close_sidebar: Option<NodeId>,
    pub header: Option<NodeId>,
}

impl PageSurfaces {
    /// Resolve the conventional element ids
    pub fn resolve(doc: &Document) -> Self {
        Self {
            desktop_search: doc.get_element_by_id("desktopSearch"),
            desktop_suggestions: doc.get_element_by_id("desktopSuggestions"),
            mobile_search: doc.get_element_by_id("mobileSearch"),
            mobile_suggestions: doc.get_element_by_id("mobileSuggestions"),
            hamburger: doc.get_element_by_id("hamburger"),
            mobile_menu: doc.get_element_by_id("mobileMenu"),
            close_menu: doc.get_element_by_id("closeMenu"),
            sidebar: doc.get_element_by_id("sidebar"),
            sidebar_toggle: doc.get_element_by_id("sidebarToggle"),
            close_sidebar: doc.get_element_by_id("closeSidebar"),
            header: doc.get_element_by_id("header"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tolerates_missing_ids() {
        let mut doc = Document::default();
        let root = doc.root();
        let header = doc.append_element_with_id(root, "header", "header");

        let surfaces = PageSurfaces::resolve(&doc);
        assert_eq!(surfaces.header, Some(header));
        assert_eq!(surfaces.sidebar, None);
        assert_eq!(surfaces.desktop_search, None);
    }
}
