//! Overlay panels
//!
//! Open/close state for the mobile menu and the sidebar.

use pagekit_dom::{Document, NodeId, Viewport};

/// Class marking a panel open
const OPEN: &str = "open";

/// A togglable overlay region
///
/// Every element reference is optional; a missing one disables the
/// dependent transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panel {
    /// The panel element
    pub surface: Option<NodeId>,
    /// Control that opens the panel
    pub open_control: Option<NodeId>,
    /// Control that closes the panel
    pub close_control: Option<NodeId>,
    /// Outside clicks dismiss only at or below this viewport width
    pub dismiss_max_width: Option<f64>,
}

impl Panel {
    /// Open the panel (idempotent)
    pub fn open(&self, doc: &mut Document) {
        if let Some(surface) = self.surface {
            doc.tree_mut().add_class(surface, OPEN);
        }
    }

    /// Close the panel (idempotent)
    pub fn close(&self, doc: &mut Document) {
        if let Some(surface) = self.surface {
            doc.tree_mut().remove_class(surface, OPEN);
        }
    }

    /// Check the panel's open state
    pub fn is_open(&self, doc: &Document) -> bool {
        self.surface.is_some_and(|s| doc.tree().has_class(s, OPEN))
    }

    /// Document-level dismissal rule
    ///
    /// Closes the panel when the click target sits outside both the panel
    /// and its open control. With a `dismiss_max_width`, wider viewports
    /// ignore outside clicks entirely.
    pub fn dismiss_on_outside_click(&self, doc: &mut Document, target: NodeId, viewport: &Viewport) {
        let Some(surface) = self.surface else {
            return;
        };
        if let Some(max) = self.dismiss_max_width {
            if viewport.width > max {
                return;
            }
        }

        let inside_panel = doc.tree().contains(surface, target);
        let inside_opener = self
            .open_control
            .is_some_and(|c| doc.tree().contains(c, target));
        if !inside_panel && !inside_opener {
            doc.tree_mut().remove_class(surface, OPEN);
        }
    }
}
