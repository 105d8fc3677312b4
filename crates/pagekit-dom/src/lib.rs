//! pagekit DOM - page model
//!
//! Arena tree holding just the structure the site behaviors consume:
//! tags, ids, class lists, input values, text and raw markup.

mod document;
mod events;
mod node;
mod tree;

pub use document::Document;
pub use events::{ClickEvent, Viewport};
pub use node::{ElementData, Node, NodeData, TextData};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id refers to a real arena slot
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }
}
