//! Document - high-level page API

use crate::{DomTree, NodeId};

/// A page document
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Root element (body)
    root: NodeId,
}

impl Document {
    /// Create a new document with an empty body
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();
        let root = tree.create_element("body");
        Self {
            tree,
            url: url.to_string(),
            root,
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Root element
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_element_with_id(self.root, id)
    }

    fn find_element_with_id(&self, start: NodeId, target_id: &str) -> Option<NodeId> {
        for node_id in self.tree.children(start) {
            if let Some(elem) = self.tree.get(node_id).and_then(|n| n.as_element()) {
                if elem.id.as_deref() == Some(target_id) {
                    return Some(node_id);
                }
            }
            // Recurse into children
            if let Some(found) = self.find_element_with_id(node_id, target_id) {
                return Some(found);
            }
        }
        None
    }

    /// Create an element and append it to a parent
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.tree.create_element(tag);
        self.tree.append_child(parent, node);
        node
    }

    /// Create an element with an id attribute and append it to a parent
    pub fn append_element_with_id(&mut self, parent: NodeId, tag: &str, id: &str) -> NodeId {
        let node = self.tree.create_element_with_id(tag, id);
        self.tree.append_child(parent, node);
        node
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
