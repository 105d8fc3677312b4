//! DOM Tree (arena-based allocation)

use crate::{Node, NodeId};

/// Arena-based DOM tree
///
/// Detached nodes stay in the arena; slots are never reclaimed during a
/// page session.
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new empty DOM tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached element node with an id attribute
    pub fn create_element_with_id(&mut self, tag: &str, id: &str) -> NodeId {
        let node_id = self.create_element(tag);
        if let Some(elem) = self.nodes[node_id.0 as usize].as_element_mut() {
            elem.id = Some(id.to_string());
        }
        node_id
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content.to_string()))
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child to a parent's child list
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }

        let prev_last = self.nodes[parent.0 as usize].last_child;
        {
            let child_node = &mut self.nodes[child.0 as usize];
            child_node.parent = parent;
            child_node.prev_sibling = prev_last;
            child_node.next_sibling = NodeId::NONE;
        }
        if prev_last.is_valid() {
            self.nodes[prev_last.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        self.nodes[parent.0 as usize].last_child = child;
    }

    /// Detach every child of a node (innerHTML = "")
    pub fn clear_children(&mut self, parent: NodeId) {
        let Some(node) = self.get(parent) else {
            return;
        };
        let mut child = node.first_child;
        while child.is_valid() {
            let next = self.nodes[child.0 as usize].next_sibling;
            let child_node = &mut self.nodes[child.0 as usize];
            child_node.parent = NodeId::NONE;
            child_node.prev_sibling = NodeId::NONE;
            child_node.next_sibling = NodeId::NONE;
            child = next;
        }
        let parent_node = &mut self.nodes[parent.0 as usize];
        parent_node.first_child = NodeId::NONE;
        parent_node.last_child = NodeId::NONE;
    }

    /// Iterate direct children, in document order
    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.get(parent).map_or(NodeId::NONE, |n| n.first_child);
        ChildIds { tree: self, next: first }
    }

    /// Parent of a node, if attached
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.get(node)?.parent;
        parent.is_valid().then_some(parent)
    }

    /// Walk from a node up to the root (the node itself excluded)
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        Ancestors { tree: self, current: node }
    }

    /// Check whether `node` is `ancestor` or one of its descendants
    ///
    /// Same containment rule as Node.contains().
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !ancestor.is_valid() || !node.is_valid() {
            return false;
        }
        if ancestor == node {
            return true;
        }
        self.ancestors(node).any(|a| a == ancestor)
    }

    /// Nearest node (self or ancestor) carrying any of the given classes
    pub fn closest_with_class(&self, node: NodeId, classes: &[&str]) -> Option<NodeId> {
        let mut current = node;
        while current.is_valid() {
            if let Some(elem) = self.get(current).and_then(|n| n.as_element()) {
                if classes.iter().any(|c| elem.has_class(c)) {
                    return Some(current);
                }
            }
            current = self.get(current)?.parent;
        }
        None
    }

    /// First descendant with the given tag, in document order
    pub fn find_descendant_by_tag(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        for child in self.children(root) {
            if let Some(elem) = self.get(child).and_then(|n| n.as_element()) {
                if elem.tag == tag {
                    return Some(child);
                }
            }
            if let Some(found) = self.find_descendant_by_tag(child, tag) {
                return Some(found);
            }
        }
        None
    }

    // ------------------------------------------------------------------
    // Class helpers (no-ops on missing or non-element nodes)
    // ------------------------------------------------------------------

    /// Check for a class on an element
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_class(class))
    }

    /// Add a class to an element
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(elem) = self.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.add_class(class);
        }
    }

    /// Remove a class from an element
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(elem) = self.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.remove_class(class);
        }
    }

    /// Force a class on or off
    pub fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        if let Some(elem) = self.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.set_class(class, on);
        }
    }

    // ------------------------------------------------------------------
    // Input value helpers
    // ------------------------------------------------------------------

    /// Current value of an input-like element
    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.get(node)?.as_element()?.value.as_deref()
    }

    /// Set the value of an input-like element
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(elem) = self.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.value = Some(value.to_string());
        }
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Replace a node's content with raw markup, stored verbatim
    pub fn set_markup(&mut self, node: NodeId, markup: &str) {
        if self.get(node).is_none() {
            return;
        }
        self.clear_children(node);
        let text = self.create_text(markup);
        self.append_child(node, text);
    }

    /// Serialize a node's content back to markup
    pub fn markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(node) {
            self.serialize(child, &mut out);
        }
        out
    }

    fn serialize(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.get(node) else {
            return;
        };
        match n.as_element() {
            Some(elem) => {
                out.push('<');
                out.push_str(&elem.tag);
                if let Some(id) = &elem.id {
                    out.push_str(&format!(" id=\"{id}\""));
                }
                if !elem.classes.is_empty() {
                    out.push_str(&format!(" class=\"{}\"", elem.classes.join(" ")));
                }
                out.push('>');
                for child in self.children(node) {
                    self.serialize(child, out);
                }
                out.push_str(&format!("</{}>", elem.tag));
            }
            None => {
                if let Some(text) = n.as_text() {
                    out.push_str(text);
                }
            }
        }
    }

    /// Visible text of a subtree: text nodes concatenated with any markup
    /// tags stripped (textContent over raw-markup storage)
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.get(node) else {
            return;
        };
        if let Some(text) = n.as_text() {
            out.push_str(&strip_tags(text));
        }
        for child in self.children(node) {
            self.collect_text(child, out);
        }
    }
}

/// Strip markup tags from raw text, keeping the character data
fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

struct ChildIds<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for ChildIds<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.get(current).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(current)
    }
}

struct Ancestors<'a> {
    tree: &'a DomTree,
    current: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let parent = self.tree.get(self.current)?.parent;
        if !parent.is_valid() {
            return None;
        }
        self.current = parent;
        Some(parent)
    }
}
