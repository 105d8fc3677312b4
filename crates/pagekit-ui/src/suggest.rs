//! Search suggestions
//!
//! Filters the keyword store and renders matches into a suggestion
//! surface with the query highlighted.

use pagekit_dom::{Document, NodeId};
use regex::RegexBuilder;

use crate::KeywordStore;

/// Class marking a suggestion surface visible
const SHOW: &str = "show";

/// Renders keyword matches into a suggestion surface
#[derive(Debug, Clone)]
pub struct SuggestionRenderer {
    store: KeywordStore,
    limit: usize,
}

impl SuggestionRenderer {
    pub fn new(store: KeywordStore, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Render matches for `query` into `surface`, returning the row nodes
    ///
    /// A blank query, or one matching nothing, empties and hides the
    /// surface. Never fails; a missing surface is a no-op.
    pub fn render(&self, doc: &mut Document, query: &str, surface: NodeId) -> Vec<NodeId> {
        if doc.tree().get(surface).is_none() {
            return Vec::new();
        }
        if query.trim().is_empty() {
            Self::clear(doc, surface);
            return Vec::new();
        }

        let matches: Vec<String> = self
            .store
            .matching(query)
            .take(self.limit)
            .map(str::to_string)
            .collect();
        if matches.is_empty() {
            Self::clear(doc, surface);
            return Vec::new();
        }

        doc.tree_mut().clear_children(surface);
        let mut rows = Vec::with_capacity(matches.len());
        for keyword in &matches {
            let markup = highlight(keyword, query);
            let row = doc.tree_mut().create_element("div");
            let text = doc.tree_mut().create_text(&markup);
            doc.tree_mut().append_child(row, text);
            doc.tree_mut().append_child(surface, row);
            rows.push(row);
        }
        doc.tree_mut().add_class(surface, SHOW);
        rows
    }

    /// Hide a surface without touching its content
    pub fn hide(doc: &mut Document, surface: NodeId) {
        doc.tree_mut().remove_class(surface, SHOW);
    }

    /// Hide and empty a surface
    pub fn clear(doc: &mut Document, surface: NodeId) {
        doc.tree_mut().remove_class(surface, SHOW);
        doc.tree_mut().clear_children(surface);
    }
}

/// Wrap every case-insensitive occurrence of `query` inside `keyword`
/// in strong emphasis
///
/// The query is escaped before pattern use, so metacharacters in user
/// input match literally.
pub fn highlight(keyword: &str, query: &str) -> String {
    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return keyword.to_string();
    };
    pattern
        .replace_all(keyword, |caps: &regex::Captures<'_>| {
            format!("<strong>{}</strong>", &caps[0])
        })
        .into_owned()
}
