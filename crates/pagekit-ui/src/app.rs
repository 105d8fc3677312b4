//! Application wiring
//!
//! Bootstraps fragments into the page, resolves the surfaces once, and
//! routes input, click, and scroll events to the behaviors.

use pagekit_dom::{ClickEvent, Document, NodeId, Viewport};
use pagekit_net::{Fragment, FragmentLoader, FragmentResult};

use crate::{
    HeaderScrollEffect, KeywordStore, PageSurfaces, Panel, SiteConfig, SuggestionRenderer,
};

/// Classes identifying a search container enclosing an input and its
/// suggestion surface
const SEARCH_CONTAINERS: [&str; 2] = ["search-box", "mobile-search-top"];

/// The wired page application
///
/// Constructed by [`App::bootstrap`] after every fragment has settled;
/// wiring happens exactly once per page session.
pub struct App {
    surfaces: PageSurfaces,
    suggestions: SuggestionRenderer,
    menu: Panel,
    sidebar: Panel,
    header_effect: HeaderScrollEffect,
    desktop_rows: Vec<NodeId>,
    mobile_rows: Vec<NodeId>,
}

impl App {
    /// Load every configured fragment concurrently, wait for all of them
    /// to settle, inject the outcomes, then wire the behaviors
    pub async fn bootstrap(doc: &mut Document, loader: &FragmentLoader, config: &SiteConfig) -> App {
        let fragments: Vec<Fragment> = config.fragments.iter().map(Fragment::from).collect();
        let results = loader.load_all(&fragments).await;
        for result in &results {
            Self::inject(doc, result);
        }
        Self::wire(doc, config)
    }

    fn inject(doc: &mut Document, result: &FragmentResult) {
        let Some(placeholder) = doc.get_element_by_id(&result.fragment.placeholder) else {
            return;
        };
        doc.tree_mut().set_markup(placeholder, &result.markup());
    }

    /// Resolve the surfaces and construct the wired app
    ///
    /// Split out of [`App::bootstrap`] for pages that carry their chrome
    /// statically.
    pub fn wire(doc: &Document, config: &SiteConfig) -> App {
        let surfaces = PageSurfaces::resolve(doc);
        App {
            suggestions: SuggestionRenderer::new(
                KeywordStore::new(config.keywords.clone()),
                config.suggestion_limit,
            ),
            menu: Panel {
                surface: surfaces.mobile_menu,
                open_control: surfaces.hamburger,
                close_control: surfaces.close_menu,
                dismiss_max_width: None,
            },
            sidebar: Panel {
                surface: surfaces.sidebar,
                open_control: surfaces.sidebar_toggle,
                close_control: surfaces.close_sidebar,
                dismiss_max_width: Some(config.sidebar_breakpoint),
            },
            header_effect: HeaderScrollEffect::new(surfaces.header, config.scroll_threshold),
            surfaces,
            desktop_rows: Vec::new(),
            mobile_rows: Vec::new(),
        }
    }

    /// The resolved surfaces
    pub fn surfaces(&self) -> &PageSurfaces {
        &self.surfaces
    }

    /// The mobile menu panel
    pub fn menu(&self) -> &Panel {
        &self.menu
    }

    /// The sidebar panel
    pub fn sidebar(&self) -> &Panel {
        &self.sidebar
    }

    /// Input in either search field re-renders its suggestion surface
    pub fn handle_input(&mut self, doc: &mut Document, input: NodeId, value: &str) {
        doc.tree_mut().set_value(input, value);
        if Some(input) == self.surfaces.desktop_search {
            if let Some(surface) = self.surfaces.desktop_suggestions {
                self.desktop_rows = self.suggestions.render(doc, value, surface);
            }
        } else if Some(input) == self.surfaces.mobile_search {
            if let Some(surface) = self.surfaces.mobile_suggestions {
                self.mobile_rows = self.suggestions.render(doc, value, surface);
            }
        }
    }

    /// Route a click: designated controls first, then the document-level
    /// handler unless propagation was stopped
    pub fn handle_click(&mut self, doc: &mut Document, event: &mut ClickEvent, viewport: &Viewport) {
        let target = event.target;

        if self.hits(doc, self.surfaces.hamburger, target) {
            event.stop_propagation();
            self.menu.open(doc);
        } else if self.hits(doc, self.surfaces.close_menu, target) {
            self.menu.close(doc);
        } else if self.hits(doc, self.surfaces.sidebar_toggle, target) {
            event.stop_propagation();
            self.sidebar.open(doc);
        } else if self.hits(doc, self.surfaces.close_sidebar, target) {
            self.sidebar.close(doc);
        } else if let Some(row) = self.hit_row(doc, target) {
            self.activate_row(doc, row);
        }

        if event.propagation_stopped() {
            return;
        }
        self.document_click(doc, target, viewport);
    }

    /// Scroll derives the header state
    pub fn handle_scroll(&mut self, doc: &mut Document, offset: f64) {
        self.header_effect.on_scroll(doc, offset);
    }

    fn hits(&self, doc: &Document, control: Option<NodeId>, target: NodeId) -> bool {
        control.is_some_and(|c| doc.tree().contains(c, target))
    }

    fn hit_row(&self, doc: &Document, target: NodeId) -> Option<NodeId> {
        self.desktop_rows
            .iter()
            .chain(self.mobile_rows.iter())
            .copied()
            .find(|row| doc.tree().contains(*row, target))
    }

    /// Clicking a suggestion row writes its plain text into the enclosing
    /// search container's input and hides the surface
    fn activate_row(&mut self, doc: &mut Document, row: NodeId) {
        let text = doc.tree().text_content(row).trim().to_string();

        if let Some(surface) = doc.tree().parent(row) {
            if let Some(container) = doc.tree().closest_with_class(surface, &SEARCH_CONTAINERS) {
                if let Some(input) = doc.tree().find_descendant_by_tag(container, "input") {
                    doc.tree_mut().set_value(input, &text);
                }
            }
            SuggestionRenderer::hide(doc, surface);
        }
        tracing::debug!("search: {text}");
    }

    /// The single shared document-level click handler
    fn document_click(&mut self, doc: &mut Document, target: NodeId, viewport: &Viewport) {
        // Clicks landing outside any search container dismiss both
        // suggestion surfaces
        if doc.tree().closest_with_class(target, &SEARCH_CONTAINERS).is_none() {
            for surface in [
                self.surfaces.desktop_suggestions,
                self.surfaces.mobile_suggestions,
            ]
            .into_iter()
            .flatten()
            {
                SuggestionRenderer::hide(doc, surface);
            }
        }

        self.menu.dismiss_on_outside_click(doc, target, viewport);
        self.sidebar.dismiss_on_outside_click(doc, target, viewport);
    }
}
