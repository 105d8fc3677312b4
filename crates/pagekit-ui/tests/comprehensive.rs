//! Comprehensive tests for pagekit-ui
//!
//! Full bootstrap and wiring walkthrough against an in-memory page and a
//! stub transport.

use std::collections::HashMap;
use std::sync::Arc;

use pagekit_dom::{ClickEvent, Document, NodeId, Viewport};
use pagekit_net::{Fetch, FetchError, FetchResponse, FragmentLoader};
use pagekit_ui::{App, SiteConfig};

struct StubSite {
    pages: HashMap<String, FetchResponse>,
}

impl StubSite {
    fn stock() -> Self {
        let mut pages = HashMap::new();
        for (path, body) in [
            ("/header.html", "<header class=\"site\">header</header>"),
            ("/sidebar.html", "<nav>sidebar</nav>"),
            ("/footer.html", "<footer>footer</footer>"),
        ] {
            pages.insert(
                path.to_string(),
                FetchResponse {
                    status: 200,
                    body: body.to_string(),
                },
            );
        }
        Self { pages }
    }

    fn with_status(mut self, path: &str, status: u16) -> Self {
        self.pages.insert(
            path.to_string(),
            FetchResponse {
                status,
                body: String::new(),
            },
        );
        self
    }
}

impl Fetch for StubSite {
    fn get(&self, path: &str) -> Result<FetchResponse, FetchError> {
        self.pages
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::Network("connection refused".to_string()))
    }
}

/// The static page shell: placeholders plus interactive chrome
fn page_shell() -> Document {
    let mut doc = Document::new("https://docs.example/");
    let root = doc.root();

    let header = doc.append_element_with_id(root, "header", "header");
    let search_box = doc.append_element(header, "div");
    doc.tree_mut().add_class(search_box, "search-box");
    doc.append_element_with_id(search_box, "input", "desktopSearch");
    doc.append_element_with_id(search_box, "div", "desktopSuggestions");
    doc.append_element_with_id(header, "button", "hamburger");

    let menu = doc.append_element_with_id(root, "nav", "mobileMenu");
    doc.append_element_with_id(menu, "button", "closeMenu");
    let mobile_search = doc.append_element(menu, "div");
    doc.tree_mut().add_class(mobile_search, "mobile-search-top");
    doc.append_element_with_id(mobile_search, "input", "mobileSearch");
    doc.append_element_with_id(mobile_search, "div", "mobileSuggestions");

    doc.append_element_with_id(root, "button", "sidebarToggle");
    let sidebar = doc.append_element_with_id(root, "aside", "sidebar");
    doc.append_element_with_id(sidebar, "button", "closeSidebar");

    for id in ["header-container", "sidebar-container", "footer-container"] {
        doc.append_element_with_id(root, "div", id);
    }

    doc
}

fn bootstrap(doc: &mut Document, site: StubSite) -> App {
    let loader = FragmentLoader::new(Arc::new(site));
    smol::block_on(App::bootstrap(doc, &loader, &SiteConfig::default()))
}

fn placeholder_markup(doc: &Document, id: &str) -> String {
    let node = doc.get_element_by_id(id).unwrap();
    doc.tree().markup(node)
}

// ============================================================================
// BOOTSTRAP & FRAGMENTS
// ============================================================================

#[test]
fn test_bootstrap_injects_all_fragments() {
    let mut doc = page_shell();
    bootstrap(&mut doc, StubSite::stock());

    assert_eq!(
        placeholder_markup(&doc, "header-container"),
        "<header class=\"site\">header</header>"
    );
    assert_eq!(placeholder_markup(&doc, "sidebar-container"), "<nav>sidebar</nav>");
    assert_eq!(placeholder_markup(&doc, "footer-container"), "<footer>footer</footer>");
}

#[test]
fn test_fragment_failure_is_isolated() {
    let mut doc = page_shell();
    bootstrap(&mut doc, StubSite::stock().with_status("/sidebar.html", 404));

    let sidebar = placeholder_markup(&doc, "sidebar-container");
    assert!(sidebar.contains("Failed to load /sidebar.html"));
    // Siblings load normally
    assert_eq!(
        placeholder_markup(&doc, "header-container"),
        "<header class=\"site\">header</header>"
    );
    assert_eq!(placeholder_markup(&doc, "footer-container"), "<footer>footer</footer>");
}

#[test]
fn test_bootstrap_without_placeholders_still_wires() {
    let mut doc = Document::new("https://docs.example/");
    let root = doc.root();
    doc.append_element_with_id(root, "header", "header");

    let app = bootstrap(&mut doc, StubSite::stock());
    assert!(app.surfaces().header.is_some());
    assert!(app.surfaces().sidebar.is_none());
}

// ============================================================================
// SUGGESTIONS
// ============================================================================

fn rendered_rows(doc: &Document, surface: NodeId) -> Vec<String> {
    doc.tree()
        .children(surface)
        .map(|row| doc.tree().text_content(row))
        .collect()
}

#[test]
fn test_blank_and_whitespace_queries_hide_surface() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let input = app.surfaces().desktop_search.unwrap();
    let surface = app.surfaces().desktop_suggestions.unwrap();

    for query in ["", "   ", "\t"] {
        app.handle_input(&mut doc, input, query);
        assert!(!doc.tree().has_class(surface, "show"), "query {query:?}");
        assert_eq!(doc.tree().markup(surface), "");
    }
}

#[test]
fn test_suggestion_count_is_capped() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let input = app.surfaces().desktop_search.unwrap();
    let surface = app.surfaces().desktop_suggestions.unwrap();

    // "o" hits more than eight of the stock keywords
    app.handle_input(&mut doc, input, "o");
    assert_eq!(rendered_rows(&doc, surface).len(), 8);

    app.handle_input(&mut doc, input, "java");
    assert_eq!(rendered_rows(&doc, surface), vec!["Java", "JavaScript"]);
}

#[test]
fn test_metacharacter_query_matches_literally() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let input = app.surfaces().desktop_search.unwrap();
    let surface = app.surfaces().desktop_suggestions.unwrap();

    // No stock keyword contains a literal "c++"; nothing may match, and
    // nothing may blow up interpreting "+" as pattern syntax
    app.handle_input(&mut doc, input, "c++");
    assert!(rendered_rows(&doc, surface).is_empty());
    assert!(!doc.tree().has_class(surface, "show"));
}

#[test]
fn test_highlight_markup_in_rendered_row() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let input = app.surfaces().desktop_search.unwrap();
    let surface = app.surfaces().desktop_suggestions.unwrap();

    app.handle_input(&mut doc, input, "script");
    let row = doc.tree().children(surface).next().unwrap();
    assert_eq!(doc.tree().markup(row), "Java<strong>Script</strong>");
}

#[test]
fn test_row_click_populates_mobile_input() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let input = app.surfaces().mobile_search.unwrap();
    let surface = app.surfaces().mobile_suggestions.unwrap();

    app.handle_input(&mut doc, input, "sql");
    let row = doc.tree().children(surface).next().unwrap();

    let mut click = ClickEvent::new(row);
    app.handle_click(&mut doc, &mut click, &Viewport::default());

    assert_eq!(doc.tree().value(input), Some("SQL"));
    assert!(!doc.tree().has_class(surface, "show"));
}

#[test]
fn test_click_outside_search_hides_suggestions() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let input = app.surfaces().desktop_search.unwrap();
    let surface = app.surfaces().desktop_suggestions.unwrap();
    let root = doc.root();
    let outside = doc.append_element(root, "div");

    app.handle_input(&mut doc, input, "python");
    assert!(doc.tree().has_class(surface, "show"));

    let mut click = ClickEvent::new(outside);
    app.handle_click(&mut doc, &mut click, &Viewport::default());
    assert!(!doc.tree().has_class(surface, "show"));
}

#[test]
fn test_click_inside_search_keeps_suggestions() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let input = app.surfaces().desktop_search.unwrap();
    let surface = app.surfaces().desktop_suggestions.unwrap();

    app.handle_input(&mut doc, input, "python");
    let mut click = ClickEvent::new(input);
    app.handle_click(&mut doc, &mut click, &Viewport::default());

    assert!(doc.tree().has_class(surface, "show"));
}

// ============================================================================
// PANELS
// ============================================================================

#[test]
fn test_menu_open_close_cycle() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let hamburger = app.surfaces().hamburger.unwrap();
    let close_menu = app.surfaces().close_menu.unwrap();

    let mut open = ClickEvent::new(hamburger);
    app.handle_click(&mut doc, &mut open, &Viewport::default());
    assert!(app.menu().is_open(&doc));

    // Opening an already-open panel keeps it open
    let mut again = ClickEvent::new(hamburger);
    app.handle_click(&mut doc, &mut again, &Viewport::default());
    assert!(app.menu().is_open(&doc));

    let mut close = ClickEvent::new(close_menu);
    app.handle_click(&mut doc, &mut close, &Viewport::default());
    assert!(!app.menu().is_open(&doc));

    // Closing again stays closed
    let mut reclose = ClickEvent::new(close_menu);
    app.handle_click(&mut doc, &mut reclose, &Viewport::default());
    assert!(!app.menu().is_open(&doc));
}

#[test]
fn test_sidebar_breakpoint_rule() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let toggle = app.surfaces().sidebar_toggle.unwrap();
    let root = doc.root();
    let outside = doc.append_element(root, "div");

    let mut open = ClickEvent::new(toggle);
    app.handle_click(&mut doc, &mut open, &Viewport::new(1200.0, 800.0));
    assert!(app.sidebar().is_open(&doc));

    // Above the breakpoint, outside clicks leave the sidebar alone
    let mut wide = ClickEvent::new(outside);
    app.handle_click(&mut doc, &mut wide, &Viewport::new(1200.0, 800.0));
    assert!(app.sidebar().is_open(&doc));

    // At or below the breakpoint, they dismiss it
    let mut narrow = ClickEvent::new(outside);
    app.handle_click(&mut doc, &mut narrow, &Viewport::new(800.0, 600.0));
    assert!(!app.sidebar().is_open(&doc));
}

#[test]
fn test_panels_are_independent() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let hamburger = app.surfaces().hamburger.unwrap();
    let close_menu = app.surfaces().close_menu.unwrap();
    let toggle = app.surfaces().sidebar_toggle.unwrap();

    let mut open_menu = ClickEvent::new(hamburger);
    app.handle_click(&mut doc, &mut open_menu, &Viewport::default());
    let mut open_sidebar = ClickEvent::new(toggle);
    app.handle_click(&mut doc, &mut open_sidebar, &Viewport::default());
    assert!(app.menu().is_open(&doc));
    assert!(app.sidebar().is_open(&doc));

    let mut close = ClickEvent::new(close_menu);
    app.handle_click(&mut doc, &mut close, &Viewport::new(1200.0, 800.0));
    assert!(!app.menu().is_open(&doc));
    assert!(app.sidebar().is_open(&doc));
}

// ============================================================================
// SCROLL
// ============================================================================

#[test]
fn test_scroll_threshold_transitions() {
    let mut doc = page_shell();
    let mut app = bootstrap(&mut doc, StubSite::stock());
    let header = app.surfaces().header.unwrap();

    app.handle_scroll(&mut doc, 50.0);
    assert!(!doc.tree().has_class(header, "scrolled"));

    app.handle_scroll(&mut doc, 51.0);
    assert!(doc.tree().has_class(header, "scrolled"));

    app.handle_scroll(&mut doc, 0.0);
    assert!(!doc.tree().has_class(header, "scrolled"));
}
