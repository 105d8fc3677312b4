//! pagekit demo - Main Entry Point
//!
//! Builds a page shell, bootstraps the fragments from a site base URL,
//! and walks the wired behaviors through a sample session.

use std::sync::Arc;

use anyhow::Result;
use pagekit_dom::{ClickEvent, Document, Viewport};
use pagekit_net::{FragmentLoader, HttpClient};
use pagekit_ui::{App, SiteConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8000/".to_string());
    let config = match std::env::args().nth(2) {
        Some(path) => SiteConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SiteConfig::default(),
    };

    tracing::info!("bootstrapping against {base}");

    let mut doc = page_shell(&base);
    let loader = FragmentLoader::new(Arc::new(HttpClient::new(&base)?));
    let mut app = smol::block_on(App::bootstrap(&mut doc, &loader, &config));

    for spec in &config.fragments {
        match doc.get_element_by_id(&spec.placeholder) {
            Some(node) => tracing::info!(
                "{}: {} bytes of markup",
                spec.placeholder,
                doc.tree().markup(node).len()
            ),
            None => tracing::warn!("{}: placeholder missing from shell", spec.placeholder),
        }
    }

    // Walk the behaviors through a sample session
    let viewport = Viewport::default();

    if let (Some(input), Some(surface)) =
        (app.surfaces().desktop_search, app.surfaces().desktop_suggestions)
    {
        app.handle_input(&mut doc, input, "java");
        let rendered: Vec<String> = doc
            .tree()
            .children(surface)
            .map(|row| doc.tree().text_content(row))
            .collect();
        tracing::info!("suggestions for \"java\": {rendered:?}");

        let first_row = doc.tree().children(surface).next();
        if let Some(row) = first_row {
            let mut click = ClickEvent::new(row);
            app.handle_click(&mut doc, &mut click, &viewport);
            tracing::info!("picked suggestion, input now {:?}", doc.tree().value(input));
        }
    }

    app.handle_scroll(&mut doc, 120.0);
    if let Some(header) = app.surfaces().header {
        tracing::info!(
            "header scrolled: {}",
            doc.tree().has_class(header, "scrolled")
        );
    }

    Ok(())
}

/// Build the static page shell: fragment placeholders plus the
/// interactive chrome the behaviors wire against
fn page_shell(url: &str) -> Document {
    let mut doc = Document::new(url);
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
