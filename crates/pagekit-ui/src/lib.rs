//! pagekit UI behaviors
//!
//! Search suggestions, overlay panels, header scroll state, and the
//! bootstrap wiring that ties them to a page.

mod app;
mod config;
mod keywords;
mod panel;
mod scroll;
mod suggest;
mod surfaces;

pub use app::App;
pub use config::{FragmentSpec, SiteConfig};
pub use keywords::{DEFAULT_KEYWORDS, KeywordStore};
pub use panel::Panel;
pub use scroll::HeaderScrollEffect;
pub use suggest::{SuggestionRenderer, highlight};
pub use surfaces::PageSurfaces;
