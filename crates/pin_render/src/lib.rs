//! HTML for the news pages. Business logic lives in `pin_listing`; this crate
//! turns its views into markup, escaping every interpolated value.

pub mod content;
pub mod dates;
pub mod links;
pub mod models;
pub mod pages;

pub use content::clean_html_content;
pub use links::{LinkStyle, SlugTable};
pub use models::{CardModel, Panel, PanelKind};
pub use pages::PageRenderer;
