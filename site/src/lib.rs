//! # seagro-site
//!
//! Leptos SSR renderer for the SeaGro landing page.
//!
//! The page is four stateless sections (navigation, hero, feature grid and
//! footer) built from `'static` content lists. Rendering is pure: the same
//! [`PageOptions`] always produce byte-identical HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use seagro_site::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Connect. Learn. Grow."));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - The static lists the page shows
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`types`] - Record shapes for future data-driven sections
//!
//! ## Leptos 0.8 SSR
//!
//! Output goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <App /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod styles;
pub mod types;

use components::{App, PageDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Default document title.
pub const DEFAULT_TITLE: &str = "SeaGro - Connect. Learn. Grow.";

/// How the document pulls in its stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StyleMode {
    /// Embed [`styles::PAGE_CSS`] in a `<style>` element
    #[default]
    Inline,
    /// Reference an external stylesheet by URL or relative path
    Linked(String),
}

/// Document-level settings around the page body.
///
/// # Example
///
/// ```rust
/// use seagro_site::{PageOptions, StyleMode};
///
/// let options = PageOptions {
///     style: StyleMode::Linked("styles.css".into()),
///     ..Default::default()
/// };
/// assert_eq!(options.lang, "en");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// `lang` attribute on `<html>`
    pub lang: String,
    /// Inline or linked CSS
    pub style: StyleMode,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: content::HERO.subheading.to_string(),
            lang: "en".to_string(),
            style: StyleMode::Inline,
        }
    }
}

/// Render the complete landing page as an HTML document.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use seagro_site::{render_page, PageOptions, StyleMode};
///
/// let options = PageOptions {
///     style: StyleMode::Linked("styles.css".into()),
///     ..Default::default()
/// };
/// let html = render_page(&options);
/// assert!(html.contains(r#"href="styles.css""#));
/// ```
pub fn render_page(options: &PageOptions) -> String {
    let doc = view! { <PageDocument options=options.clone() /> };

    // Leptos doesn't include DOCTYPE, so we add it
    let html = format!("<!DOCTYPE html>\n{}", doc.to_html());
    tracing::debug!(bytes = html.len(), "rendered landing page");
    html
}

/// Render only the page body (no `<html>`/`<head>`), for embedding in
/// another document.
pub fn render_fragment() -> String {
    view! { <App /> }.to_html()
}
