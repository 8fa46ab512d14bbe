//! Leptos UI components for the landing page.
//!
//! Every component is stateless: it reads the `'static` lists in
//! [`crate::content`] and lays them out. No component takes data from its
//! parent, so sibling order is the only thing the root decides.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── App
//!     ├── Navigation
//!     ├── main
//!     │   ├── Hero
//!     │   └── Features
//!     │       └── FeatureCard (x6)
//!     └── Footer
//!         └── FooterColumnView (x4)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use seagro_site::components::Hero;
//!
//! let html = view! { <Hero /> }.to_html();
//! assert!(html.contains("Connect. Learn. Grow."));
//! ```

mod document;
mod features;
mod footer;
mod hero;
mod icons;
mod navigation;

pub use document::{App, PageDocument};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::{Glyph, Icon};
pub use navigation::Navigation;
