//! Inline SVG glyphs in the Lucide style.
//!
//! Every glyph is drawn on a 24×24 grid with a 2px round `currentColor`
//! stroke, so it picks up the text color of whatever wraps it. Glyphs are a
//! closed enum: referring to an icon that does not exist fails to compile.

use leptos::prelude::*;
use serde::Serialize;

/// A named vector icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// Hamburger menu (brand mark)
    Menu,
    /// House
    Home,
    /// Two people
    Users,
    /// Briefcase
    Briefcase,
    /// Open book
    BookOpen,
    /// Two people, rounded
    #[serde(rename = "users-2")]
    Users2,
    /// Bicycle
    Bike,
    /// Folded newspaper
    Newspaper,
    /// Speech bubble
    MessageSquare,
    /// Framed picture
    Image,
    /// Ticked checkbox
    CheckSquare,
    /// Compass rose (hero)
    Compass,
}

impl Glyph {
    /// Every glyph the page can draw.
    pub const ALL: [Self; 12] = [
        Self::Menu,
        Self::Home,
        Self::Users,
        Self::Briefcase,
        Self::BookOpen,
        Self::Users2,
        Self::Bike,
        Self::Newspaper,
        Self::MessageSquare,
        Self::Image,
        Self::CheckSquare,
        Self::Compass,
    ];

    /// Kebab-case icon name, also emitted as `data-icon` on the `<svg>`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Home => "home",
            Self::Users => "users",
            Self::Briefcase => "briefcase",
            Self::BookOpen => "book-open",
            Self::Users2 => "users-2",
            Self::Bike => "bike",
            Self::Newspaper => "newspaper",
            Self::MessageSquare => "message-square",
            Self::Image => "image",
            Self::CheckSquare => "check-square",
            Self::Compass => "compass",
        }
    }

    /// SVG path data (`d` attributes), one entry per stroke.
    ///
    /// Circles and rects from the upstream artwork are expressed as arcs so
    /// every glyph is a flat list of `<path>` elements.
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Self::Home => &[
                "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
                "M9 22V12h6v10",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Briefcase => &[
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            Self::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Self::Users2 => &[
                "M14 19a6 6 0 0 0-12 0",
                "M4 9a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 19a6 6 0 0 0-6-6 4 4 0 1 0 0-8",
            ],
            Self::Bike => &[
                "M15 17.5a3.5 3.5 0 1 0 7 0a3.5 3.5 0 1 0-7 0",
                "M2 17.5a3.5 3.5 0 1 0 7 0a3.5 3.5 0 1 0-7 0",
                "M14 5a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
                "M12 17.5V14l-3-3 4-3 2 3h2",
            ],
            Self::Newspaper => &[
                "M4 22h16a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v16a2 2 0 0 1-2 2Zm0 0a2 2 0 0 1-2-2v-9c0-1.1.9-2 2-2h2",
                "M18 14h-8",
                "M15 18h-5",
                "M10 6h8v4h-8V6Z",
            ],
            Self::MessageSquare => {
                &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"]
            }
            Self::Image => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M7 9a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
                "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21",
            ],
            Self::CheckSquare => &[
                "m9 11 3 3L22 4",
                "M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11",
            ],
            Self::Compass => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M16.24 7.76 14.12 14.12 7.76 16.24 9.88 9.88Z",
            ],
        }
    }
}

/// Renders a glyph as an inline SVG.
///
/// # Props
///
/// * `glyph` - Which icon to draw
/// * `size` - Width and height in pixels (default: "24")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Compass size="64" class="mx-auto mb-6" /> }
/// ```
#[component]
pub fn Icon(
    /// The icon to draw
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=glyph.name()
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|&d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}
