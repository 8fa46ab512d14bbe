//! Static page content.
//!
//! Everything the landing page shows lives here as `'static` data, read
//! once per render and never mutated. Components only decide layout.

use crate::components::Glyph;
use serde::Serialize;

/// Brand name shown in the navigation bar and footer.
pub const BRAND: &str = "SeaGro";

/// A labeled icon button in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Icon drawn before the label
    pub icon: Glyph,
    /// Button text
    pub label: &'static str,
}

/// A card in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Icon drawn above the title
    pub icon: Glyph,
    /// Card heading
    pub title: &'static str,
    /// One-line pitch
    pub description: &'static str,
}

/// Hero banner copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    /// Icon above the headline
    pub icon: Glyph,
    /// Headline text
    pub headline: &'static str,
    /// Supporting line under the headline
    pub subheading: &'static str,
    /// Filled call-to-action
    pub primary_action: &'static str,
    /// Outlined call-to-action
    pub secondary_action: &'static str,
}

/// Heading block above the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionHeading {
    /// Section title
    pub title: &'static str,
    /// Section lead
    pub lead: &'static str,
}

/// What a footer column shows under its heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FooterBody {
    /// A single paragraph of prose
    Paragraph(&'static str),
    /// A list of (inert) link labels
    Links(&'static [&'static str]),
}

/// A titled column in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    /// Column heading
    pub heading: &'static str,
    /// Column content
    pub body: FooterBody,
}

/// Navigation entries, in display order.
pub const NAV_ITEMS: [NavItem; 10] = [
    NavItem {
        icon: Glyph::Home,
        label: "Home",
    },
    NavItem {
        icon: Glyph::Users,
        label: "Profiles",
    },
    NavItem {
        icon: Glyph::Briefcase,
        label: "Jobs",
    },
    NavItem {
        icon: Glyph::BookOpen,
        label: "Learning",
    },
    NavItem {
        icon: Glyph::Users2,
        label: "Community",
    },
    NavItem {
        icon: Glyph::Bike,
        label: "Bike Sharing",
    },
    NavItem {
        icon: Glyph::Newspaper,
        label: "Tech News",
    },
    NavItem {
        icon: Glyph::MessageSquare,
        label: "Chat",
    },
    NavItem {
        icon: Glyph::Image,
        label: "Content",
    },
    NavItem {
        icon: Glyph::CheckSquare,
        label: "Tasks",
    },
];

/// Auth buttons on the right of the navigation bar: (sign in, join).
pub const AUTH_ACTIONS: [&str; 2] = ["Sign In", "Join Now"];

/// Hero banner copy.
pub const HERO: HeroCopy = HeroCopy {
    icon: Glyph::Compass,
    headline: "Connect. Learn. Grow.",
    subheading: "Join the community that's shaping the future of professional growth",
    primary_action: "Get Started",
    secondary_action: "Learn More",
};

/// Heading above the feature grid.
pub const FEATURES_HEADING: SectionHeading = SectionHeading {
    title: "Everything you need to succeed",
    lead: "Discover all the tools and features designed to help you grow",
};

/// Feature cards, in display order.
pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Glyph::BookOpen,
        title: "Learning Center",
        description: "Access expert-led courses and tutorials to advance your skills",
    },
    Feature {
        icon: Glyph::Users,
        title: "Community",
        description: "Connect with like-minded professionals and expand your network",
    },
    Feature {
        icon: Glyph::Bike,
        title: "Bike Sharing",
        description: "Sustainable transportation solution for urban commuters",
    },
    Feature {
        icon: Glyph::Newspaper,
        title: "Tech News",
        description: "Stay updated with the latest trends and innovations",
    },
    Feature {
        icon: Glyph::MessageSquare,
        title: "Real-time Chat",
        description: "Communicate instantly with community members",
    },
    Feature {
        icon: Glyph::Image,
        title: "Content Sharing",
        description: "Share and discover inspiring content with the community",
    },
];

/// Footer columns, left to right.
pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        heading: "About SeaGro",
        body: FooterBody::Paragraph(
            "Empowering professionals through community, learning, and innovation.",
        ),
    },
    FooterColumn {
        heading: "Features",
        body: FooterBody::Links(&[
            "Learning Center",
            "Job Board",
            "Community",
            "Bike Sharing",
        ]),
    },
    FooterColumn {
        heading: "Resources",
        body: FooterBody::Links(&["Documentation", "API", "Support", "Blog"]),
    },
    FooterColumn {
        heading: "Legal",
        body: FooterBody::Links(&[
            "Privacy Policy",
            "Terms of Service",
            "Cookie Policy",
            "Contact Us",
        ]),
    },
];

/// Copyright line at the bottom of the footer.
pub const COPYRIGHT: &str = "© 2024 SeaGro. All rights reserved.";

/// The whole static content set, for export.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SiteContent {
    /// Brand name
    pub brand: &'static str,
    /// Navigation entries
    pub nav_items: &'static [NavItem],
    /// Auth buttons
    pub auth_actions: &'static [&'static str],
    /// Hero copy
    pub hero: HeroCopy,
    /// Feature grid heading
    pub features_heading: SectionHeading,
    /// Feature cards
    pub features: &'static [Feature],
    /// Footer columns
    pub footer: &'static [FooterColumn],
    /// Copyright line
    pub copyright: &'static str,
}

/// Collects every static content list into one serializable value.
pub const fn site_content() -> SiteContent {
    SiteContent {
        brand: BRAND,
        nav_items: &NAV_ITEMS,
        auth_actions: &AUTH_ACTIONS,
        hero: HERO,
        features_heading: FEATURES_HEADING,
        features: &FEATURES,
        footer: &FOOTER_COLUMNS,
        copyright: COPYRIGHT,
    }
}
