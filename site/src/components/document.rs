//! Composition root and the full HTML document around it.

use super::{Features, Footer, Hero, Navigation};
use crate::styles::PAGE_CSS;
use crate::{PageOptions, StyleMode};
use leptos::prelude::*;

/// The landing page body: navigation, hero, features, footer.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white">
            <Navigation />
            <main>
                <Hero />
                <Features />
            </main>
            <Footer />
        </div>
    }
}

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(
    /// Title, description, language and stylesheet mode
    options: PageOptions,
) -> impl IntoView {
    let PageOptions {
        title,
        description,
        lang,
        style,
    } = options;

    let stylesheet = match style {
        StyleMode::Inline => view! { <style>{PAGE_CSS}</style> }.into_any(),
        StyleMode::Linked(href) => view! { <link rel="stylesheet" href=href /> }.into_any(),
    };

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=description />
                <title>{title}</title>
                {stylesheet}
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}
