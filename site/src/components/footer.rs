use crate::content::{COPYRIGHT, FOOTER_COLUMNS, FooterBody, FooterColumn};
use leptos::prelude::*;

/// Four-column footer with the copyright line underneath.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|&column| view! { <FooterColumnView column=column /> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="mt-8 pt-8 border-t border-gray-800 text-center text-gray-400">
                    <p class="copyright">{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumnView(column: FooterColumn) -> impl IntoView {
    let body = match column.body {
        FooterBody::Paragraph(text) => view! { <p class="text-gray-400">{text}</p> }.into_any(),
        FooterBody::Links(links) => view! {
            <ul class="space-y-2 text-gray-400 cursor-pointer">
                {links.iter().map(|&link| view! { <li>{link}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <div class="footer-column">
            <h3 class="text-lg font-semibold mb-4">{column.heading}</h3>
            {body}
        </div>
    }
}
