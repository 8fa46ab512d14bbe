use super::Icon;
use crate::content::{FEATURES, FEATURES_HEADING, Feature};
use leptos::prelude::*;

/// Responsive grid of feature cards: one column on phones, two from `md`,
/// three from `lg`.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-24 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl font-bold text-gray-900 mb-4">{FEATURES_HEADING.title}</h2>
                    <p class="text-xl text-gray-600">{FEATURES_HEADING.lead}</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|&feature| view! { <FeatureCard feature=feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card bg-white p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow">
            <Icon glyph=feature.icon size="48" class="h-12 w-12 text-blue-600 mb-4" />
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{feature.title}</h3>
            <p class="text-gray-600">{feature.description}</p>
        </article>
    }
}
