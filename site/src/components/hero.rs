use super::Icon;
use crate::content::HERO;
use leptos::prelude::*;

/// Centered banner with the headline and two calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero relative bg-gradient-to-r from-blue-600 to-blue-800 text-white py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <Icon glyph=HERO.icon size="64" class="h-16 w-16 mx-auto mb-6" />
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">{HERO.headline}</h1>
                    <p class="text-xl md:text-2xl mb-8 text-blue-100">{HERO.subheading}</p>
                    <div class="flex justify-center space-x-4">
                        <button
                            type="button"
                            class="bg-white text-blue-600 px-8 py-3 rounded-lg font-semibold hover:bg-blue-50 transition-colors"
                        >
                            {HERO.primary_action}
                        </button>
                        <button
                            type="button"
                            class="border-2 border-white text-white px-8 py-3 rounded-lg font-semibold hover:bg-white hover:text-blue-600 transition-colors"
                        >
                            {HERO.secondary_action}
                        </button>
                    </div>
                </div>
            </div>
            // bottom fade into the feature section
            <div class="absolute bottom-0 left-0 right-0 h-16 bg-gradient-to-t from-white to-transparent"></div>
        </section>
    }
}
