//! Top navigation bar: brand mark, section buttons, auth buttons.

use super::{Glyph, Icon};
use crate::content::{AUTH_ACTIONS, BRAND, NAV_ITEMS};
use leptos::prelude::*;

/// Horizontal navigation bar.
///
/// The section buttons collapse below the `md` breakpoint; the brand and the
/// auth buttons are always shown. None of the buttons are wired to a handler.
#[component]
pub fn Navigation() -> impl IntoView {
    let [sign_in, join_now] = AUTH_ACTIONS;

    view! {
        <nav class="bg-white shadow-lg">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <div class="nav-brand flex items-center space-x-2">
                        <Icon glyph=Glyph::Menu class="h-6 w-6 text-blue-600" />
                        <span class="text-xl font-bold text-blue-600">{BRAND}</span>
                    </div>
                    <div class="nav-items hidden md:flex space-x-6 text-sm">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <button
                                        type="button"
                                        class="nav-item flex items-center space-x-1 text-gray-600 hover:text-blue-600 transition-colors"
                                    >
                                        <Icon glyph=item.icon size="16" class="h-4 w-4" />
                                        <span>{item.label}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="nav-auth flex items-center space-x-4">
                        <button type="button" class="text-gray-600 hover:text-blue-600">
                            {sign_in}
                        </button>
                        <button
                            type="button"
                            class="bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700"
                        >
                            {join_now}
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
