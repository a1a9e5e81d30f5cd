//! Feature Card Component

use leptos::*;

use crate::content::{Feature, Highlight};

/// Marketing card on the home page
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="p-4 bg-white rounded shadow-sm border">
            <div class="text-3xl">{feature.emoji}</div>
            <div class="mt-2 font-semibold">{feature.title}</div>
            <div class="text-sm text-slate-600 mt-1">{feature.description}</div>
        </div>
    }
}

/// Two-line tile used in the hero section
#[component]
pub fn HighlightTile(
    highlight: Highlight,
    #[prop(default = "p-3 bg-sky-50 rounded")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            <div class="text-sm font-semibold">{highlight.title}</div>
            <div class="text-xs text-slate-600">{highlight.detail}</div>
        </div>
    }
}
