//! Home Page
//!
//! Hero, map placeholder, recent highlights and feature cards.

use leptos::*;
use leptos_router::*;

use crate::components::{FeatureCard, HighlightTile};
use crate::content::{FEATURES, HERO_HIGHLIGHTS, RECENT_HIGHLIGHTS};
use crate::routes::AppRoute;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <Hero />
            <section class="max-w-7xl mx-auto px-4 py-10">
                <div class="grid md:grid-cols-3 gap-6">
                    {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="bg-white">
            <div class="max-w-7xl mx-auto px-4 py-16 grid grid-cols-1 md:grid-cols-2 gap-8 items-center">
                <div>
                    <h1 class="text-4xl font-extrabold text-sky-800">
                        "CoastWatch — Trusted Coastal Hazard Alerts"
                    </h1>
                    <p class="mt-4 text-slate-700">
                        "Combine citizen reports, social media signals, and authoritative ocean advisories \
                         to detect hazards fast. Report incidents, confirm local reports, and receive \
                         geo-targeted alerts."
                    </p>

                    <div class="mt-6 flex gap-3">
                        <A href=AppRoute::Report.path() class="bg-sky-600 text-white px-4 py-2 rounded shadow">
                            "Report Hazard"
                        </A>
                        <A href=AppRoute::Login.path() class="border border-sky-600 text-sky-600 px-4 py-2 rounded">
                            "Sign in"
                        </A>
                    </div>

                    <div class="mt-6 grid grid-cols-2 gap-2">
                        {HERO_HIGHLIGHTS.into_iter().map(|highlight| view! { <HighlightTile highlight=highlight /> }).collect_view()}
                    </div>
                </div>

                <div>
                    <MapPlaceholder />

                    <div class="mt-4 grid grid-cols-2 gap-3">
                        {RECENT_HIGHLIGHTS.into_iter().map(|highlight| view! {
                            <HighlightTile highlight=highlight class="p-3 bg-white border rounded" />
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MapPlaceholder() -> impl IntoView {
    view! {
        <div class="h-72 rounded-lg shadow-inner overflow-hidden border border-slate-200">
            <div class="h-full w-full bg-gradient-to-br from-cyan-50 to-sky-100 flex items-center justify-center">
                <div class="text-sky-700 text-center">
                    <div class="text-2xl font-bold">"Map Preview"</div>
                    <div class="mt-2 text-sm">"(Live map not available in this prototype)"</div>
                </div>
            </div>
        </div>
    }
}
