//! Navigation Component
//!
//! Header bar with brand, links, and the signed-in user's badge.

use leptos::*;
use leptos_router::*;

use crate::routes::AppRoute;
use crate::state::{GlobalState, SessionContext};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();

    // Pick up sign-ins and sign-outs from other tabs on every route change
    create_effect({
        let session = session.clone();
        move |_| {
            location.pathname.with(|_| ());
            session.refresh();
        }
    });

    view! {
        <header class="bg-gradient-to-r from-sky-600 to-cyan-500 text-white">
            <div class="max-w-7xl mx-auto px-4 py-4 flex items-center justify-between">
                // Logo and brand
                <A href=AppRoute::Home.path() class="flex items-center gap-3">
                    <div class="w-10 h-10 bg-white/20 rounded-full flex items-center justify-center">"🌊"</div>
                    <div>
                        <div class="text-lg font-bold">"CoastWatch"</div>
                        <div class="text-xs opacity-90">"Ocean Hazard Reporting"</div>
                    </div>
                </A>

                <nav class="flex items-center gap-4">
                    <A href=AppRoute::Home.path() class="hover:underline">"Home"</A>
                    <A href=AppRoute::Reports.path() class="hover:underline">"Reports"</A>
                    {move || match session.current() {
                        None => view! {
                            <A href=AppRoute::Login.path() class="bg-white/20 px-3 py-1 rounded">"Login"</A>
                        }.into_view(),
                        Some(user) => view! {
                            <div class="flex items-center gap-3">
                                <span class="text-sm">{user.badge()}</span>
                                <LogoutButton class="bg-white text-sky-700 px-3 py-1 rounded" />
                            </div>
                        }.into_view(),
                    }}
                </nav>
            </div>
        </header>
    }
}

/// Clears the session and returns to the home page
#[component]
pub fn LogoutButton(class: &'static str) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = expect_context::<GlobalState>();
    let navigate = use_navigate();

    let on_click = move |_| {
        session.sign_out_to(AppRoute::Home, |to| navigate(to.path(), Default::default()));
        state.show_success("Signed out");
    };

    view! {
        <button type="button" on:click=on_click class=class>"Logout"</button>
    }
}
