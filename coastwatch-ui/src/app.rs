//! App Root Component
//!
//! Router wiring and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Guarded, Nav, Toast};
use crate::pages::{Dashboard, Home, Login, Report, Reports, Signup};
use crate::routes::AppRoute;
use crate::session::BrowserStore;
use crate::state::{provide_global_state, provide_session_context};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_session_context(BrowserStore::default());

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50">
                <Nav />

                <main>
                    <Routes>
                        <Route path=AppRoute::Home.path() view=Home />
                        <Route path=AppRoute::Report.path() view=Report />
                        <Route path=AppRoute::Reports.path() view=Reports />
                        <Route path=AppRoute::Login.path() view=Login />
                        <Route path=AppRoute::Signup.path() view=Signup />
                        <Route path=AppRoute::Dashboard.path() view=|| view! {
                            <Guarded route=AppRoute::Dashboard>
                                <Dashboard />
                            </Guarded>
                        } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🌊"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A href=AppRoute::Home.path() class="bg-sky-600 text-white px-4 py-2 rounded shadow">
                "Go to Home"
            </A>
        </div>
    }
}
