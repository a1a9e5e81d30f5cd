//! Guarded Route Wrapper
//!
//! Renders its children only when the route table lets the current session
//! in; otherwise replaces the history entry with the redirect target. The
//! slot is re-read each time the route is entered.

use leptos::*;
use leptos_router::*;

use crate::routes::{AppRoute, Navigation};
use crate::state::SessionContext;

#[component]
pub fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    session.refresh();

    move || match session.resolve(route) {
        Navigation::Render(_) => children().into_view(),
        Navigation::Redirect(to) => view! {
            <Redirect
                path=to.path()
                options=NavigateOptions { replace: true, ..Default::default() }
            />
        }
        .into_view(),
        Navigation::NotFound => ().into_view(),
    }
}
