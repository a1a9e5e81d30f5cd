//! Login Page
//!
//! Mock sign-in: any name and password are accepted.

use leptos::*;
use leptos_router::*;

use crate::components::RoleToggle;
use crate::routes::AppRoute;
use crate::session::Role;
use crate::state::{GlobalState, SessionContext};

#[component]
pub fn Login() -> impl IntoView {
    let role = create_rw_signal(Role::Local);
    let (name, set_name) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let submit = use_sign_in();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit(&name.get_untracked(), role.get_untracked());
    };

    view! {
        <div class="max-w-md mx-auto px-4 py-12">
            <div class="bg-white p-6 rounded shadow">
                <h2 class="text-xl font-bold">"Sign in"</h2>
                <p class="text-sm text-slate-600">"Choose account type and sign in."</p>

                <div class="mt-4">
                    <RoleToggle role=role />
                </div>

                <form on:submit=on_submit class="mt-4 space-y-3">
                    <input
                        placeholder="Name"
                        class="w-full border p-2 rounded"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        class="w-full border p-2 rounded"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <div class="flex items-center justify-between">
                        <button type="submit" class="bg-sky-600 text-white px-4 py-2 rounded">"Sign in"</button>
                        <A href=AppRoute::Signup.path() class="text-sm text-sky-600">"Create account"</A>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Submit handler shared by the login and signup forms: write the session,
/// confirm, then navigate to the role's landing route.
pub(crate) fn use_sign_in() -> impl Fn(&str, Role) + Clone + 'static {
    let session = expect_context::<SessionContext>();
    let state = expect_context::<GlobalState>();
    let navigate = use_navigate();

    move |name: &str, role: Role| {
        let landing = session.sign_in(name, role);
        if let Some(user) = session.current() {
            state.show_success(&format!("Signed in as {}", user.badge()));
        }
        navigate(landing.path(), Default::default());
    }
}
