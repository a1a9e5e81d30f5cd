//! Signup Page

use leptos::*;
use leptos_router::*;

use crate::components::RoleToggle;
use crate::pages::login::use_sign_in;
use crate::routes::AppRoute;
use crate::session::Role;

#[component]
pub fn Signup() -> impl IntoView {
    let role = create_rw_signal(Role::Local);
    let (name, set_name) = create_signal(String::new());
    let (contact, set_contact) = create_signal(String::new());

    let submit = use_sign_in();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit(&name.get_untracked(), role.get_untracked());
    };

    view! {
        <div class="max-w-md mx-auto px-4 py-12">
            <div class="bg-white p-6 rounded shadow">
                <h2 class="text-xl font-bold">"Create account"</h2>

                <div class="mt-3">
                    <RoleToggle role=role />
                </div>

                <form on:submit=on_submit class="mt-4 space-y-3">
                    <input
                        placeholder="Full name"
                        class="w-full border p-2 rounded"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Phone / Email"
                        class="w-full border p-2 rounded"
                        prop:value=contact
                        on:input=move |ev| set_contact.set(event_target_value(&ev))
                    />
                    <div class="flex items-center justify-between">
                        <button type="submit" class="bg-sky-600 text-white px-4 py-2 rounded">"Create"</button>
                        <A href=AppRoute::Login.path() class="text-sm text-sky-600">"Already have account?"</A>
                    </div>
                </form>
            </div>
        </div>
    }
}
