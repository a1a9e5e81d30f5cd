//! Account Type Selector
//!
//! Toggle between local and authority accounts on the login and signup
//! forms.

use leptos::*;

use crate::session::Role;

#[component]
pub fn RoleToggle(role: RwSignal<Role>) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            {Role::ALL.into_iter().map(|option| view! {
                <button
                    type="button"
                    on:click=move |_| role.set(option)
                    class=move || {
                        if role.get() == option {
                            "px-3 py-1 rounded bg-sky-600 text-white"
                        } else {
                            "px-3 py-1 rounded border"
                        }
                    }
                >
                    {option.label()}
                </button>
            }).collect_view()}
        </div>
    }
}
