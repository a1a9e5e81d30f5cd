//! Report Page
//!
//! Hazard report form. Input stays local to the page; nothing is uploaded.

use leptos::*;
use leptos_router::*;

use crate::routes::AppRoute;
use crate::state::{GlobalState, SessionContext};

#[component]
pub fn Report() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = expect_context::<GlobalState>();

    let (description, set_description) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.show_notice("Reports are not sent in this prototype");
        set_description.set(String::new());
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <h2 class="text-2xl font-bold">"Report a Hazard"</h2>
            <p class="text-sm text-slate-600 mt-2">
                "Upload photo/video and add a short description. \
                 We will verify using AI and local confirmations."
            </p>

            {move || (!session.is_signed_in()).then(|| view! {
                <div class="mt-4 p-3 bg-yellow-50 border-l-4 border-yellow-400">
                    "Please "
                    <A href=AppRoute::Login.path() class="underline">"login"</A>
                    " to submit reports. Locals can confirm within the time window."
                </div>
            })}

            <form on:submit=on_submit class="mt-6 bg-white p-4 rounded border">
                <label class="block text-sm font-medium">"Short Description"</label>
                <input
                    class="mt-1 w-full border rounded p-2"
                    placeholder="e.g. strong rip currents near the pier"
                    prop:value=description
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />

                <label class="block text-sm font-medium mt-3">"Upload Media (photo/video)"</label>
                <input type="file" accept="video/*,image/*" class="mt-1" />

                <div class="mt-4 flex gap-3">
                    <button type="submit" class="bg-sky-600 text-white px-4 py-2 rounded">"Submit"</button>
                    <button type="button" class="border px-4 py-2 rounded">"Record Live (mobile)"</button>
                </div>
            </form>
        </div>
    }
}
