//! Dashboard Page
//!
//! Authority view with mock alert metrics and reports awaiting review.
//! Reached only through the role guard.

use leptos::*;

use crate::components::{LogoutButton, MetricCard};
use crate::content::{format_age, pending_reports, PendingReport, DASHBOARD_METRICS};
use crate::state::SessionContext;

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            // Page header
            <div class="flex justify-between items-center">
                <div>
                    <h2 class="text-2xl font-bold">"Authority Dashboard"</h2>
                    <div class="text-sm text-slate-600">
                        "Welcome, "
                        {move || session.current().map(|s| s.name).unwrap_or_default()}
                    </div>
                </div>
                <LogoutButton class="bg-red-600 text-white px-3 py-1 rounded" />
            </div>

            <div class="grid grid-cols-3 gap-4 mt-6">
                {DASHBOARD_METRICS.into_iter().map(|metric| view! { <MetricCard metric=metric /> }).collect_view()}
            </div>

            <section class="mt-6 bg-white rounded border p-4">
                <h3 class="font-semibold">"Pending Reports"</h3>
                <div class="mt-3 grid gap-3">
                    {pending_reports().into_iter().map(|report| view! { <PendingRow report=report /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn PendingRow(report: PendingReport) -> impl IntoView {
    let meta = format!(
        "Uploaded {} ago — confidence {}%",
        format_age(report.uploaded),
        report.confidence_pct
    );

    view! {
        <div class="p-3 border rounded flex justify-between items-center">
            <div>
                <div class="font-semibold">{report.title}</div>
                <div class="text-xs text-slate-500">{meta}</div>
            </div>
            <div class="flex gap-2">
                <button type="button" class="px-3 py-1 rounded bg-green-600 text-white">"Approve"</button>
                <button type="button" class="px-3 py-1 rounded border">"Request Live Capture"</button>
            </div>
        </div>
    }
}
