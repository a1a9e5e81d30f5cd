//! Reports Page
//!
//! Listing of recent citizen reports.

use leptos::*;

use crate::content::{format_age, HazardReport, ReportStatus, RECENT_REPORTS};

#[component]
pub fn Reports() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <h2 class="text-2xl font-bold">"Recent Reports"</h2>
            <div class="mt-4 grid gap-3">
                <For
                    each=move || RECENT_REPORTS
                    key=|report| report.id
                    children=|report| view! { <ReportRow report=report /> }
                />
            </div>
        </div>
    }
}

#[component]
fn ReportRow(report: HazardReport) -> impl IntoView {
    let background = match report.status {
        ReportStatus::Verified => "bg-green-50",
        ReportStatus::Unverified => "bg-white",
    };

    view! {
        <div class=format!("p-4 border rounded flex justify-between items-center {}", background)>
            <div>
                <div class="font-semibold">{report.title}</div>
                <div class="text-xs text-slate-600">{format!("{} ago", format_age(report.age()))}</div>
            </div>
            <div class="text-sm">{report.status.as_str()}</div>
        </div>
    }
}
