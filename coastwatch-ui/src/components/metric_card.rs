//! Metric Card Component
//!
//! Static headline figure on the authority dashboard.

use leptos::*;

use crate::content::DashboardMetric;

#[component]
pub fn MetricCard(metric: DashboardMetric) -> impl IntoView {
    view! {
        <div class="p-4 bg-white border rounded">
            <div class="text-sm text-slate-500">{metric.label}</div>
            <div class="text-2xl font-bold">{metric.value}</div>
        </div>
    }
}
