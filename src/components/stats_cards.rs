//! Stats Cards Component
//!
//! Summary counts above the dashboard tabs.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] class: String,
    value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class)>
            <p class="stat-label">{label}</p>
            <p class="stat-value">{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn StatsCards() -> impl IntoView {
    let store = use_app_store();
    let analytics = store.analytics();

    view! {
        <div class="stats-grid">
            <StatCard
                label="Total Contracts"
                class="stat-total"
                value=Signal::derive(move || analytics.get().total_contracts)
            />
            <StatCard
                label="Auto Extracted"
                class="stat-auto"
                value=Signal::derive(move || analytics.get().auto_extracted)
            />
            <StatCard
                label="Manual Required"
                class="stat-manual"
                value=Signal::derive(move || analytics.get().manual_required)
            />
            <StatCard
                label="Manually Edited"
                class="stat-edited"
                value=Signal::derive(move || analytics.get().manually_edited)
            />
        </div>
    }
}
