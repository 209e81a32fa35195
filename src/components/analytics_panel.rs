//! Analytics Panel Component
//!
//! Status distribution, stored size and the contract type breakdown.

use docutrack_core::format::{format_size, percent};
use docutrack_core::ExtractionStatus;
use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let store = use_app_store();
    let analytics = store.analytics();

    view! {
        <section class="card analytics-panel">
            <div class="card-header">
                <h2>"Analytics"</h2>
                <p class="card-subtitle">
                    {move || format!("Total stored: {}", format_size(analytics.get().total_size))}
                </p>
            </div>

            <h3>"Extraction Status"</h3>
            <div class="breakdown">
                {ExtractionStatus::KNOWN.iter().cloned().map(|status| {
                    let row_status = status.clone();
                    view! {
                        <div class="breakdown-row">
                            <StatusBadge status=status />
                            <span class="breakdown-count">
                                {move || {
                                    let a = analytics.get();
                                    let count = a.count_for(&row_status);
                                    format!("{} ({}%)", count, percent(count, a.total_contracts))
                                }}
                            </span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <h3>"Contract Types"</h3>
            <Show
                when=move || store.contract_types().with(|t| !t.is_empty())
                fallback=|| view! { <p class="empty-state">"No contract types yet"</p> }
            >
                <table class="breakdown-table">
                    <thead>
                        <tr>
                            <th>"Type"</th>
                            <th class="num">"Count"</th>
                            <th class="num">"Share"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.contract_types().get()
                            key=|t| (t.contract_type.clone(), t.count)
                            children=move |t| {
                                let count = t.count;
                                view! {
                                    <tr>
                                        <td>{t.contract_type}</td>
                                        <td class="num">{count}</td>
                                        <td class="num">
                                            {move || format!("{}%", percent(count, analytics.get().total_contracts))}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
