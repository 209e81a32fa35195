//! Dashboard Component
//!
//! Stats, tabs for contracts and analytics, and the modals acting on rows.
//! The contract list is refetched on mount and on every filter change.

use docutrack_core::{Contract, PendingConfirmation};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    AnalyticsPanel, ConfirmDialog, ContractTable, DetailsModal, EditContractModal, SearchBar,
    StatsCards, UploadCard,
};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Contracts,
    Analytics,
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (tab, set_tab) = signal(Tab::Contracts);
    let (viewing, set_viewing) = signal::<Option<Contract>>(None);
    let (editing, set_editing) = signal::<Option<Contract>>(None);
    let pending_delete = RwSignal::new(PendingConfirmation::default());

    // Load list when filters change
    Effect::new(move |_| {
        let filters = store.filters().get();
        log::debug!("filters changed: {:?}", filters);
        spawn_local(async move {
            if let Some(dispatch) = ctx.dispatch() {
                dispatch.actions().refresh_contracts().await;
            }
        });
    });

    // Counts and types once per session; mutations refresh them afterwards
    spawn_local(async move {
        if let Some(dispatch) = ctx.dispatch() {
            dispatch.actions().refresh_analytics().await;
        }
    });

    let on_delete = move |id: String| {
        spawn_local(async move {
            if let Some(dispatch) = ctx.dispatch() {
                dispatch.actions().delete(&id).await;
            }
        });
    };

    // Name the row being deleted; rows can vanish on a refresh, so fall back to the id
    let describe_contract = move |id: String| {
        store
            .contracts()
            .with_untracked(|rows| {
                rows.iter()
                    .find(|c| c.id == id)
                    .map(|c| c.display_name().to_string())
            })
            .unwrap_or(id)
    };

    let tab_class = move |t: Tab| if tab.get() == t { "tab active" } else { "tab" };

    view! {
        <main class="dashboard">
            <div class="dashboard-header">
                <h2>"Contract Dashboard"</h2>
                <p>"Upload, extract, and manage your legal contracts"</p>
            </div>

            <StatsCards />

            <nav class="tabs">
                <button class=move || tab_class(Tab::Contracts) on:click=move |_| set_tab.set(Tab::Contracts)>
                    "Contracts"
                </button>
                <button class=move || tab_class(Tab::Analytics) on:click=move |_| set_tab.set(Tab::Analytics)>
                    "Analytics"
                </button>
            </nav>

            <Show
                when=move || tab.get() == Tab::Contracts
                fallback=|| view! { <AnalyticsPanel /> }
            >
                <UploadCard />
                <SearchBar />
                <ContractTable
                    set_viewing=set_viewing
                    set_editing=set_editing
                    pending_delete=pending_delete
                />
            </Show>

            <DetailsModal viewing=viewing set_viewing=set_viewing />
            <EditContractModal editing=editing set_editing=set_editing />
            <ConfirmDialog
                pending=pending_delete
                message="Are you sure you want to delete this contract?"
                describe=describe_contract
                on_confirm=on_delete
            />
        </main>
    }
}
