//! Contract Table Component
//!
//! One row per contract with its status badge and row actions. Each action
//! button tracks its own `{action}-{id}` key, so rows stay independent.

use docutrack_core::format::{format_size, format_upload_date, or_empty, parties, EMPTY};
use docutrack_core::{ActionKind, Contract, PendingConfirmation};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::StatusBadge;
use crate::context::use_app_context;
use crate::store::{store_is_busy, AppStateStoreFields};

/// Small action button that shows a spinner while its key is in flight
#[component]
fn RowAction(
    /// In-flight key; `None` for actions that never wait on the backend
    #[prop(optional, into)] action_key: Option<String>,
    #[prop(into)] label: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] class: String,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let store = use_app_context().store;
    let busy = move || action_key.as_deref().is_some_and(|key| store_is_busy(&store, key));
    let busy_label = busy.clone();

    view! {
        <button
            class=format!("row-action {}", class)
            title=title
            disabled=busy.clone()
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            {move || if busy_label() { "…".to_string() } else { label.clone() }}
        </button>
    }
}

#[component]
pub fn ContractTable(
    set_viewing: WriteSignal<Option<Contract>>,
    set_editing: WriteSignal<Option<Contract>>,
    pending_delete: RwSignal<PendingConfirmation>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let download = move |id: String, filename: String| {
        spawn_local(async move {
            if let Some(dispatch) = ctx.dispatch() {
                dispatch.actions().download(&id, &filename).await;
            }
        });
    };

    let reprocess = move |id: String| {
        spawn_local(async move {
            if let Some(dispatch) = ctx.dispatch() {
                dispatch.actions().reprocess(&id).await;
            }
        });
    };

    view! {
        <section class="card">
            <div class="card-header">
                <h2>"Your Contracts"</h2>
                <p class="card-subtitle">"Manage and view all uploaded contracts"</p>
            </div>

            {move || {
                if store.list_loading().get() && store.contracts().with(|c| c.is_empty()) {
                    view! { <div class="empty-state">"Loading contracts..."</div> }.into_any()
                } else if store.contracts().with(|c| c.is_empty()) {
                    view! { <div class="empty-state">"No contracts found"</div> }.into_any()
                } else {
                    view! {
                        <table class="contract-table" class:loading=move || store.list_loading().get()>
                            <thead>
                                <tr>
                                    <th>"Filename"</th>
                                    <th>"Type"</th>
                                    <th>"Parties"</th>
                                    <th>"Amount"</th>
                                    <th>"Uploaded"</th>
                                    <th class="num">"Size"</th>
                                    <th>"Status"</th>
                                    <th class="actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {store.contracts().get().into_iter().map(|contract| {
                                    let id = contract.id.clone();
                                    let name = contract.display_name().to_string();
                                    let for_view = contract.clone();
                                    let for_edit = contract.clone();
                                    let (dl_id, dl_name) = (id.clone(), name.clone());
                                    let rp_id = id.clone();
                                    let del_id = id.clone();
                                    view! {
                                        <tr>
                                            <td class="filename">{name.clone()}</td>
                                            <td>{or_empty(contract.variables.contract_type.as_deref())}</td>
                                            <td>{parties(&contract)}</td>
                                            <td>{or_empty(contract.variables.amount.as_deref())}</td>
                                            <td>{format_upload_date(contract.upload_date.as_deref())}</td>
                                            <td class="num">{contract.file_size.map(format_size).unwrap_or_else(|| EMPTY.to_string())}</td>
                                            <td><StatusBadge status=contract.extraction_status.clone() /></td>
                                            <td class="actions">
                                                <RowAction
                                                    label="👁"
                                                    title="View details"
                                                    on_click=move |_| set_viewing.set(Some(for_view.clone()))
                                                />
                                                <RowAction
                                                    action_key=ActionKind::Save.key(&id)
                                                    label="✎"
                                                    title="Edit contract"
                                                    on_click=move |_| set_editing.set(Some(for_edit.clone()))
                                                />
                                                <RowAction
                                                    action_key=ActionKind::Reprocess.key(&id)
                                                    label="↻"
                                                    title="Re-run extraction"
                                                    on_click=move |_| reprocess(rp_id.clone())
                                                />
                                                <RowAction
                                                    action_key=ActionKind::Download.key(&id)
                                                    label="⬇"
                                                    title="Download original file"
                                                    on_click=move |_| download(dl_id.clone(), dl_name.clone())
                                                />
                                                <RowAction
                                                    action_key=ActionKind::Delete.key(&id)
                                                    label="🗑"
                                                    title="Delete contract permanently"
                                                    class="danger"
                                                    on_click=move |_| pending_delete.update(|p| p.request(del_id.clone()))
                                                />
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </section>
    }
}
