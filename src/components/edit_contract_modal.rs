//! Edit Contract Modal
//!
//! Edits the extracted variables of one contract. The form is rebuilt each
//! time a contract is opened; blank party rows are dropped on save.

use docutrack_core::edit_form::EditForm;
use docutrack_core::{ActionKind, Contract};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::store_is_busy;

/// Text input bound to one scalar field of the form
#[component]
fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn EditContractModal(
    editing: ReadSignal<Option<Contract>>,
    set_editing: WriteSignal<Option<Contract>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let form = RwSignal::new(EditForm::default());

    // Reset the form whenever another contract is opened
    Effect::new(move |_| {
        if let Some(contract) = editing.get() {
            form.set(EditForm::from_contract(&contract));
        }
    });

    let saving = move || {
        editing.with(|c| {
            c.as_ref()
                .is_some_and(|c| store_is_busy(&store, &ActionKind::Save.key(&c.id)))
        })
    };

    // Party rows re-render only when the party list itself changes
    let parties = Memo::new(move |_| form.with(|f| f.party_names.clone()));

    let close = move || set_editing.set(None);

    let save = move |_| {
        let Some(contract) = editing.get_untracked() else { return };
        let updated = form.with_untracked(|f| f.apply_to(&contract));
        spawn_local(async move {
            let Some(dispatch) = ctx.dispatch() else { return };
            if dispatch.actions().save(&contract.id, &updated).await {
                set_editing.set(None);
            }
        });
    };

    view! {
        <Show when=move || editing.with(|c| c.is_some())>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h3>"Edit Contract"</h3>
                        <button class="modal-close" on:click=move |_| close()>"✕"</button>
                    </div>
                    <p class="modal-lead">
                        {move || editing.with(|c| c.as_ref().map(|c| c.display_name().to_string()))}
                    </p>

                    <div class="form">
                        <FormField
                            label="Contract Type"
                            placeholder="e.g. Service Agreement, NDA"
                            value=Signal::derive(move || form.with(|f| f.contract_type.clone()))
                            on_input=move |v: String| form.update(|f| f.contract_type = v)
                        />

                        <div class="form-field">
                            <label>"Party Names"</label>
                            {move || {
                                let names = parties.get();
                                let can_remove = form.with_untracked(|f| f.can_remove_party());
                                names
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, name)| view! {
                                        <div class="party-row">
                                            <input
                                                type="text"
                                                placeholder=format!("Party {}", i + 1)
                                                prop:value=name
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    form.update(|f| f.set_party(i, value));
                                                }
                                            />
                                            <button
                                                type="button"
                                                class="btn btn-outline btn-small"
                                                disabled=!can_remove
                                                on:click=move |_| form.update(|f| f.remove_party(i))
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    })
                                    .collect_view()
                            }}
                            <button
                                type="button"
                                class="btn btn-outline btn-small"
                                on:click=move |_| form.update(|f| f.add_party())
                            >
                                "+ Add Party"
                            </button>
                        </div>

                        <FormField
                            label="Amount"
                            placeholder="e.g. $50,000"
                            value=Signal::derive(move || form.with(|f| f.amount.clone()))
                            on_input=move |v: String| form.update(|f| f.amount = v)
                        />
                        <FormField
                            label="Date"
                            placeholder="e.g. 2024-01-15"
                            value=Signal::derive(move || form.with(|f| f.date.clone()))
                            on_input=move |v: String| form.update(|f| f.date = v)
                        />
                        <FormField
                            label="Expiration Date"
                            placeholder="e.g. 2025-01-15"
                            value=Signal::derive(move || form.with(|f| f.expiration_date.clone()))
                            on_input=move |v: String| form.update(|f| f.expiration_date = v)
                        />
                    </div>

                    <div class="modal-actions">
                        <button class="btn btn-outline" on:click=move |_| close()>"Cancel"</button>
                        <button class="btn btn-primary" disabled=saving on:click=save>
                            {move || if saving() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
