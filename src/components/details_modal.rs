//! Contract Details Modal
//!
//! Read-only view of everything known about one contract.

use docutrack_core::format::{format_size, format_upload_date, or_empty, EMPTY};
use docutrack_core::Contract;
use leptos::prelude::*;

use crate::components::StatusBadge;

/// Characters of extracted text shown before truncating
const TEXT_EXCERPT_CHARS: usize = 600;

fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(TEXT_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

fn list_or_empty(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY.to_string()
    } else {
        values.join(", ")
    }
}

#[component]
fn DetailRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            <dt>{label}</dt>
            <dd>{value}</dd>
        </div>
    }
}

#[component]
fn Details(contract: Contract) -> impl IntoView {
    let vars = contract.variables.clone();
    let other_fields: Vec<(String, String)> = vars
        .other_fields
        .clone()
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect();

    view! {
        <dl class="details">
            <DetailRow label="Filename" value=contract.display_name().to_string() />
            <DetailRow label="Stored As" value=contract.filename.clone() />
            <DetailRow
                label="Size"
                value=contract.file_size.map(format_size).unwrap_or_else(|| EMPTY.to_string())
            />
            <DetailRow label="Uploaded" value=format_upload_date(contract.upload_date.as_deref()) />
            <div class="detail-row">
                <dt>"Status"</dt>
                <dd><StatusBadge status=contract.extraction_status.clone() /></dd>
            </div>
            <DetailRow label="Contract Type" value=or_empty(vars.contract_type.as_deref()) />
            <DetailRow label="Parties" value=list_or_empty(vars.party_names()) />
            <DetailRow label="Amount" value=or_empty(vars.amount.as_deref()) />
            <DetailRow label="Date" value=or_empty(vars.date.as_deref()) />
            <DetailRow label="Expiration Date" value=or_empty(vars.expiration_date.as_deref()) />
            <DetailRow label="Signatures" value=list_or_empty(vars.signatures()) />
            {other_fields
                .into_iter()
                .map(|(key, value)| view! { <DetailRow label=key value=value /> })
                .collect_view()}
        </dl>
        {contract.extracted_text.as_deref().filter(|t| !t.trim().is_empty()).map(|text| view! {
            <h4>"Extracted Text"</h4>
            <pre class="extracted-text">{excerpt(text)}</pre>
        })}
    }
}

#[component]
pub fn DetailsModal(
    viewing: ReadSignal<Option<Contract>>,
    set_viewing: WriteSignal<Option<Contract>>,
) -> impl IntoView {
    view! {
        {move || viewing.get().map(|contract| view! {
            <div class="modal-backdrop" on:click=move |_| set_viewing.set(None)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>"Contract Details"</h3>
                        <button class="modal-close" on:click=move |_| set_viewing.set(None)>"✕"</button>
                    </div>
                    <Details contract=contract />
                </div>
            </div>
        })}
    }
}
