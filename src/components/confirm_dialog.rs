//! Confirm Dialog Component
//!
//! Modal confirmation in front of destructive actions. The pending target is
//! handed to `on_confirm` once; cancelling drops it.

use docutrack_core::PendingConfirmation;
use leptos::prelude::*;

/// Confirmation dialog bound to a pending target
///
/// # Arguments
/// * `pending` - Target awaiting confirmation; the dialog is open while set
/// * `message` - Question shown to the user
/// * `describe` - Turns the target into the name shown under the question
/// * `on_confirm` - Receives the confirmed target
#[component]
pub fn ConfirmDialog(
    pending: RwSignal<PendingConfirmation>,
    #[prop(into)] message: String,
    #[prop(into)] describe: Callback<String, String>,
    #[prop(into)] on_confirm: Callback<String>,
) -> impl IntoView {
    let target_name = move || {
        pending
            .with(|p| p.target().map(str::to_string))
            .map(|target| describe.run(target))
    };

    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let target = pending.try_update(|p| p.confirm()).flatten();
        if let Some(target) = target {
            on_confirm.run(target);
        }
    };

    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        pending.update(|p| p.cancel());
    };

    view! {
        <Show when=move || pending.with(|p| p.is_open())>
            <div class="modal-backdrop">
                <div class="modal modal-small confirm-dialog">
                    <p class="confirm-text">{message.clone()}</p>
                    {move || target_name().map(|name| view! { <p class="confirm-target">{name}</p> })}
                    <div class="modal-actions">
                        <button class="btn btn-outline" on:click=cancel>"Cancel"</button>
                        <button class="btn btn-danger" on:click=confirm>"Delete"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
