//! Toast Stack Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || !store.notifications().with(|n| n.is_empty())>
        <div class="toast-stack">
            <For
                each=move || store.notifications().with(|n| n.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-close"
                                on:click=move |_| store.notifications().write().dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
        </Show>
    }
}
