//! Search Bar Component
//!
//! Search input with suggestions from the loaded contracts, status and type
//! selects, and a Clear button while any filter is set. Every filter change
//! goes to the store, which triggers the backend refetch.

use docutrack_core::config::SUGGESTION_HIDE_DELAY_MS;
use docutrack_core::suggestions::SuggestionBox;
use docutrack_core::ExtractionStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_update_filters, use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    let suggestions = RwSignal::new(SuggestionBox::default());
    let (selected_idx, set_selected_idx) = signal(0usize);

    let refresh_suggestions = move |query: &str| {
        let contracts = store.contracts().get_untracked();
        suggestions.update(|b| b.update(query, &contracts));
        set_selected_idx.set(0);
    };

    let pick = move |index: usize| {
        if let Some(text) = suggestions.try_update(|b| b.select(index)).flatten() {
            store_update_filters(&store, |f| f.search = text);
        }
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        refresh_suggestions(&value);
        store_update_filters(&store, |f| f.search = value);
    };

    let on_focus = move |_: web_sys::FocusEvent| {
        let query = store.filters().with_untracked(|f| f.search.clone());
        refresh_suggestions(&query);
    };

    // Delay so a click on an entry lands before the list disappears
    let on_blur = move |_: web_sys::FocusEvent| {
        spawn_local(async move {
            TimeoutFuture::new(SUGGESTION_HIDE_DELAY_MS).await;
            suggestions.update(|b| b.hide());
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if !suggestions.with_untracked(|b| b.is_visible()) {
            return;
        }
        let count = suggestions.with_untracked(|b| b.items().len());
        let sel = selected_idx.get_untracked();
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                if sel + 1 < count {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Enter" => {
                ev.prevent_default();
                pick(sel);
            }
            "Escape" => suggestions.update(|b| b.hide()),
            _ => {}
        }
    };

    let clear = move |_| {
        store_update_filters(&store, |f| f.clear());
        suggestions.update(|b| b.hide());
    };

    view! {
        <section class="card search-bar">
            <div class="search-input-wrapper">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by filename, contract type, or party names..."
                    autocomplete="off"
                    prop:value=move || store.filters().with(|f| f.search.clone())
                    on:input=on_input
                    on:focus=on_focus
                    on:blur=on_blur
                    on:keydown=on_keydown
                />

                <Show when=move || suggestions.with(|b| b.is_visible())>
                    <div class="autocomplete-list">
                        {move || {
                            let selected = selected_idx.get();
                            suggestions.with(|b| b.items().to_vec())
                                .into_iter()
                                .enumerate()
                                .map(|(i, text)| view! {
                                    <button
                                        type="button"
                                        class=if i == selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            pick(i);
                                        }
                                    >
                                        {text}
                                    </button>
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>

            <select
                class="filter-select"
                prop:value=move || store.filters().with(|f| f.extraction_status.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    store_update_filters(&store, |f| f.extraction_status = value);
                }
            >
                <option value="">"All Status"</option>
                {ExtractionStatus::KNOWN.iter().map(|status| view! {
                    <option value=status.as_str().to_string()>{status.filter_label().to_string()}</option>
                }).collect_view()}
            </select>

            <select
                class="filter-select"
                prop:value=move || store.filters().with(|f| f.contract_type.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    store_update_filters(&store, |f| f.contract_type = value);
                }
            >
                <option value="">"All Types"</option>
                <For
                    each=move || store.contract_types().get()
                    key=|t| t.contract_type.clone()
                    children=move |t| view! {
                        <option value=t.contract_type.clone()>
                            {format!("{} ({})", t.contract_type, t.count)}
                        </option>
                    }
                />
            </select>

            <Show when=move || store.filters().with(|f| f.is_active())>
                <button class="btn btn-outline" on:click=clear>"✕ Clear"</button>
            </Show>
        </section>
    }
}
