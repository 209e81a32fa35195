//! Upload Card Component
//!
//! Drop zone plus file picker. Files are read into memory as soon as they are
//! chosen; validation happens when Upload is pressed.

use docutrack_core::config::MAX_UPLOAD_BYTES;
use docutrack_core::format::format_size;
use docutrack_core::state::upload_key;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, FileList, HtmlInputElement};

use crate::browser;
use crate::context::use_app_context;
use crate::store::{store_is_busy, AppStateStoreFields, AppStore};

fn select_files(store: AppStore, list: FileList) {
    spawn_local(async move {
        let files = browser::read_files(list).await;
        log::debug!("selected {} files", files.len());
        store.selected_files().set(files);
    });
}

#[component]
pub fn UploadCard() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (is_over, set_is_over) = signal(false);
    let uploading = move || store_is_busy(&store, &upload_key());

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            select_files(store, list);
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            select_files(store, list);
        }
        // Picking the same file again must fire change
        input.set_value("");
    };

    let on_upload = move |_| {
        let files = store.selected_files().get_untracked();
        spawn_local(async move {
            if let Some(dispatch) = ctx.dispatch() {
                dispatch.actions().upload(&files).await;
            }
        });
    };

    view! {
        <section class="card">
            <div class="card-header">
                <h2>"Upload Contracts"</h2>
                <p class="card-subtitle">
                    {format!("Upload DOCX files (max {} per file)", format_size(MAX_UPLOAD_BYTES))}
                </p>
            </div>

            <label
                class=move || if is_over.get() { "upload-zone active" } else { "upload-zone" }
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <span class="upload-zone-icon">"⇪"</span>
                <p class="upload-zone-text">
                    {move || {
                        let count = store.selected_files().with(|f| f.len());
                        if count > 0 {
                            format!("{} file(s) selected", count)
                        } else {
                            "Click to select DOCX files or drag and drop".to_string()
                        }
                    }}
                </p>
                <p class="upload-zone-hint">"Supports bulk upload"</p>
                <input
                    type="file"
                    class="hidden"
                    multiple=true
                    accept=".docx"
                    on:change=on_change
                />
            </label>

            <div class="upload-actions">
                <button class="btn btn-primary" disabled=uploading on:click=on_upload>
                    {move || if uploading() { "Uploading..." } else { "Upload Contracts" }}
                </button>
                <Show when=move || store.selected_files().with(|f| !f.is_empty()) && !uploading()>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| store.selected_files().write().clear()
                    >
                        "Clear selection"
                    </button>
                </Show>
            </div>
        </section>
    }
}
