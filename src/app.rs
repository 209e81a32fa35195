//! DocuTrack Frontend App
//!
//! Session gate: the dashboard while signed in, the welcome screen otherwise.

use docutrack_core::HttpContractApi;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Dashboard, LoginModal, NavBar, ToastStack};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let (show_login, set_show_login) = signal(false);

    // Provide context to all children
    provide_context(store);
    let api = HttpContractApi::default();
    log::info!("API base URL: {}", api.config().base_url);
    provide_context(AppContext::new(store, api));

    view! {
        <div class="app-layout">
            <NavBar set_show_login=set_show_login />
            <LoginModal show=show_login set_show=set_show_login />

            <Show
                when=move || store.user().with(|u| u.is_some())
                fallback=move || view! {
                    <div class="welcome">
                        <h2>"Welcome to DocuTrack Legal"</h2>
                        <p>"Manage your contracts with AI-powered extraction and smart analytics."</p>
                        <button class="btn btn-primary" on:click=move |_| set_show_login.set(true)>
                            "Get Started"
                        </button>
                    </div>
                }
            >
                <Dashboard />
            </Show>

            <ToastStack />
        </div>
    }
}
