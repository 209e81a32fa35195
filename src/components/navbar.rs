//! Navbar Component
//!
//! Product title plus the signed-in user with logout, or a login button.

use leptos::prelude::*;

use crate::store::{store_logout, use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar(set_show_login: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();

    let logout = move |_| {
        log::info!("logged out");
        store_logout(&store);
    };

    view! {
        <header class="navbar">
            <div class="navbar-brand">
                <span class="navbar-icon">"📄"</span>
                <div>
                    <h1 class="navbar-title">"DocuTrack Legal"</h1>
                    <p class="navbar-subtitle">"Contract Management System"</p>
                </div>
            </div>

            {move || match store.user().get() {
                Some(user) => view! {
                    <div class="navbar-user">
                        <div class="navbar-user-info">
                            <p class="navbar-user-name">{user.name}</p>
                            <p class="navbar-user-email">{user.email}</p>
                        </div>
                        <button class="btn btn-outline" title="Logout" on:click=logout>
                            "Logout"
                        </button>
                    </div>
                }.into_any(),
                None => view! {
                    <button class="btn btn-primary" on:click=move |_| set_show_login.set(true)>
                        "Login"
                    </button>
                }.into_any(),
            }}
        </header>
    }
}
