//! Login Modal Component
//!
//! Demo sign-in: any password works, the email picks the account.

use docutrack_core::session::{mock_login, ADMIN_EMAIL};
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoginModal(show: ReadSignal<bool>, set_show: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let close = move || {
        set_error.set(None);
        set_show.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match mock_login(&email.get(), &password.get()) {
            Ok(user) => {
                log::info!("logged in as {}", user.id);
                store.user().set(Some(user));
                set_email.set(String::new());
                set_password.set(String::new());
                close();
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop">
                <div class="modal modal-small">
                    <div class="modal-header">
                        <h2>"Login to DocuTrack Legal"</h2>
                        <button class="modal-close" on:click=move |_| close()>"✕"</button>
                    </div>
                    <p class="modal-lead">"Enter your credentials to access your contracts"</p>

                    <form class="form" on:submit=on_submit>
                        <label for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            type="email"
                            placeholder=ADMIN_EMAIL
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            placeholder="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        <p class="form-hint">
                            "Demo accounts: admin@example.com / user@example.com (any password)"
                        </p>
                        <button type="submit" class="btn btn-primary btn-block">"Login"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
