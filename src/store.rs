//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. `UiSink` is the
//! store's face towards the dispatchers in `docutrack_core`.

use std::collections::HashSet;

use docutrack_core::config::TOAST_DISMISS_MS;
use docutrack_core::notify::{NotificationKind, Notifications};
use docutrack_core::{
    Analytics, Contract, ContractFilters, ContractType, DashboardSink, Download, UploadFile, User,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::browser;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user; `None` shows the welcome screen
    pub user: Option<User>,
    /// Contracts matching the current filters
    pub contracts: Vec<Contract>,
    pub analytics: Analytics,
    pub contract_types: Vec<ContractType>,
    pub filters: ContractFilters,
    pub list_loading: bool,
    /// `{action}-{id}` keys of running actions
    pub in_flight: HashSet<String>,
    pub notifications: Notifications,
    /// Files picked or dropped, waiting for upload
    pub selected_files: Vec<UploadFile>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Whether the action with this key is running
pub fn store_is_busy(store: &AppStore, key: &str) -> bool {
    store.in_flight().with(|keys| keys.contains(key))
}

/// Change the filters; the dashboard refetches on every change
pub fn store_update_filters(store: &AppStore, f: impl FnOnce(&mut ContractFilters)) {
    let binding = store.filters();
    let mut filters = binding.write();
    f(&mut *filters);
}

impl AppState {
    /// State after logout: everything dropped except the toast id counter,
    /// so pending dismiss timers never hit toasts of the next session
    pub fn logged_out(&self) -> Self {
        let mut notifications = self.notifications.clone();
        notifications.clear();
        Self {
            notifications,
            ..Self::default()
        }
    }
}

/// Forget the session and everything loaded for it
pub fn store_logout(store: &AppStore) {
    let next = store.with_untracked(AppState::logged_out);
    store.set(next);
}

/// Show a toast that dismisses itself
pub fn store_notify(store: &AppStore, kind: NotificationKind, message: String) {
    let id = store.notifications().write().push(kind, message);
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        store.notifications().write().dismiss(id);
    });
}

// ========================
// Dispatcher Sink
// ========================

#[derive(Clone, Copy)]
pub struct UiSink {
    store: AppStore,
}

impl UiSink {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl DashboardSink for UiSink {
    fn filters(&self) -> ContractFilters {
        self.store.filters().get_untracked()
    }

    fn set_list_loading(&self, loading: bool) {
        self.store.list_loading().set(loading);
    }

    fn set_contracts(&self, contracts: Vec<Contract>) {
        self.store.contracts().set(contracts);
    }

    fn set_analytics(&self, analytics: Analytics) {
        self.store.analytics().set(analytics);
    }

    fn set_contract_types(&self, types: Vec<ContractType>) {
        self.store.contract_types().set(types);
    }

    fn begin_action(&self, key: &str) {
        self.store.in_flight().write().insert(key.to_string());
    }

    fn end_action(&self, key: &str) {
        self.store.in_flight().write().remove(key);
    }

    fn notify(&self, kind: NotificationKind, message: String) {
        store_notify(&self.store, kind, message);
    }

    fn clear_selected_files(&self) {
        self.store.selected_files().write().clear();
    }

    fn save_download(&self, download: Download) {
        if let Err(e) = browser::save_as(&download) {
            log::error!("Error saving {}: {:?}", download.filename, e);
        }
    }
}
