//! Dashboard State
//!
//! The state the dispatchers read and write, expressed as a trait so the
//! Leptos store and plain in-memory state can both sit behind it.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::models::{Analytics, Contract, ContractFilters, ContractType, Download, UploadFile};
use crate::notify::{NotificationKind, Notifications};

/// Row actions that carry their own loading flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Delete,
    Download,
    Reprocess,
    Save,
    Upload,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Delete => "delete",
            ActionKind::Download => "download",
            ActionKind::Reprocess => "reprocess",
            ActionKind::Save => "save",
            ActionKind::Upload => "upload",
        }
    }

    /// Loading-map key, `"{action}-{id}"`
    pub fn key(&self, id: &str) -> String {
        format!("{}-{}", self.as_str(), id)
    }
}

/// Key used while the current file selection is being uploaded
pub fn upload_key() -> String {
    ActionKind::Upload.key("selection")
}

/// Where dispatchers push their results
///
/// All methods take `&self`: implementations use interior mutability
/// (reactive signals in the browser, `RefCell` elsewhere).
pub trait DashboardSink {
    fn filters(&self) -> ContractFilters;
    fn set_list_loading(&self, loading: bool);
    fn set_contracts(&self, contracts: Vec<Contract>);
    fn set_analytics(&self, analytics: Analytics);
    fn set_contract_types(&self, types: Vec<ContractType>);
    fn begin_action(&self, key: &str);
    fn end_action(&self, key: &str);
    fn notify(&self, kind: NotificationKind, message: String);
    fn clear_selected_files(&self);
    fn save_download(&self, download: Download);
}

/// Plain dashboard state, one field per piece of screen state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub contracts: Vec<Contract>,
    pub analytics: Analytics,
    pub contract_types: Vec<ContractType>,
    pub filters: ContractFilters,
    pub list_loading: bool,
    pub in_flight: HashSet<String>,
    pub notifications: Notifications,
    pub selected_files: Vec<UploadFile>,
    /// Files handed over for saving, oldest first
    pub saved_downloads: Vec<Download>,
}

impl DashboardState {
    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }
}

impl DashboardSink for RefCell<DashboardState> {
    fn filters(&self) -> ContractFilters {
        self.borrow().filters.clone()
    }

    fn set_list_loading(&self, loading: bool) {
        self.borrow_mut().list_loading = loading;
    }

    fn set_contracts(&self, contracts: Vec<Contract>) {
        self.borrow_mut().contracts = contracts;
    }

    fn set_analytics(&self, analytics: Analytics) {
        self.borrow_mut().analytics = analytics;
    }

    fn set_contract_types(&self, types: Vec<ContractType>) {
        self.borrow_mut().contract_types = types;
    }

    fn begin_action(&self, key: &str) {
        self.borrow_mut().in_flight.insert(key.to_string());
    }

    fn end_action(&self, key: &str) {
        self.borrow_mut().in_flight.remove(key);
    }

    fn notify(&self, kind: NotificationKind, message: String) {
        self.borrow_mut().notifications.push(kind, message);
    }

    fn clear_selected_files(&self) {
        self.borrow_mut().selected_files.clear();
    }

    fn save_download(&self, download: Download) {
        self.borrow_mut().saved_downloads.push(download);
    }
}

/// Confirmation gate for destructive actions
///
/// `request` opens the dialog for a target, `confirm` hands the target back
/// exactly once, `cancel` drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingConfirmation {
    target: Option<String>,
}

impl PendingConfirmation {
    pub fn request(&mut self, target: impl Into<String>) {
        self.target = Some(target.into());
    }

    pub fn confirm(&mut self) -> Option<String> {
        self.target.take()
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
