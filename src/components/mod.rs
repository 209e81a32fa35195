//! UI Components
//!
//! Reusable Leptos components.

mod analytics_panel;
mod confirm_dialog;
mod contract_table;
mod dashboard;
mod details_modal;
mod edit_contract_modal;
mod login_modal;
mod navbar;
mod search_bar;
mod stats_cards;
mod status_badge;
mod toast_stack;
mod upload_card;

pub use analytics_panel::AnalyticsPanel;
pub use confirm_dialog::ConfirmDialog;
pub use contract_table::ContractTable;
pub use dashboard::Dashboard;
pub use details_modal::DetailsModal;
pub use edit_contract_modal::EditContractModal;
pub use login_modal::LoginModal;
pub use navbar::NavBar;
pub use search_bar::SearchBar;
pub use stats_cards::StatsCards;
pub use status_badge::StatusBadge;
pub use toast_stack::ToastStack;
pub use upload_card::UploadCard;
