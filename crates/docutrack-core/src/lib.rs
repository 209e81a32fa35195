//! DocuTrack Core
//!
//! Framework-free logic behind the contract dashboard:
//! - models: data structures matching the backend JSON
//! - api: the `ContractApi` boundary and its reqwest implementation
//! - state / actions: dashboard state contract and the per-row action dispatchers
//! - suggestions, status, edit_form, notify, format, session: UI-facing helpers

pub mod actions;
pub mod api;
pub mod config;
pub mod edit_form;
pub mod error;
pub mod format;
pub mod models;
pub mod notify;
pub mod session;
pub mod state;
pub mod status;
pub mod suggestions;

#[cfg(test)]
mod test_utils;

pub use actions::Actions;
pub use api::{ContractApi, HttpContractApi};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use models::{
    Analytics, Contract, ContractFilters, ContractType, ContractVariables, Download,
    ExtractionStatus, UploadFile, User,
};
pub use state::{ActionKind, DashboardSink, DashboardState, PendingConfirmation};
