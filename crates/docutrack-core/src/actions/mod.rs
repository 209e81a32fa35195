//! Action Dispatchers
//!
//! Every user action follows the same shape: mark the action in flight,
//! call the API, refresh what the mutation touched and notify, or notify the
//! failure. The in-flight mark is cleared on every path.


use crate::api::ContractApi;
use crate::config::MAX_UPLOAD_BYTES;
use crate::format::format_size;
use crate::models::{Contract, UploadFile};
use crate::notify::NotificationKind;
use crate::state::{upload_key, ActionKind, DashboardSink};

/// Clears an in-flight key when dropped
struct InFlight<'s, S: DashboardSink + ?Sized> {
    sink: &'s S,
    key: String,
}

impl<'s, S: DashboardSink + ?Sized> InFlight<'s, S> {
    fn start(sink: &'s S, key: String) -> Self {
        sink.begin_action(&key);
        Self { sink, key }
    }
}

impl<S: DashboardSink + ?Sized> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        self.sink.end_action(&self.key);
    }
}

/// Dispatchers bound to one API client, one state sink and the signed-in user
pub struct Actions<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    sink: &'a S,
    user_id: &'a str,
}

impl<'a, A, S> Actions<'a, A, S>
where
    A: ContractApi + ?Sized,
    S: DashboardSink + ?Sized,
{
    pub fn new(api: &'a A, sink: &'a S, user_id: &'a str) -> Self {
        Self { api, sink, user_id }
    }

    fn success(&self, message: impl Into<String>) {
        self.sink.notify(NotificationKind::Success, message.into());
    }

    fn failure(&self, message: impl Into<String>) {
        self.sink.notify(NotificationKind::Error, message.into());
    }

    // ========================
    // Refresh
    // ========================

    /// Re-fetch the contract list with the current filters
    pub async fn refresh_contracts(&self) -> bool {
        self.sink.set_list_loading(true);
        let filters = self.sink.filters();
        let ok = match self.api.list(self.user_id, &filters).await {
            Ok(contracts) => {
                log::debug!("loaded {} contracts", contracts.len());
                self.sink.set_contracts(contracts);
                true
            }
            Err(e) => {
                log::error!("Error fetching contracts: {}", e);
                self.failure("Failed to load contracts");
                false
            }
        };
        self.sink.set_list_loading(false);
        ok
    }

    /// Re-fetch the summary counts and the contract type breakdown
    pub async fn refresh_analytics(&self) {
        match self.api.analytics(self.user_id).await {
            Ok(analytics) => self.sink.set_analytics(analytics),
            Err(e) => log::warn!("Error fetching analytics: {}", e),
        }
        match self.api.contract_types(self.user_id).await {
            Ok(types) => self.sink.set_contract_types(types),
            Err(e) => log::warn!("Error fetching contract types: {}", e),
        }
    }

    async fn refresh_all(&self) {
        self.refresh_contracts().await;
        self.refresh_analytics().await;
    }

    // ========================
    // Mutations
    // ========================

    /// Upload the selected files; invalid selections never reach the API
    pub async fn upload(&self, files: &[UploadFile]) -> bool {
        if files.is_empty() {
            self.failure("Please select at least one file");
            return false;
        }
        if let Some(file) = files.iter().find(|f| !f.is_docx()) {
            self.failure(format!("{} is not a DOCX file", file.name));
            return false;
        }
        if let Some(file) = files.iter().find(|f| !f.is_within_size_limit()) {
            self.failure(format!(
                "{} is larger than {}",
                file.name,
                format_size(MAX_UPLOAD_BYTES)
            ));
            return false;
        }

        let _in_flight = InFlight::start(self.sink, upload_key());
        match self.api.upload(files, self.user_id).await {
            Ok(created) => {
                log::info!("uploaded {} contracts", created.len());
                self.sink.clear_selected_files();
                self.refresh_all().await;
                self.success(format!("Uploaded {} contract(s)", created.len()));
                true
            }
            Err(e) => {
                log::error!("Error uploading: {}", e);
                self.failure("Upload failed");
                false
            }
        }
    }

    /// Delete a contract; callers gate this behind a confirmation
    pub async fn delete(&self, id: &str) -> bool {
        let _in_flight = InFlight::start(self.sink, ActionKind::Delete.key(id));
        match self.api.delete(id).await {
            Ok(()) => {
                log::info!("deleted contract {}", id);
                self.refresh_all().await;
                self.success("Contract deleted successfully");
                true
            }
            Err(e) => {
                log::error!("Error deleting contract {}: {}", id, e);
                self.failure("Delete failed");
                false
            }
        }
    }

    /// Fetch the original document and hand it to the save-as prompt
    pub async fn download(&self, id: &str, filename: &str) -> bool {
        let _in_flight = InFlight::start(self.sink, ActionKind::Download.key(id));
        match self.api.download(id, filename).await {
            Ok(download) => {
                self.sink.save_download(download);
                self.success(format!("Downloaded {}", filename));
                true
            }
            Err(e) => {
                log::error!("Error downloading contract {}: {}", id, e);
                self.failure("Download failed");
                false
            }
        }
    }

    /// Ask the backend to run extraction again
    pub async fn reprocess(&self, id: &str) -> bool {
        let _in_flight = InFlight::start(self.sink, ActionKind::Reprocess.key(id));
        match self.api.reprocess(id).await {
            Ok(()) => {
                log::info!("reprocessed contract {}", id);
                self.refresh_all().await;
                self.success("Contract reprocessed");
                true
            }
            Err(e) => {
                log::error!("Error reprocessing contract {}: {}", id, e);
                self.failure("Reprocess failed");
                false
            }
        }
    }

    /// Persist edited variables
    pub async fn save(&self, id: &str, updated: &Contract) -> bool {
        let _in_flight = InFlight::start(self.sink, ActionKind::Save.key(id));
        match self.api.update(id, updated).await {
            Ok(_) => {
                log::info!("updated contract {}", id);
                self.refresh_all().await;
                self.success("Contract updated");
                true
            }
            Err(e) => {
                log::error!("Error updating contract {}: {}", id, e);
                self.failure("Update failed");
                false
            }
        }
    }
}
