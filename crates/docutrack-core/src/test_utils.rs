//! Test Utilities
//!
//! In-memory `ContractApi` that behaves like the backend closely enough for
//! the dispatchers to be exercised end to end.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::api::ContractApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Analytics, Contract, ContractFilters, ContractType, ContractVariables, Download,
    ExtractionStatus, UploadFile,
};

#[derive(Default)]
pub struct InMemoryContractApi {
    contracts: RefCell<Vec<Contract>>,
    next_id: Cell<u32>,
    failing: Cell<bool>,
    calls: RefCell<HashMap<&'static str, usize>>,
    last_filters: RefCell<Option<ContractFilters>>,
    last_update: RefCell<Option<Contract>>,
}

impl InMemoryContractApi {
    pub fn with_contracts(contracts: Vec<Contract>) -> Self {
        let api = Self::default();
        *api.contracts.borrow_mut() = contracts;
        api
    }

    /// Make every following call fail with HTTP 500
    pub fn fail_all(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.borrow().get(op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }

    pub fn last_filters(&self) -> Option<ContractFilters> {
        self.last_filters.borrow().clone()
    }

    pub fn last_update(&self) -> Option<Contract> {
        self.last_update.borrow().clone()
    }

    pub fn stored(&self) -> Vec<Contract> {
        self.contracts.borrow().clone()
    }

    fn record(&self, op: &'static str) -> ApiResult<()> {
        *self.calls.borrow_mut().entry(op).or_insert(0) += 1;
        if self.failing.get() {
            return Err(ApiError::Status {
                method: "TEST",
                url: op.to_string(),
                status: 500,
            });
        }
        Ok(())
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::Status {
            method: "TEST",
            url: format!("contracts/{}", id),
            status: 404,
        }
    }

    fn owned_by<'c>(&self, user_id: &'c str) -> impl Fn(&&Contract) -> bool + 'c {
        move |c: &&Contract| user_id.is_empty() || c.user_id == user_id
    }
}

fn matches_search(contract: &Contract, search: &str) -> bool {
    let needle = search.to_lowercase();
    contract.original_filename.to_lowercase().contains(&needle)
        || contract
            .variables
            .contract_type
            .as_deref()
            .map_or(false, |t| t.to_lowercase().contains(&needle))
        || contract
            .variables
            .party_names()
            .iter()
            .any(|p| p.to_lowercase().contains(&needle))
}

pub fn contract(id: &str, name: &str, status: ExtractionStatus, kind: Option<&str>) -> Contract {
    Contract {
        id: id.to_string(),
        filename: format!("{}_{}", id, name),
        original_filename: name.to_string(),
        file_path: format!("uploads/{}_{}", id, name),
        file_size: Some(1000),
        upload_date: Some("2024-01-15T10:00:00".to_string()),
        variables: ContractVariables {
            contract_type: kind.map(str::to_string),
            party_names: Some(vec!["Acme Corp".to_string()]),
            ..Default::default()
        },
        extraction_status: status,
        extracted_text: None,
        user_id: "user1".to_string(),
    }
}

#[async_trait(?Send)]
impl ContractApi for InMemoryContractApi {
    async fn list(&self, user_id: &str, filters: &ContractFilters) -> ApiResult<Vec<Contract>> {
        self.record("list")?;
        *self.last_filters.borrow_mut() = Some(filters.clone());
        Ok(self
            .contracts
            .borrow()
            .iter()
            .filter(self.owned_by(user_id))
            .filter(|c| filters.search.is_empty() || matches_search(c, &filters.search))
            .filter(|c| {
                filters.extraction_status.is_empty()
                    || c.extraction_status.as_str() == filters.extraction_status
            })
            .filter(|c| {
                filters.contract_type.is_empty()
                    || c.variables.contract_type.as_deref() == Some(filters.contract_type.as_str())
            })
            .cloned()
            .collect())
    }

    async fn upload(&self, files: &[UploadFile], user_id: &str) -> ApiResult<Vec<Contract>> {
        self.record("upload")?;
        let mut created = Vec::new();
        for file in files {
            let n = self.next_id.get() + 1;
            self.next_id.set(n);
            let mut c = contract(
                &format!("new-{}", n),
                &file.name,
                ExtractionStatus::AutoExtracted,
                None,
            );
            c.file_size = Some(file.size());
            c.user_id = user_id.to_string();
            created.push(c);
        }
        self.contracts.borrow_mut().extend(created.iter().cloned());
        Ok(created)
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.record("delete")?;
        self.contracts.borrow_mut().retain(|c| c.id != id);
        Ok(())
    }

    async fn download(&self, id: &str, filename: &str) -> ApiResult<Download> {
        self.record("download")?;
        if !self.contracts.borrow().iter().any(|c| c.id == id) {
            return Err(Self::not_found(id));
        }
        Ok(Download {
            filename: filename.to_string(),
            bytes: b"PK docx bytes".to_vec(),
        })
    }

    async fn analytics(&self, user_id: &str) -> ApiResult<Analytics> {
        self.record("analytics")?;
        let contracts = self.contracts.borrow();
        let mine: Vec<&Contract> = contracts.iter().filter(self.owned_by(user_id)).collect();
        let count = |status: ExtractionStatus| {
            mine.iter().filter(|c| c.extraction_status == status).count() as u64
        };
        Ok(Analytics {
            total_contracts: mine.len() as u64,
            auto_extracted: count(ExtractionStatus::AutoExtracted),
            manual_required: count(ExtractionStatus::ManualRequired),
            manually_edited: count(ExtractionStatus::ManuallyEdited),
            total_size: mine.iter().filter_map(|c| c.file_size).sum(),
        })
    }

    async fn contract_types(&self, user_id: &str) -> ApiResult<Vec<ContractType>> {
        self.record("contract_types")?;
        let mut counts: Vec<ContractType> = Vec::new();
        for c in self.contracts.borrow().iter().filter(self.owned_by(user_id)) {
            let label = c.variables.contract_type.clone().unwrap_or_else(|| "Unknown".to_string());
            match counts.iter_mut().find(|t| t.contract_type == label) {
                Some(entry) => entry.count += 1,
                None => counts.push(ContractType { contract_type: label, count: 1 }),
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(counts)
    }

    async fn reprocess(&self, id: &str) -> ApiResult<()> {
        self.record("reprocess")?;
        let mut contracts = self.contracts.borrow_mut();
        let c = contracts.iter_mut().find(|c| c.id == id).ok_or_else(|| Self::not_found(id))?;
        c.extraction_status = ExtractionStatus::AutoExtracted;
        Ok(())
    }

    async fn update(&self, id: &str, contract: &Contract) -> ApiResult<Contract> {
        self.record("update")?;
        *self.last_update.borrow_mut() = Some(contract.clone());
        let mut contracts = self.contracts.borrow_mut();
        let stored = contracts.iter_mut().find(|c| c.id == id).ok_or_else(|| Self::not_found(id))?;
        stored.variables = contract.variables.clone();
        stored.extraction_status = ExtractionStatus::ManuallyEdited;
        Ok(stored.clone())
    }
}
