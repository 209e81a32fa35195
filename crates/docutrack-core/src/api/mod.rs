//! Contract API
//!
//! The boundary between the dashboard and the REST backend. Every call is a
//! fresh round-trip: no retry, no timeout, no caching.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Analytics, Contract, ContractFilters, ContractType, Download, UploadFile};

pub use http::HttpContractApi;

/// Typed access to the backend endpoints under `/api`
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait ContractApi {
    /// `GET /contracts`, filtered server-side
    async fn list(&self, user_id: &str, filters: &ContractFilters) -> ApiResult<Vec<Contract>>;

    /// `POST /contracts/upload` as multipart
    async fn upload(&self, files: &[UploadFile], user_id: &str) -> ApiResult<Vec<Contract>>;

    /// `DELETE /contracts/{id}`
    async fn delete(&self, id: &str) -> ApiResult<()>;

    /// `GET /contracts/{id}/download`, paired with the name to save it under
    async fn download(&self, id: &str, filename: &str) -> ApiResult<Download>;

    /// `GET /analytics/summary`
    async fn analytics(&self, user_id: &str) -> ApiResult<Analytics>;

    /// `GET /analytics/contract-types`
    async fn contract_types(&self, user_id: &str) -> ApiResult<Vec<ContractType>>;

    /// `POST /contracts/{id}/reprocess`; the response body is not relied on
    async fn reprocess(&self, id: &str) -> ApiResult<()>;

    /// `PUT /contracts/{id}`
    async fn update(&self, id: &str, contract: &Contract) -> ApiResult<Contract>;
}
