//! Models
//!
//! Data structures matching the backend JSON.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{MAX_UPLOAD_BYTES, UPLOAD_EXTENSION};

/// Signed-in user (session scoped, never persisted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// How a contract's structured fields were populated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtractionStatus {
    AutoExtracted,
    ManualRequired,
    ManuallyEdited,
    /// Anything the backend sends that we do not recognise, kept verbatim
    Unknown(String),
}

impl ExtractionStatus {
    /// The three statuses offered by the status filter, in display order
    pub const KNOWN: [ExtractionStatus; 3] = [
        ExtractionStatus::AutoExtracted,
        ExtractionStatus::ManualRequired,
        ExtractionStatus::ManuallyEdited,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "auto_extracted" => ExtractionStatus::AutoExtracted,
            "manual_required" => ExtractionStatus::ManualRequired,
            "manually_edited" => ExtractionStatus::ManuallyEdited,
            other => ExtractionStatus::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExtractionStatus::AutoExtracted => "auto_extracted",
            ExtractionStatus::ManualRequired => "manual_required",
            ExtractionStatus::ManuallyEdited => "manually_edited",
            ExtractionStatus::Unknown(raw) => raw,
        }
    }

    /// Long label used by the filter select
    pub fn filter_label(&self) -> &str {
        match self {
            ExtractionStatus::AutoExtracted => "Auto Extracted",
            ExtractionStatus::ManualRequired => "Manual Required",
            ExtractionStatus::ManuallyEdited => "Manually Edited",
            ExtractionStatus::Unknown(raw) => raw,
        }
    }
}

impl Default for ExtractionStatus {
    fn default() -> Self {
        ExtractionStatus::Unknown(String::new())
    }
}

impl From<String> for ExtractionStatus {
    fn from(raw: String) -> Self {
        ExtractionStatus::parse(&raw)
    }
}

impl From<ExtractionStatus> for String {
    fn from(status: ExtractionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Structured fields extracted from (or typed into) a contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractVariables {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_fields: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ContractVariables {
    pub fn party_names(&self) -> &[String] {
        self.party_names.as_deref().unwrap_or(&[])
    }

    pub fn signatures(&self) -> &[String] {
        self.signatures.as_deref().unwrap_or(&[])
    }
}

/// Contract record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_filename: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_path: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: ContractVariables,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extraction_status: ExtractionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
}

impl Contract {
    /// Name shown to users: the uploaded file's own name, falling back to the stored one
    pub fn display_name(&self) -> &str {
        if self.original_filename.is_empty() {
            &self.filename
        } else {
            &self.original_filename
        }
    }
}

/// Server-side aggregate counts over a user's contracts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analytics {
    pub total_contracts: u64,
    pub auto_extracted: u64,
    pub manual_required: u64,
    pub manually_edited: u64,
    pub total_size: u64,
}

impl Analytics {
    /// Count for one status; unknown statuses are not aggregated by the backend
    pub fn count_for(&self, status: &ExtractionStatus) -> u64 {
        match status {
            ExtractionStatus::AutoExtracted => self.auto_extracted,
            ExtractionStatus::ManualRequired => self.manual_required,
            ExtractionStatus::ManuallyEdited => self.manually_edited,
            ExtractionStatus::Unknown(_) => 0,
        }
    }
}

/// Contract type label with its count, used by the type filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractType {
    pub contract_type: String,
    pub count: u64,
}

/// Current search and filter selection; empty strings mean "any"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractFilters {
    pub search: String,
    pub extraction_status: String,
    pub contract_type: String,
}

impl ContractFilters {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || !self.extraction_status.is_empty()
            || !self.contract_type.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Query parameters for `GET /contracts`; blank filters are left out
    pub fn query_pairs(&self, user_id: &str) -> Vec<(&'static str, String)> {
        [
            ("userId", user_id),
            ("search", self.search.as_str()),
            ("extractionStatus", self.extraction_status.as_str()),
            ("contractType", self.contract_type.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.to_string()))
        .collect()
    }
}

/// A file picked for upload, already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_docx(&self) -> bool {
        self.name.to_lowercase().ends_with(UPLOAD_EXTENSION)
    }

    pub fn is_within_size_limit(&self) -> bool {
        self.size() <= MAX_UPLOAD_BYTES
    }
}

/// Downloaded original document, ready to hand to a save-as prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub bytes: Vec<u8>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
