//! API Errors
//!
//! Everything the HTTP boundary can fail with. Callers do not branch on the
//! variant; it is kept for logging.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be assembled, so nothing was sent
    #[error("could not build request for {url}: {message}")]
    Request { url: String, message: String },

    /// The request never produced a response (network down, CORS, DNS...)
    #[error("{method} {url} failed: {message}")]
    Transport {
        method: &'static str,
        url: String,
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// The response body did not match the expected shape
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

#[cfg(test)]
impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
