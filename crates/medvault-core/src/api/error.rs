//! API Errors
//!
//! Every failure carries the message the user should see: the backend's
//! `error` field when present, otherwise a generic per-operation message.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    NotFound(String),

    /// 400 from the backend
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build the error for a non-2xx response.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        match status {
            404 => ApiError::NotFound(message),
            400 | 422 => ApiError::Validation(message),
            _ => ApiError::Server { status, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound(_) => Some(404),
            ApiError::Validation(_) => Some(400),
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }
}
