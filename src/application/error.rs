// src/application/error.rs
use crate::domain::errors::DomainError;
use std::collections::BTreeMap;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Field name to message, as returned for form validation failures.
pub type FieldErrors = BTreeMap<String, String>;

/// Summary message returned alongside a field error map.
pub const INVALID_FIELDS_MESSAGE: &str = "Please correct the highlighted fields";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid fields: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    InvalidFields(FieldErrors),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A downstream auth, data, storage or workspace call failed.
    #[error("remote service failure: {0}")]
    RemoteService(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteService(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Client-facing message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Domain(err) => err.message().to_string(),
            Self::InvalidFields(_) => INVALID_FIELDS_MESSAGE.to_string(),
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::Unauthorized(msg)
            | Self::RemoteService(msg)
            | Self::Infrastructure(msg) => msg.clone(),
        }
    }
}
