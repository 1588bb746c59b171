//! Domain errors for directory operations

use thiserror::Error;

/// Errors returned by directory mutations and lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A required field is missing, empty, or malformed
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    /// The referenced farmer or order does not exist
    #[error("{0} not found")]
    NotFound(String),
}

impl DirectoryError {
    pub fn missing(field: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: format!("{} is required", field),
        }
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(resource.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
