//! Domain error types.

use thiserror::Error;

use crate::profile::ProfileField;

/// Errors that can occur while building profile data.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more profile fields were empty.
    #[error("Missing profile fields: {}", join_fields(.0))]
    MissingProfileFields(Vec<ProfileField>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn join_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ProfileField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for domain results.
pub type Result<T> = std::result::Result<T, DomainError>;
