//! Domain error type.

use thiserror::Error;

/// Errors raised while validating domain values.
///
/// All variants are:
/// - Locally detectable before any I/O happens
/// - Never retried
/// - Surfaced verbatim to the caller with the failing field named
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field of the resource descriptor or configuration is malformed.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },
}

impl DomainError {
    /// Shorthand constructor used throughout `resource.rs`.
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } => field,
        }
    }
}
