//! Unified error handling for Opsmith Core.
//!
//! Each subsystem has its own error enum ([`DomainError`],
//! [`ScaffoldError`], [`PipelineError`]); this module wraps them into a
//! single root type. Every wrapping layer adds exactly one line of context
//! and re-raises — nothing is swallowed.

use thiserror::Error;

use crate::domain::DomainError;
use crate::pipeline::PipelineError;
use crate::scaffold::ScaffoldError;

/// Root error type for Opsmith Core operations.
#[derive(Debug, Error)]
pub enum OpsmithError {
    /// Malformed Group/Version/Kind or configuration input.
    #[error("validation failed: {0}")]
    Domain(#[from] DomainError),

    /// Template rendering or file writing failed mid-run.
    #[error("scaffold failed: {0}")]
    Scaffold(#[from] ScaffoldError),

    /// External generator invocation or document parsing failed.
    #[error("pipeline failed: {0}")]
    Pipeline(#[from] PipelineError),

    /// Configuration or setup errors outside the domain model.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl OpsmithError {
    /// Error category for display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Scaffold(_) => ErrorCategory::Scaffold,
            Self::Pipeline(_) => ErrorCategory::External,
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Scaffold,
    External,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type OpsmithResult<T> = Result<T, OpsmithError>;
