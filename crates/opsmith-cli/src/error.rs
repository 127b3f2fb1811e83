//! Error handling for the Opsmith CLI.
//!
//! Structured errors with user-facing messages, actionable suggestions,
//! full source chains, and exit-code mapping.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::error;

use opsmith_core::error::{ErrorCategory, OpsmithError};
use opsmith_core::domain::DomainError;
use opsmith_core::pipeline::PipelineError;
use opsmith_core::scaffold::ScaffoldError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `opsmith-core`.
    #[error("{0}")]
    Core(#[from] OpsmithError),

    /// A supporting file (boilerplate header, output file) could not be
    /// read or written.
    #[error("cannot {action} {}", path.display())]
    File {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Core(err.into())
    }
}

impl From<ScaffoldError> for CliError {
    fn from(err: ScaffoldError) -> Self {
        Self::Core(err.into())
    }
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        Self::Core(err.into())
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => match core.category() {
                ErrorCategory::Validation => vec![
                    "Group must be a single lowercase word, e.g. crew".into(),
                    "Version must look like v1, v1beta1 or v2alpha1".into(),
                    "Kind must start with an uppercase letter, e.g. FirstMate".into(),
                ],
                ErrorCategory::Scaffold => vec![
                    "Check permissions on the output directory".into(),
                    "Already-written files are not rolled back; inspect the partial output".into(),
                ],
                ErrorCategory::External => vec![
                    "Ensure controller-gen is installed and in your PATH".into(),
                    "Check the generator output above for details".into(),
                ],
                ErrorCategory::Configuration => {
                    vec!["Check the flags passed to this invocation".into()]
                }
                ErrorCategory::Internal => {
                    vec!["This is a bug, please report it".into()]
                }
            },
            Self::File { path, .. } => vec![
                format!("Check that '{}' exists and is accessible", path.display()),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Argument-parse failures exit 2 (handled by clap in `main`); every
    /// error that reaches this point is an execution failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Emit a structured log event for this error.
    pub fn log(&self) {
        match self {
            Self::Core(core) => error!(category = ?core.category(), "{core}"),
            Self::File { action, path, .. } => {
                error!(action, path = %path.display(), "file operation failed");
            }
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "✗".red().bold(), "Error:".red().bold()));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        let mut source = self.source();
        while let Some(err) = source {
            output.push_str(&format!("  {} {err}\n", "caused by:".dimmed()));
            source = err.source();
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for s in suggestions {
                output.push_str(&format!("  • {s}\n"));
            }
        }

        output
    }

    /// Format the error without ANSI codes (stderr is not a terminal).
    pub fn format_plain(&self) -> String {
        let mut output = format!("Error: {self}\n");

        let mut source = self.source();
        while let Some(err) = source {
            output.push_str(&format!("  caused by: {err}\n"));
            source = err.source();
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("Suggestions:\n");
            for s in suggestions {
                output.push_str(&format!("  - {s}\n"));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_error() -> CliError {
        let mut r = opsmith_core::Resource {
            group: "Crew".into(),
            version: "v1".into(),
            kind: "FirstMate".into(),
            ..Default::default()
        };
        r.validate().unwrap_err().into()
    }

    #[test]
    fn core_errors_exit_one() {
        assert_eq!(validation_error().exit_code(), 1);
    }

    #[test]
    fn plain_format_names_the_field() {
        let msg = validation_error().format_plain();
        assert!(msg.contains("group"));
        assert!(msg.contains("Suggestions:"));
    }

    #[test]
    fn file_error_names_the_path() {
        let err = CliError::File {
            action: "read",
            path: PathBuf::from("hack/boilerplate.go.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.format_plain().contains("hack/boilerplate.go.txt"));
        assert!(err.format_plain().contains("caused by:"));
    }
}
