//! Scaffold engine error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while executing a scaffold run.
///
/// Any single unit's failure is fatal to the run: already-written files are
/// NOT rolled back, so callers must treat a failed run as needing manual
/// cleanup or a re-run (skipped-if-exists units make re-runs safe).
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A template unit failed to produce its body. Aborts the remaining
    /// units and names the failing unit.
    #[error("failed to render unit '{unit}': {reason}")]
    Render { unit: &'static str, reason: String },

    /// A filesystem operation failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
