//! Pipeline error type.

use thiserror::Error;

/// Errors raised by the document-stream pipeline.
///
/// None of these are retried: a transient external failure is surfaced
/// immediately to the caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The external generator could not be launched or exited non-zero.
    #[error("failed to run {tool}: {reason}")]
    ExternalTool {
        tool: String,
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The external generator did not exit within the deadline.
    #[error("{tool} did not exit within {seconds}s")]
    Timeout { tool: String, seconds: u64 },

    /// A document stream could not be parsed.
    #[error("failed to parse {source_name}: {reason}")]
    Parse { source_name: String, reason: String },
}

impl PipelineError {
    pub(crate) fn parse(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
