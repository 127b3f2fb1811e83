//! External code generator adapter: runs `controller-gen` as a child
//! process with stdout captured and stderr passed through.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use tracing::{debug, instrument};
use wait_timeout::ChildExt;

use opsmith_core::pipeline::{CodeGenerator, PipelineError};

const DEFAULT_BINARY: &str = "controller-gen";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs the external generator binary once per call.
///
/// Stderr is inherited so the tool's own diagnostics reach the user
/// unchanged. The child is killed if it does not exit within the deadline.
#[derive(Debug, Clone)]
pub struct ControllerGenProcess {
    binary: String,
    timeout: Duration,
}

impl ControllerGenProcess {
    pub fn new() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a different binary name or path (testing, vendored tools).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            ..Self::new()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn launch_error(&self, reason: &str, source: Option<std::io::Error>) -> PipelineError {
        PipelineError::ExternalTool {
            tool: self.binary.clone(),
            reason: reason.to_string(),
            source,
        }
    }
}

impl Default for ControllerGenProcess {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for ControllerGenProcess {
    #[instrument(skip_all, fields(binary = %self.binary))]
    fn generate(&self, args: &[String]) -> Result<Vec<u8>, PipelineError> {
        debug!(?args, "spawning generator");

        let mut child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.launch_error("could not launch", Some(e)))?;

        // Drain stdout on a separate thread so a chatty child cannot fill
        // the pipe and block before the wait below observes it.
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| self.launch_error("stdout was not captured", None))?;
        let reader = thread::spawn(move || {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).map(|_| buf)
        });

        let status = match child
            .wait_timeout(self.timeout)
            .map_err(|e| self.launch_error("wait failed", Some(e)))?
        {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(PipelineError::Timeout {
                    tool: self.binary.clone(),
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        let output = reader
            .join()
            .map_err(|_| self.launch_error("stdout reader panicked", None))?
            .map_err(|e| self.launch_error("could not read stdout", Some(e)))?;

        if !status.success() {
            return Err(self.launch_error(&format!("exited with {status}"), None));
        }

        debug!(bytes = output.len(), "generator finished");
        Ok(output)
    }
}
