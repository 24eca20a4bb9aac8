//! External command invocation seam
//!
//! The pipeline never talks to a cluster itself; it shells out to kubectl
//! and treats it as an opaque byte-producing collaborator. The seam is a
//! narrow trait so the driver can be tested against a scripted runner.

use std::io;
use std::process::Command;

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Combined stdout and stderr bytes.
    pub bytes: Vec<u8>,
    /// Whether the command exited successfully.
    pub success: bool,
}

/// Runs an external command and captures its combined output.
pub trait CommandRunner {
    /// Invoke the tool with `args`, blocking until it exits.
    ///
    /// Returns `Err` only when the command could not be launched or read;
    /// a command that runs and fails reports `success = false` instead.
    fn combined_output(&self, args: &[String]) -> io::Result<RunOutput>;
}

/// [`CommandRunner`] backed by a real child process.
#[derive(Debug, Clone)]
pub struct KubectlRunner {
    program: String,
}

impl KubectlRunner {
    /// Create a runner invoking the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for KubectlRunner {
    fn default() -> Self {
        Self::new("kubectl")
    }
}

impl CommandRunner for KubectlRunner {
    fn combined_output(&self, args: &[String]) -> io::Result<RunOutput> {
        tracing::debug!(program = %self.program, ?args, "invoking external command");
        let output = Command::new(&self.program).args(args).output()?;
        let mut bytes = output.stdout;
        bytes.extend_from_slice(&output.stderr);
        Ok(RunOutput {
            bytes,
            success: output.status.success(),
        })
    }
}
