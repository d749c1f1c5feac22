//! Subprocess seam used for redistributable installers and their undo
//! invocations.
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Failure detail from a blocking subprocess invocation.
#[derive(Clone, Debug)]
pub struct ProcessFailure {
    /// Exit code when the process ran to completion; `None` when it never
    /// started or was terminated by a signal.
    pub exit_code: Option<i32>,
    pub message: String,
}

impl fmt::Display for ProcessFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exit_code {
            Some(code) => write!(f, "{} (exit {code})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Runs one external program to completion. The executor blocks on the
/// call; the result maps directly to the operation outcome.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, program: &Path, arguments: &[String]) -> Result<(), ProcessFailure>;
}

/// Spawns through `std::process::Command` and maps a nonzero exit status
/// to a failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &Path, arguments: &[String]) -> Result<(), ProcessFailure> {
        let status = Command::new(program)
            .args(arguments)
            .status()
            .map_err(|e| ProcessFailure {
                exit_code: None,
                message: format!("spawn {}: {e}", program.display()),
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(ProcessFailure {
                exit_code: status.code(),
                message: format!("{} exited with failure", program.display()),
            })
        }
    }
}
