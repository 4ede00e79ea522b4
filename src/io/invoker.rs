//! Runs the inspection utility and validates what it reports back

use crate::io::error::{Result, StyleError};
use std::process::Command;

/// Captured result of one child process run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the process exited with a zero status
    pub success: bool,
    /// Exit code, absent when terminated by a signal
    pub code: Option<i32>,
    /// Standard output decoded as UTF-8 (lossy)
    pub stdout: String,
    /// Standard error decoded as UTF-8 (lossy)
    pub stderr: String,
}

impl ProcessOutput {
    /// Output of a successful run that only wrote `stdout`
    pub fn from_stdout(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Launches an external program and waits for it to finish
pub trait Invoker {
    /// Run `program` with `args` to completion
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::ProcessSpawn`] if the program cannot be started
    fn invoke(&self, program: &str, args: &[&str]) -> Result<ProcessOutput>;
}

/// Invoker backed by [`std::process::Command`]
///
/// Blocks until the child exits. There is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl Invoker for SystemInvoker {
    fn invoke(&self, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        log::debug!("Running {program} {}", args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| StyleError::ProcessSpawn {
                program: program.to_string(),
                source,
            })?;

        Ok(ProcessOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Accept a run only if it exited cleanly and wrote nothing to standard error
///
/// # Errors
///
/// Returns [`StyleError::ProcessStatus`] on a nonzero exit, otherwise
/// [`StyleError::ProcessStderr`] if standard error is non-empty
pub fn into_stdout(program: &str, output: ProcessOutput) -> Result<String> {
    if !output.success {
        return Err(StyleError::ProcessStatus {
            program: program.to_string(),
            code: output.code,
        });
    }

    if !output.stderr.is_empty() {
        return Err(StyleError::ProcessStderr {
            program: program.to_string(),
            stderr: output.stderr,
        });
    }

    Ok(output.stdout)
}
