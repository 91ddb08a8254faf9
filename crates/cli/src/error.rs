//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish outcomes.
//! - Map refusals raised by commands to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 3 is reserved for a refused local fallback.

use thiserror::Error;

/// Structured exit codes for bootguard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unreadable override file, unwritable home, bad arguments.
    GeneralError = 1,

    /// Only the local fallback database resolved and a networked one was required.
    ///
    /// Deployment scripts should fix the database environment and restart.
    LocalFallback = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Raised by `check --require-network` when the local fallback was selected.
#[derive(Error, Debug)]
#[error("No networked database configured; resolved to the local fallback {uri}")]
pub struct LocalFallbackRefused {
    pub uri: String,
}

/// Extension trait to extract exit codes from anyhow errors.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self.downcast_ref::<LocalFallbackRefused>().is_some() {
            return ExitCode::LocalFallback;
        }
        ExitCode::GeneralError
    }
}
