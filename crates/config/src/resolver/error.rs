//! Error and fallthrough types for configuration resolution.
//!
//! Responsibilities:
//! - Define `Fallthrough`, the non-fatal reasons a candidate was skipped.
//! - Define `ConfigError`, the fatal start-up failures.
//!
//! Invariants:
//! - Neither type ever carries a credential; previews are pre-masked.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::guard::OverrideError;
use crate::model::CandidateOrigin;

/// Why a candidate was passed over during resolution.
///
/// None of these are errors: each one moves resolution down the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallthrough {
    /// The source was not set.
    AbsentSource { origin: CandidateOrigin },
    /// The source was set but failed the completeness predicate.
    MalformedCandidate {
        origin: CandidateOrigin,
        preview: String,
    },
    /// Component assembly lacked required fields.
    MissingRequiredComponents { missing: Vec<&'static str> },
}

impl Fallthrough {
    pub fn origin(&self) -> CandidateOrigin {
        match self {
            Self::AbsentSource { origin } | Self::MalformedCandidate { origin, .. } => *origin,
            Self::MissingRequiredComponents { .. } => CandidateOrigin::Components,
        }
    }
}

impl fmt::Display for Fallthrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsentSource { origin } => write!(f, "{origin}: not set"),
            Self::MalformedCandidate { origin, preview } => {
                write!(f, "{origin}: incomplete value '{preview}'")
            }
            Self::MissingRequiredComponents { missing } => {
                write!(f, "components: missing {}", missing.join(", "))
            }
        }
    }
}

/// Fatal start-up failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The local fallback was selected but its home cannot be written.
    #[error("Local fallback database directory {path} is not writable: {source}")]
    LocalFallbackUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Override(#[from] OverrideError),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
