//! Trust state written by the override guard.

use std::fmt;

use serde::Serialize;

use super::uri::ResolvedUri;

/// Which guard phase last published the trusted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustPhase {
    /// Published before the override step ran.
    Provisional,
    /// Re-asserted after the override step; frozen from here on.
    Final,
}

impl fmt::Display for TrustPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provisional => f.write_str("provisional"),
            Self::Final => f.write_str("final"),
        }
    }
}

/// The trusted connection string and the phase that wrote it.
///
/// Only the guard constructs or advances a `TrustState`. Once `Final`,
/// there is no way to replace the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustState {
    uri: ResolvedUri,
    phase: TrustPhase,
}

impl TrustState {
    /// Phase A: publish the provisional value.
    pub(crate) fn establish(uri: ResolvedUri) -> Self {
        Self {
            uri,
            phase: TrustPhase::Provisional,
        }
    }

    /// Phase C: overwrite unconditionally and freeze.
    pub(crate) fn reassert(self, uri: ResolvedUri) -> Self {
        Self {
            uri,
            phase: TrustPhase::Final,
        }
    }

    pub fn uri(&self) -> &ResolvedUri {
        &self.uri
    }

    pub fn phase(&self) -> TrustPhase {
        self.phase
    }

    pub fn is_final(&self) -> bool {
        self.phase == TrustPhase::Final
    }
}
