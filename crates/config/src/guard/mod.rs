//! Two-phase bracket around an untrusted override step.
//!
//! Responsibilities:
//! - Phase A: resolve and publish a provisional trusted connection string.
//! - Phase B: run the override step exactly once, uninspected.
//! - Phase C: re-resolve against the current environment and publish the
//!   result unconditionally, replacing whatever phase B wrote.
//!
//! Does NOT handle:
//! - How the connection string is resolved (the caller supplies `resolve_fn`).
//! - Secret resolution, which must already be bound (see `bootstrap`).
//!
//! Invariants:
//! - After `run` returns, the trust state equals what `resolve_fn` produces
//!   from the environment at that moment.
//! - An override-supplied connection string never survives phase C.
//! - A discarded override is judged against the phase A value, so an
//!   environment change between phases is never reported as one.

mod overrides;

pub use overrides::{FileOverrides, FnOverride, NoOverrides, OverrideError, OverrideStep};

use tracing::{debug, info, warn};

use crate::model::{CONNECTION_URI, ResolvedUri, Settings, TrustState};
use crate::resolver::{is_complete, preview};

/// A connection string an override step tried to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardedOverride {
    /// Credential-free rendering of the discarded value.
    pub preview: String,
    /// Whether the discarded value passed the completeness predicate.
    pub complete: bool,
}

/// Result of a guarded start-up.
#[derive(Debug, Clone)]
pub struct GuardOutcome {
    /// Final trust state.
    pub trust: TrustState,
    /// Settings after the override step, with the connection string re-asserted.
    pub settings: Settings,
    /// Set when the override step tried to replace the connection string.
    pub discarded: Option<DiscardedOverride>,
}

/// Runs an override step between two resolution passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverrideGuard;

impl OverrideGuard {
    pub fn new() -> Self {
        Self
    }

    /// Bracket `step` between two calls to `resolve_fn`.
    ///
    /// `settings` is what the step receives; the trusted connection string is
    /// written into it under `connection_uri` before the step runs.
    pub fn run<F, S>(
        &self,
        mut resolve_fn: F,
        step: &S,
        mut settings: Settings,
    ) -> Result<GuardOutcome, OverrideError>
    where
        F: FnMut() -> ResolvedUri,
        S: OverrideStep + ?Sized,
    {
        // Phase A
        let provisional = resolve_fn();
        debug!(uri = %provisional, origin = %provisional.origin(), "Provisional connection URI");
        let published = provisional.value().to_string();
        settings.insert(CONNECTION_URI, provisional.value());
        let trust = TrustState::establish(provisional);

        // Phase B
        debug!(step = step.name(), "Running override step");
        let mut settings = step.apply_overrides(settings)?;

        // Phase C
        let discarded = inspect_override(&settings, &published);
        let trusted = resolve_fn();
        if let Some(discarded) = &discarded {
            warn!(
                step = step.name(),
                preview = %discarded.preview,
                complete = discarded.complete,
                "Override attempted to replace the connection URI; environment value is authoritative"
            );
        }
        settings.insert(CONNECTION_URI, trusted.value());
        let trust = trust.reassert(trusted);
        info!(
            uri = %trust.uri(),
            origin = %trust.uri().origin(),
            "Connection URI enforced after overrides"
        );

        Ok(GuardOutcome {
            trust,
            settings,
            discarded,
        })
    }
}

/// Compare what the step left under `connection_uri` with the value phase A
/// published. An environment change between phases is not an override.
fn inspect_override(settings: &Settings, published: &str) -> Option<DiscardedOverride> {
    match settings.get(CONNECTION_URI) {
        None => None,
        Some(value) => match value.as_str() {
            Some(uri) if uri == published => None,
            Some(uri) => Some(DiscardedOverride {
                preview: preview(uri),
                complete: is_complete(uri),
            }),
            None => Some(DiscardedOverride {
                preview: "<non-string value>".to_string(),
                complete: false,
            }),
        },
    }
}
