//! Unified error type for the tickgate workspace.

use thiserror::Error;

/// Unified error type for the tickgate workspace.
///
/// One variant per failure class: startup configuration, request validation,
/// store rejection, zone resolution, data normalization, and an opaque
/// catch-all for anything the pipeline boundary must contain.
#[derive(Debug, Error)]
pub enum TickGateError {
    /// Missing or invalid startup configuration (tz database, required zone
    /// identifiers). Fatal: no query path becomes reachable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid or missing request field. Reported to the caller with zero
    /// side effects; the store is never contacted.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The external store rejected the cursor scope or failed mid-iteration.
    /// Carries the store's own diagnostic text.
    #[error("store failed: {msg}")]
    Store {
        /// Diagnostic text as produced by the store.
        msg: String,
    },

    /// A zone identifier resolved neither as a region name nor as a POSIX
    /// specification. Fatal for the startup zones, a silent fallback for
    /// per-request overrides.
    #[error("unresolved time zone: {identifier}")]
    UnresolvedZone {
        /// The identifier that failed to resolve.
        identifier: String,
    },

    /// A record's timestamp could not be normalized (unrepresentable civil
    /// time in the feed zone).
    #[error("data issue: {0}")]
    Data(String),

    /// Unknown/opaque error, contained at the query boundary.
    #[error("unknown error: {0}")]
    Other(String),
}

impl TickGateError {
    /// Helper: build a `Config` error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Helper: build a `Store` error carrying the store's diagnostic text.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store { msg: msg.into() }
    }

    /// Helper: build an `UnresolvedZone` error for an identifier.
    pub fn unresolved_zone(identifier: impl Into<String>) -> Self {
        Self::UnresolvedZone {
            identifier: identifier.into(),
        }
    }
}
