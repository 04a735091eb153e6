//! Error types for the Rewind game core.
//!
//! The taxonomy is small by design: out-of-range history access is a
//! programmer error surfaced loudly; stale entity references and
//! wrong-phase calls are expected conditions handled by fallback, not
//! by error values (see the phase machine docs in `rewind-game`).

use std::error::Error;
use std::fmt;

/// Errors from history ring access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Random access past the stored range. Never silently clamped —
    /// an index the caller computed wrongly is a bug to surface.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of entries currently stored.
        len: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "history index {index} out of range (len {len})")
            }
        }
    }
}

impl Error for StoreError {}

/// Errors from the rewind player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewindError {
    /// `begin` was called on an empty store. Callers that cannot rule
    /// this out should treat it as "nothing to rewind" and move on.
    EmptyStore,
    /// `step` was called without a successful `begin`.
    NotRewinding,
}

impl fmt::Display for RewindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStore => write!(f, "no snapshots recorded"),
            Self::NotRewinding => write!(f, "rewind player is not active"),
        }
    }
}

impl Error for RewindError {}
