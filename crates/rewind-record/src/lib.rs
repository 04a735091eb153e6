//! World-state recording and reverse playback.
//!
//! Two independent, capacity-bounded history streams are kept while the
//! game is live: coarse world snapshots (every recordable entity, 30 Hz
//! by default) and fine-grained player frames (60 Hz by default). The
//! [`RewindPlayer`] plays both back in reverse at a configurable speed,
//! bounded by an elapsed-time budget.
//!
//! Recording and playback are mutually exclusive in time — the phase
//! machine in `rewind-game` records only while Playing and steps the
//! player only while Rewinding.

#![forbid(unsafe_code)]

pub mod capture;
pub mod rewind;
pub mod ring;
pub mod snapshot;

pub use capture::Recorder;
pub use rewind::{RewindPlayer, StepOutcome};
pub use ring::HistoryRing;
pub use snapshot::{PlayerFrame, WorldSnapshot};
