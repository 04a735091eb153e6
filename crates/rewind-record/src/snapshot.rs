//! Snapshot value types for the two history streams.

use indexmap::IndexMap;

use rewind_core::{EntityId, Pose};

/// One timestamped capture of every recordable entity's pose.
///
/// Immutable once recorded; owned exclusively by the history ring until
/// evicted. The key set may differ between snapshots taken at different
/// times — entities come and go, and that is not an invariant violation.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    /// Simulation time at capture, seconds. Monotonically increasing
    /// across one recording phase.
    pub timestamp: f32,
    /// Pose per entity. `IndexMap` keeps iteration deterministic.
    pub poses: IndexMap<EntityId, Pose>,
}

impl WorldSnapshot {
    /// An empty snapshot at the given time.
    pub fn empty(timestamp: f32) -> Self {
        Self {
            timestamp,
            poses: IndexMap::new(),
        }
    }
}

/// One fine-grained capture of the player entity alone.
///
/// The player stream records at twice the world cadence so reverse
/// playback of the player stays smooth while the rest of the world
/// steps coarsely. The two streams are deliberately separate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerFrame {
    /// Simulation time at capture, seconds.
    pub timestamp: f32,
    /// The player's pose.
    pub pose: Pose,
}
