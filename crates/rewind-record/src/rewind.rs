//! Reverse playback of recorded history.
//!
//! [`RewindPlayer`] walks the two history streams backwards, applying
//! each visited entry to the world. Playback ends when the cursor runs
//! past the oldest retained snapshot **or** when an elapsed-time budget
//! is exhausted — whichever comes first. The double condition is
//! intentional: the budget is a safety bound on how long the rewind
//! phase can hold the game, not just a progress marker.

use rewind_core::{RewindError, WorldAccess};

use crate::capture::{apply, Recorder};

/// Result of one [`RewindPlayer::step`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// More history remains and the budget is not exhausted.
    InProgress,
    /// Playback finished this step; the player is no longer active.
    Done,
}

/// Drives reverse playback over a [`Recorder`]'s streams.
///
/// Driven by repeated `step` calls from the owning control loop, one
/// per tick. Stepping must never overlap recording on the same streams;
/// the phase machine guarantees the two phases are mutually exclusive.
#[derive(Debug)]
pub struct RewindPlayer {
    world_cursor: isize,
    player_cursor: isize,
    elapsed: f32,
    budget: f32,
    active: bool,
}

impl RewindPlayer {
    /// An inactive player. Call [`begin`](RewindPlayer::begin) to arm it.
    pub fn new() -> Self {
        Self {
            world_cursor: -1,
            player_cursor: -1,
            elapsed: 0.0,
            budget: 0.0,
            active: false,
        }
    }

    /// Arm playback at the newest recorded snapshot.
    ///
    /// `budget` is the wall of simulation time playback may consume.
    ///
    /// # Errors
    ///
    /// [`RewindError::EmptyStore`] if nothing was recorded; callers
    /// treat that as "nothing to rewind" and skip the phase.
    pub fn begin(&mut self, recorder: &Recorder, budget: f32) -> Result<(), RewindError> {
        let world_latest = recorder
            .world_ring()
            .latest_index()
            .ok_or(RewindError::EmptyStore)?;
        self.world_cursor = world_latest as isize;
        self.player_cursor = recorder
            .player_ring()
            .latest_index()
            .map_or(-1, |i| i as isize);
        self.elapsed = 0.0;
        self.budget = budget;
        self.active = true;
        Ok(())
    }

    /// Apply the entries at the cursors, then move both cursors back by
    /// `ceil(speed)` entries (the player stream by the cadence ratio
    /// more). Returns [`StepOutcome::Done`] when history or budget is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// [`RewindError::NotRewinding`] if called without a successful
    /// [`begin`](RewindPlayer::begin).
    pub fn step(
        &mut self,
        dt: f32,
        speed: f32,
        recorder: &Recorder,
        world: &mut dyn WorldAccess,
    ) -> Result<StepOutcome, RewindError> {
        if !self.active {
            return Err(RewindError::NotRewinding);
        }

        if self.world_cursor >= 0 {
            let snapshot = recorder
                .world_ring()
                .at(self.world_cursor as usize)
                .expect("cursor bounded by latest_index");
            apply(&snapshot.poses, world);
        }
        if self.player_cursor >= 0 {
            if let Some(id) = recorder.player_id() {
                let frame = recorder
                    .player_ring()
                    .at(self.player_cursor as usize)
                    .expect("cursor bounded by latest_index");
                world.set_pose(id, frame.pose);
            }
        }

        let skip = speed.ceil().max(1.0) as isize;
        let ratio = recorder.cadence_ratio() as isize;
        // Cursors clamp at -1: "fully rewound", never further.
        self.world_cursor = (self.world_cursor - skip).max(-1);
        self.player_cursor = (self.player_cursor - skip * ratio).max(-1);
        self.elapsed += dt;

        if self.world_cursor < 0 || self.elapsed >= self.budget {
            self.active = false;
            return Ok(StepOutcome::Done);
        }
        Ok(StepOutcome::InProgress)
    }

    /// Forced early termination: drop cursors and deactivate without
    /// applying anything further. Safe to call when already inactive.
    pub fn force_complete(&mut self) {
        self.active = false;
        self.world_cursor = -1;
        self.player_cursor = -1;
    }

    /// Whether a rewind is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current world-stream cursor (-1 once fully rewound).
    pub fn world_cursor(&self) -> isize {
        self.world_cursor
    }
}

impl Default for RewindPlayer {
    fn default() -> Self {
        Self::new()
    }
}
