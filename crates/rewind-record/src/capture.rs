//! Entity state capture: per-tick extraction and re-application.
//!
//! [`Recorder`] owns the two history streams and their independent
//! cadence accumulators. The free functions [`capture`] and [`apply`]
//! do the actual world I/O through [`WorldAccess`] and are also used by
//! the rewind player.

use indexmap::IndexMap;

use rewind_core::{EntityId, Pose, WorldAccess};

use crate::ring::HistoryRing;
use crate::snapshot::{PlayerFrame, WorldSnapshot};

/// Read the pose of every registered recordable entity.
///
/// The returned key set reflects the registry at this instant; entities
/// registered after this call simply appear in later snapshots.
pub fn capture(world: &dyn WorldAccess) -> IndexMap<EntityId, Pose> {
    let mut poses = IndexMap::new();
    for id in world.recordable() {
        if let Some(pose) = world.pose(id) {
            poses.insert(id, pose);
        }
    }
    poses
}

/// Write captured poses back to the world.
///
/// Entities referenced in the snapshot that no longer exist are
/// silently skipped — entity lifetime outside the recording window is
/// expected. Returns the number of poses actually applied.
pub fn apply(poses: &IndexMap<EntityId, Pose>, world: &mut dyn WorldAccess) -> usize {
    let mut applied = 0;
    for (&id, &pose) in poses {
        if world.set_pose(id, pose) {
            applied += 1;
        }
    }
    applied
}

/// Owns the two recording streams and decides when each one samples.
///
/// The world stream captures every recordable entity at a coarse
/// cadence; the player stream captures only the player entity at a
/// finer cadence. The two cadences are independent by design.
#[derive(Debug)]
pub struct Recorder {
    world_ring: HistoryRing<WorldSnapshot>,
    player_ring: HistoryRing<PlayerFrame>,
    world_interval: f32,
    player_interval: f32,
    world_accum: f32,
    player_accum: f32,
    player_id: Option<EntityId>,
}

impl Recorder {
    /// Create a recorder with the given stream capacities and cadences.
    ///
    /// `player_id` is the entity sampled by the fine-grained stream;
    /// `None` disables that stream (the ring stays empty).
    ///
    /// # Panics
    ///
    /// Panics if either capacity is zero (via [`HistoryRing::new`]) or
    /// either rate is not strictly positive.
    pub fn new(
        world_capacity: usize,
        world_hz: f32,
        player_capacity: usize,
        player_hz: f32,
        player_id: Option<EntityId>,
    ) -> Self {
        assert!(world_hz > 0.0, "world_hz must be > 0");
        assert!(player_hz > 0.0, "player_hz must be > 0");
        let world_interval = 1.0 / world_hz;
        let player_interval = 1.0 / player_hz;
        Self {
            world_ring: HistoryRing::new(world_capacity),
            player_ring: HistoryRing::new(player_capacity),
            world_interval,
            player_interval,
            // Primed so the first tick after start() records immediately.
            world_accum: world_interval,
            player_accum: player_interval,
            player_id,
        }
    }

    /// Clear both streams and re-prime the cadence accumulators.
    /// Called on entry to the recording phase.
    pub fn start(&mut self) {
        self.world_ring.clear();
        self.player_ring.clear();
        self.world_accum = self.world_interval;
        self.player_accum = self.player_interval;
    }

    /// Advance the recording clocks by `dt` and sample any stream whose
    /// interval has elapsed. `now` is the simulation timestamp stored in
    /// the captured entries.
    pub fn tick(&mut self, now: f32, dt: f32, world: &dyn WorldAccess) {
        self.world_accum += dt;
        if self.world_accum >= self.world_interval {
            self.world_accum -= self.world_interval;
            self.world_ring.record(WorldSnapshot {
                timestamp: now,
                poses: capture(world),
            });
        }

        self.player_accum += dt;
        if self.player_accum >= self.player_interval {
            self.player_accum -= self.player_interval;
            if let Some(id) = self.player_id {
                if let Some(pose) = world.pose(id) {
                    self.player_ring.record(PlayerFrame {
                        timestamp: now,
                        pose,
                    });
                }
            }
        }
    }

    /// The coarse world stream.
    pub fn world_ring(&self) -> &HistoryRing<WorldSnapshot> {
        &self.world_ring
    }

    /// The fine-grained player stream.
    pub fn player_ring(&self) -> &HistoryRing<PlayerFrame> {
        &self.player_ring
    }

    /// The entity sampled by the player stream, if any.
    pub fn player_id(&self) -> Option<EntityId> {
        self.player_id
    }

    /// Ratio of player cadence to world cadence, at least 1.
    ///
    /// Used by the rewind player to step the fine stream proportionally
    /// faster than the coarse stream.
    pub fn cadence_ratio(&self) -> usize {
        (self.world_interval / self.player_interval).round().max(1.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_test_utils::TestWorld;

    #[test]
    fn capture_reads_every_registered_entity() {
        let mut world = TestWorld::new();
        let a = world.register(Pose::at(1.0, 2.0));
        let b = world.register(Pose::at(3.0, 4.0));
        let poses = capture(&world);
        assert_eq!(poses.len(), 2);
        assert_eq!(poses[&a], Pose::at(1.0, 2.0));
        assert_eq!(poses[&b], Pose::at(3.0, 4.0));
    }

    #[test]
    fn apply_round_trips_a_stable_entity_set() {
        let mut world = TestWorld::new();
        let a = world.register(Pose::at(1.0, 2.0));
        let b = world.register(Pose::at(3.0, 4.0));
        let saved = capture(&world);

        world.set_pose(a, Pose::at(-9.0, -9.0));
        world.set_pose(b, Pose::at(-8.0, -8.0));

        assert_eq!(apply(&saved, &mut world), 2);
        assert_eq!(capture(&world), saved);
    }

    #[test]
    fn apply_skips_entities_that_no_longer_exist() {
        let mut world = TestWorld::new();
        let a = world.register(Pose::at(1.0, 1.0));
        let b = world.register(Pose::at(2.0, 2.0));
        let saved = capture(&world);

        world.deregister(b);
        let applied = apply(&saved, &mut world);
        assert_eq!(applied, 1);
        assert_eq!(world.pose(a), Some(Pose::at(1.0, 1.0)));
        assert_eq!(world.pose(b), None);
    }

    #[test]
    fn recorder_samples_both_streams_at_their_own_cadence() {
        let mut world = TestWorld::new();
        let player = world.register(Pose::at(0.0, 0.0));
        // World at 30 Hz, player at 60 Hz; tick at 60 Hz for one second.
        let mut recorder = Recorder::new(300, 30.0, 600, 60.0, Some(player));
        recorder.start();
        let dt = 1.0 / 60.0;
        for i in 0..60 {
            recorder.tick(i as f32 * dt, dt, &world);
        }
        // Player samples every tick; world roughly every other tick.
        assert_eq!(recorder.player_ring().len(), 60);
        let world_len = recorder.world_ring().len();
        assert!(
            (28..=32).contains(&world_len),
            "expected ~30 world samples, got {world_len}"
        );
        assert_eq!(recorder.cadence_ratio(), 2);
    }

    #[test]
    fn start_clears_previous_history() {
        let mut world = TestWorld::new();
        let player = world.register(Pose::identity());
        let mut recorder = Recorder::new(10, 30.0, 10, 60.0, Some(player));
        recorder.start();
        recorder.tick(0.0, 1.0, &world);
        assert!(!recorder.world_ring().is_empty());
        recorder.start();
        assert!(recorder.world_ring().is_empty());
        assert!(recorder.player_ring().is_empty());
    }

    #[test]
    fn recorder_without_player_keeps_player_stream_empty() {
        let mut world = TestWorld::new();
        world.register(Pose::identity());
        let mut recorder = Recorder::new(10, 30.0, 10, 60.0, None);
        recorder.start();
        recorder.tick(0.0, 1.0, &world);
        assert!(recorder.player_ring().is_empty());
        assert!(!recorder.world_ring().is_empty());
    }

    #[test]
    fn snapshots_tolerate_entities_registered_mid_recording() {
        let mut world = TestWorld::new();
        let a = world.register(Pose::at(1.0, 0.0));
        let mut recorder = Recorder::new(10, 30.0, 10, 60.0, None);
        recorder.start();
        recorder.tick(0.0, 1.0, &world);

        let b = world.register(Pose::at(2.0, 0.0));
        recorder.tick(1.0, 1.0, &world);

        let first = recorder.world_ring().at(0).unwrap();
        let second = recorder.world_ring().at(1).unwrap();
        assert!(first.poses.contains_key(&a));
        assert!(!first.poses.contains_key(&b));
        assert!(second.poses.contains_key(&b));
    }
}
