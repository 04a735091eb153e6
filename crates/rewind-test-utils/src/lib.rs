//! Test utilities for Rewind development.
//!
//! Provides [`TestWorld`], an in-memory [`WorldAccess`] implementation
//! with an explicit register/deregister lifecycle, standing in for the
//! host engine's scene graph in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use indexmap::IndexMap;
use smallvec::SmallVec;

use rewind_core::{EntityId, Pose, WorldAccess};

/// In-memory world backed by an `IndexMap` registry.
///
/// Entities are handed out sequential IDs on registration. Deregistered
/// entities answer `None`/`false` to pose access, exactly like a scene
/// object that has been destroyed.
#[derive(Debug, Default)]
pub struct TestWorld {
    entities: IndexMap<EntityId, Pose>,
    next_id: u64,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a recordable entity at the given pose; returns its ID.
    pub fn register(&mut self, pose: Pose) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, pose);
        id
    }

    /// Destroy an entity. Subsequent pose access returns `None`.
    pub fn deregister(&mut self, id: EntityId) {
        self.entities.shift_remove(&id);
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl WorldAccess for TestWorld {
    fn recordable(&self) -> Vec<EntityId> {
        self.entities.keys().copied().collect()
    }

    fn pose(&self, id: EntityId) -> Option<Pose> {
        self.entities.get(&id).copied()
    }

    fn set_pose(&mut self, id: EntityId, pose: Pose) -> bool {
        match self.entities.get_mut(&id) {
            Some(slot) => {
                *slot = pose;
                true
            }
            None => false,
        }
    }

    fn within_radius(&self, center: [f32; 2], radius: f32) -> SmallVec<[EntityId; 8]> {
        let center_pose = Pose::at(center[0], center[1]);
        self.entities
            .iter()
            .filter(|(_, pose)| pose.planar_distance(&center_pose) <= radius)
            .map(|(&id, _)| id)
            .collect()
    }
}
