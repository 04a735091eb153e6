//! The [`WorldAccess`] boundary trait.
//!
//! Everything the core needs from the host engine — and nothing more.
//! The engine side (scene graph, physics, rendering) implements this
//! trait; the core only calls it. Entity lifetime is owned entirely by
//! the implementor: the core never creates or destroys entities.

use smallvec::SmallVec;

use crate::ids::EntityId;
use crate::pose::Pose;

/// Read/write access to the recordable portion of the game world.
///
/// # Registry contract
///
/// [`recordable`](WorldAccess::recordable) must be registry-backed:
/// entities register on creation and deregister on destruction, so
/// enumeration is O(registered), not a per-tick scan of the whole
/// scene. The set may change between ticks; snapshots taken at
/// different times may carry different key sets.
///
/// # Stale references
///
/// [`pose`](WorldAccess::pose) and [`set_pose`](WorldAccess::set_pose)
/// return `None`/`false` for entities that no longer exist. That is an
/// expected-absence condition, not an error: old snapshots outlive
/// entities by design.
pub trait WorldAccess {
    /// Enumerate the currently registered recordable entities.
    fn recordable(&self) -> Vec<EntityId>;

    /// Read an entity's pose, or `None` if it no longer exists.
    fn pose(&self, id: EntityId) -> Option<Pose>;

    /// Write an entity's pose. Returns `false` (and does nothing) if
    /// the entity no longer exists.
    fn set_pose(&mut self, id: EntityId, pose: Pose) -> bool;

    /// Entities whose planar distance from `center` is within `radius`.
    ///
    /// Used for hazard damage application. Inactive entities are still
    /// reported; the caller decides what "hit" means.
    fn within_radius(&self, center: [f32; 2], radius: f32) -> SmallVec<[EntityId; 8]>;
}
