//! The [`Pose`] value type: everything the recorder captures per entity.

/// Position, orientation, and activity of one entity at one instant.
///
/// A plain value type, copied freely. Orientation is a single angle in
/// radians about the out-of-screen axis — the game world is 2D, but the
/// position keeps a `z` component for layering, matching the source
/// data it is captured from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// World position `[x, y, z]`.
    pub position: [f32; 3],
    /// Rotation about the z axis, radians.
    pub angle: f32,
    /// Whether the entity is active (visible / simulated).
    pub active: bool,
}

impl Pose {
    /// A pose at the origin, unrotated, active.
    pub fn identity() -> Self {
        Self {
            position: [0.0; 3],
            angle: 0.0,
            active: true,
        }
    }

    /// Pose at `[x, y, 0]`, unrotated, active.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: [x, y, 0.0],
            ..Self::identity()
        }
    }

    /// Planar (xy) distance to another pose. Used for hazard radius
    /// checks; the z component is layering only and is ignored.
    pub fn planar_distance(&self, other: &Pose) -> f32 {
        let dx = self.position[0] - other.position[0];
        let dy = self.position[1] - other.position[1];
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}
