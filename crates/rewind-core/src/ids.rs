//! Strongly-typed identifiers.

use std::fmt;

/// Opaque, stable identifier for a world entity.
///
/// Owned by the world; the core never allocates or retires these, it
/// only reads and writes the recordable attributes of the entity they
/// name. An `EntityId` appearing in an old snapshot may refer to an
/// entity that no longer exists — consumers must tolerate that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_display_and_from() {
        let id = EntityId::from(42);
        assert_eq!(format!("{id}"), "42");
        assert_eq!(id, EntityId(42));
    }

    #[test]
    fn entity_ids_order_by_value() {
        assert!(EntityId(1) < EntityId(2));
    }
}
