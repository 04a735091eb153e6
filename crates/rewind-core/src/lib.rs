//! Core types and boundary traits for the Rewind game core.
//!
//! This crate defines the vocabulary shared by all Rewind sub-crates:
//! strongly-typed identifiers, the [`Pose`] value type, the
//! [`WorldAccess`] boundary trait behind which all engine-side concerns
//! (rendering, physics, input decoding) live, the typed [`EventBus`],
//! and the error taxonomy.

#![forbid(unsafe_code)]

pub mod error;
pub mod events;
pub mod ids;
pub mod pose;
pub mod world;

pub use error::{RewindError, StoreError};
pub use events::{EventBus, Subscription};
pub use ids::EntityId;
pub use pose::Pose;
pub use world::WorldAccess;
