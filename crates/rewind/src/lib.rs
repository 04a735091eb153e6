//! Rewind: deterministic history recording, reverse playback, and
//! round control for tick-driven 2D escape games.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Rewind sub-crates. For most users, adding `rewind` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rewind::prelude::*;
//! use rewind_test_utils::TestWorld;
//!
//! // A world with one recordable player entity.
//! let mut world = TestWorld::new();
//! let player = world.register(Pose::at(0.0, 0.0));
//!
//! // Run a round with the stock tuning.
//! let config = GameConfig::default();
//! let mut director = GameDirector::new(config, world, Some(player)).unwrap();
//! let phases = director.subscribe_phase();
//! director.start_game();
//!
//! // Drive the loop at 60 Hz for one second of live play.
//! for i in 0..60 {
//!     let pose = Pose::at(i as f32 * 0.1, 0.0);
//!     let _ = director.world_mut().set_pose(player, pose);
//!     director.tick(1.0 / 60.0);
//! }
//!
//! assert_eq!(director.phase(), GamePhase::Playing);
//! assert!(!director.recorder().world_ring().is_empty());
//! assert_eq!(phases.drain().len(), 1); // Menu -> Playing
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rewind-core` | IDs, poses, world access, event buses, errors |
//! | [`record`] | `rewind-record` | History rings, the recorder, reverse playback |
//! | [`game`] | `rewind-game` | Phases, countdown, hazards, mini-games, the director |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`rewind-core`).
pub use rewind_core as types;

/// History recording and reverse playback (`rewind-record`).
pub use rewind_record as record;

/// Round control: phases, countdown, hazards, mini-games
/// (`rewind-game`).
pub use rewind_game as game;

/// The most commonly used types, re-exported flat.
pub mod prelude {
    pub use rewind_core::{EntityId, EventBus, Pose, Subscription, WorldAccess};
    pub use rewind_game::{
        CountdownTimer, GameConfig, GameDirector, GamePhase, HazardCatalog, HazardKind,
        MiniGameCatalog, MiniGameKind, Severity, TimerState,
    };
    pub use rewind_record::{HistoryRing, Recorder, RewindPlayer, StepOutcome};
}
