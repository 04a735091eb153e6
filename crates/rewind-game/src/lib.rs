//! Round control for the rewind game: the phase machine, investigation
//! countdown, hazard lifecycle, mini-game dispatch, and the
//! [`GameDirector`] that ties them to the recording and playback
//! machinery from `rewind-record`.

#![forbid(unsafe_code)]

pub mod config;
pub mod director;
pub mod events;
pub mod hazard;
pub mod minigame;
pub mod phase;
pub mod schedule;
pub mod timer;

pub use config::{ConfigError, GameConfig};
pub use director::GameDirector;
pub use events::{
    HazardPrevented, HazardTriggered, HazardWarning, MiniGameCompleted, PhaseChanged,
    RewindCompleted, TimerExpired,
};
pub use hazard::{ActiveHazard, Hazard, HazardCatalog, HazardKind, HazardState};
pub use minigame::{
    Board, CableBoard, CableOutcome, MiniGameCatalog, MiniGameDispatch, MiniGameKind,
    MiniGameSession, MiniGameSpec, NumberPad, SwitchBoard,
};
pub use phase::GamePhase;
pub use schedule::{Clock, Scheduler};
pub use timer::{CountdownTimer, Severity, TimerState};
