//! Event payloads published by the director.
//!
//! Each payload type gets its own [`EventBus`](rewind_core::EventBus)
//! on the director, so consumers subscribe only to what they render or
//! react to.

use crate::hazard::HazardKind;
use crate::minigame::MiniGameKind;
use crate::phase::GamePhase;

/// The current phase changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseChanged {
    pub from: GamePhase,
    pub to: GamePhase,
}

/// The investigation countdown reached zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerExpired;

/// Reverse playback finished (naturally or forced).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewindCompleted;

/// A mini-game session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MiniGameCompleted {
    pub kind: MiniGameKind,
    pub success: bool,
}

/// The hazard warning banner: the hazard strikes in
/// `hazard_warning_time` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazardWarning {
    pub kind: HazardKind,
    pub location: [f32; 2],
}

/// The round's hazard executed its damage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazardTriggered {
    pub kind: HazardKind,
    pub location: [f32; 2],
}

/// The round's hazard was defused before it could recur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardPrevented {
    pub kind: HazardKind,
}
