//! The game's macro phases.

use std::fmt;

/// One round's macro phase. Exactly one is current at any time; the
/// [`GameDirector`](crate::GameDirector) owns the current value and
/// every transition is explicit and observable via the phase-change
/// event bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Idle before a round starts, or after a restart.
    Menu,
    /// Live play: the recorder samples both history streams.
    Playing,
    /// Reverse playback of recorded history.
    Rewinding,
    /// The countdown window in which the hazard can still be defused.
    Investigating,
    /// A mini-game holds the floor; the world clock is paused.
    MiniGame,
    /// The countdown expired; restart is scheduled on the real clock.
    GameOver,
    /// The hazard was prevented; advance is scheduled on the real clock.
    Victory,
}

impl GamePhase {
    /// Whether the scaled simulation clock stands still in this phase.
    ///
    /// The pause is global, not per-entity: only one mini-game is ever
    /// active at a time, so a single flag suffices.
    pub fn pauses_clock(&self) -> bool {
        matches!(self, Self::MiniGame | Self::GameOver | Self::Victory)
    }

    /// Whether elapsed game time accumulates in this phase.
    pub fn accumulates_game_time(&self) -> bool {
        matches!(self, Self::Playing | Self::Investigating)
    }

    /// Whether a round is in progress at all.
    pub fn is_round_active(&self) -> bool {
        matches!(self, Self::Playing | Self::Rewinding | Self::Investigating)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Menu => "menu",
            Self::Playing => "playing",
            Self::Rewinding => "rewinding",
            Self::Investigating => "investigating",
            Self::MiniGame => "mini-game",
            Self::GameOver => "game-over",
            Self::Victory => "victory",
        };
        write!(f, "{name}")
    }
}
