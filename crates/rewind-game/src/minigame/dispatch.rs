//! Mini-game session lifecycle.

use rand_chacha::ChaCha8Rng;

use super::cables::CableBoard;
use super::sequence::NumberPad;
use super::switches::SwitchBoard;
use super::{MiniGameCatalog, MiniGameKind, MiniGameSpec};

/// The interactive surface of the active session.
#[derive(Debug)]
pub enum Board {
    Switches(SwitchBoard),
    Cables(CableBoard),
    Sequence(NumberPad),
}

/// One running mini-game: its spec, board, and unscaled time budget.
#[derive(Debug)]
pub struct MiniGameSession {
    spec: MiniGameSpec,
    board: Board,
    time_remaining: f32,
}

impl MiniGameSession {
    /// The kind being played.
    pub fn kind(&self) -> MiniGameKind {
        self.spec.kind
    }

    /// The session's static parameters.
    pub fn spec(&self) -> &MiniGameSpec {
        &self.spec
    }

    /// The board, for inspection and rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Unscaled seconds left before the session times out.
    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    fn solved(&self) -> bool {
        match &self.board {
            Board::Switches(b) => b.solved(),
            Board::Cables(b) => b.solved(),
            Board::Sequence(b) => b.solved(),
        }
    }
}

/// Owns at most one session at a time and reports each session's result
/// exactly once, either through an input method (success) or through
/// [`tick`](MiniGameDispatch::tick) (timeout).
#[derive(Debug)]
pub struct MiniGameDispatch {
    catalog: MiniGameCatalog,
    session: Option<MiniGameSession>,
}

impl MiniGameDispatch {
    /// A dispatch drawing from `catalog`.
    pub fn new(catalog: MiniGameCatalog) -> Self {
        Self {
            catalog,
            session: None,
        }
    }

    /// Start a session of `kind`, replacing any session in progress.
    ///
    /// A kind missing from the catalog falls back to a random catalog
    /// entry. Returns the kind actually started, or `None` when the
    /// catalog is empty.
    pub fn start(&mut self, kind: MiniGameKind, rng: &mut ChaCha8Rng) -> Option<MiniGameKind> {
        let spec = match self.catalog.get(kind) {
            Some(spec) => spec.clone(),
            None => self.catalog.pick(rng)?.clone(),
        };

        let board = match spec.kind {
            MiniGameKind::SwitchActivation => Board::Switches(SwitchBoard::new(spec.difficulty)),
            MiniGameKind::CableMatch => Board::Cables(CableBoard::new(spec.difficulty, rng)),
            MiniGameKind::NumberSequence => Board::Sequence(NumberPad::new(spec.difficulty, rng)),
        };
        let started = spec.kind;
        self.session = Some(MiniGameSession {
            time_remaining: spec.time_limit,
            spec,
            board,
        });
        Some(started)
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&MiniGameSession> {
        self.session.as_ref()
    }

    /// Advance the session timer by `dt` unscaled seconds.
    ///
    /// Returns `Some(false)` when the session just timed out (the
    /// session is released), `None` otherwise.
    pub fn tick(&mut self, dt: f32) -> Option<bool> {
        let session = self.session.as_mut()?;
        session.time_remaining -= dt;
        if session.time_remaining <= 0.0 {
            self.session = None;
            return Some(false);
        }
        None
    }

    /// Flip switch `index` on a switch board.
    pub fn toggle_switch(&mut self, index: usize) -> Option<bool> {
        if let Some(MiniGameSession {
            board: Board::Switches(b),
            ..
        }) = self.session.as_mut()
        {
            b.toggle(index);
        }
        self.settle()
    }

    /// Pick the left end of cable pair `pair` on a cable board.
    pub fn select_cable_left(&mut self, pair: usize) -> Option<bool> {
        if let Some(MiniGameSession {
            board: Board::Cables(b),
            ..
        }) = self.session.as_mut()
        {
            b.select_left(pair);
        }
        self.settle()
    }

    /// Pick the right end at `slot` on a cable board.
    pub fn select_cable_right(&mut self, slot: usize) -> Option<bool> {
        if let Some(MiniGameSession {
            board: Board::Cables(b),
            ..
        }) = self.session.as_mut()
        {
            // The board handles the reset-all on mismatch itself.
            b.select_right(slot);
        }
        self.settle()
    }

    /// Press `digit` on a number pad.
    pub fn press_digit(&mut self, digit: u8) -> Option<bool> {
        if let Some(MiniGameSession {
            board: Board::Sequence(b),
            ..
        }) = self.session.as_mut()
        {
            b.press(digit);
        }
        self.settle()
    }

    /// Tear down the session without reporting a result. Used when the
    /// round ends out from under an open session.
    pub fn abort(&mut self) {
        self.session = None;
    }

    // Release the session and report success if the last input solved
    // the board.
    fn settle(&mut self) -> Option<bool> {
        if self.session.as_ref().is_some_and(|s| s.solved()) {
            self.session = None;
            Some(true)
        } else {
            None
        }
    }
}
