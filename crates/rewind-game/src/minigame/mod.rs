//! Mini-game catalog, boards, and session dispatch.
//!
//! Each hazard kind resolves to one mini-game. A session is started by
//! the director when the player interacts with the hazard during the
//! investigation window, runs against its own unscaled time limit, and
//! reports success or failure exactly once.

mod cables;
mod dispatch;
mod sequence;
mod switches;

pub use cables::{CableBoard, CableOutcome};
pub use dispatch::{Board, MiniGameDispatch, MiniGameSession};
pub use sequence::NumberPad;
pub use switches::SwitchBoard;

/// The closed set of mini-game kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MiniGameKind {
    /// Flip every switch on.
    SwitchActivation,
    /// Connect matching cable ends.
    CableMatch,
    /// Press 0 through 9 in order.
    NumberSequence,
}

impl MiniGameKind {
    /// All kinds, for iteration and random fallback selection.
    pub const ALL: [MiniGameKind; 3] = [
        MiniGameKind::SwitchActivation,
        MiniGameKind::CableMatch,
        MiniGameKind::NumberSequence,
    ];
}

/// Static parameters for one mini-game kind.
#[derive(Clone, Debug, PartialEq)]
pub struct MiniGameSpec {
    pub kind: MiniGameKind,
    /// Display name.
    pub name: String,
    /// One-line instruction shown when the session opens.
    pub instructions: String,
    /// Session time limit in unscaled seconds.
    pub time_limit: f32,
    /// Difficulty level, 1 to 3; drives the board parameter tables.
    pub difficulty: u8,
}

/// The set of mini-games sessions may be started from.
#[derive(Clone, Debug)]
pub struct MiniGameCatalog {
    entries: Vec<MiniGameSpec>,
}

impl MiniGameCatalog {
    /// A catalog with the given entries.
    pub fn new(entries: Vec<MiniGameSpec>) -> Self {
        Self { entries }
    }

    /// The stock catalog with the classic limits and difficulties.
    pub fn default_catalog() -> Self {
        Self::new(vec![
            MiniGameSpec {
                kind: MiniGameKind::SwitchActivation,
                name: "Switch activation".into(),
                instructions: "Flip every switch to ON!".into(),
                time_limit: 15.0,
                difficulty: 1,
            },
            MiniGameSpec {
                kind: MiniGameKind::CableMatch,
                name: "Cable repair".into(),
                instructions: "Connect each cable to its matching end!".into(),
                time_limit: 20.0,
                difficulty: 1,
            },
            MiniGameSpec {
                kind: MiniGameKind::NumberSequence,
                name: "Disarm code".into(),
                instructions: "Press 0 through 9 in order!".into(),
                time_limit: 25.0,
                difficulty: 2,
            },
        ])
    }

    /// Look up the entry for `kind`, if present.
    pub fn get(&self, kind: MiniGameKind) -> Option<&MiniGameSpec> {
        self.entries.iter().find(|s| s.kind == kind)
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn pick(&self, rng: &mut rand_chacha::ChaCha8Rng) -> Option<&MiniGameSpec> {
        if self.entries.is_empty() {
            return None;
        }
        let i = rand::Rng::random_range(rng, 0..self.entries.len());
        Some(&self.entries[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_catalog_carries_the_three_kinds() {
        let catalog = MiniGameCatalog::default_catalog();
        assert_eq!(catalog.len(), 3);
        let switch = catalog.get(MiniGameKind::SwitchActivation).unwrap();
        assert_eq!(switch.time_limit, 15.0);
        assert_eq!(switch.difficulty, 1);
        let cable = catalog.get(MiniGameKind::CableMatch).unwrap();
        assert_eq!(cable.time_limit, 20.0);
        assert_eq!(cable.difficulty, 1);
        let seq = catalog.get(MiniGameKind::NumberSequence).unwrap();
        assert_eq!(seq.time_limit, 25.0);
        assert_eq!(seq.difficulty, 2);
    }
}
