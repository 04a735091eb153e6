//! The cable-matching board.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Result of a single cable selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CableOutcome {
    /// A left end was picked; waiting for the matching right end.
    SelectionStarted,
    /// The pair matched and is now connected.
    Connected,
    /// The ends did not match. Every connection on the board resets.
    Mismatch,
    /// The selection was invalid (out of range, already connected, or
    /// no left end picked yet) and nothing changed.
    Ignored,
}

/// A board of cable pairs. Each left end must be connected to the right
/// slot holding the same pair id; one mismatch wipes all progress.
#[derive(Debug)]
pub struct CableBoard {
    // right_slots[slot] = pair id occupying that slot
    right_slots: Vec<usize>,
    connected: Vec<bool>,
    selected: Option<usize>,
}

impl CableBoard {
    /// Pair counts per difficulty level 1..=3.
    const COUNTS: [usize; 3] = [3, 4, 5];

    /// A board sized by `difficulty` (clamped to 1..=3), with the right
    /// ends laid out in a shuffled order.
    pub fn new(difficulty: u8, rng: &mut ChaCha8Rng) -> Self {
        let level = difficulty.clamp(1, 3) as usize;
        let pairs = Self::COUNTS[level - 1];
        let mut right_slots: Vec<usize> = (0..pairs).collect();
        right_slots.shuffle(rng);
        Self {
            right_slots,
            connected: vec![false; pairs],
            selected: None,
        }
    }

    /// Pick the left end of pair `pair`.
    pub fn select_left(&mut self, pair: usize) -> CableOutcome {
        if pair >= self.connected.len() || self.connected[pair] {
            return CableOutcome::Ignored;
        }
        self.selected = Some(pair);
        CableOutcome::SelectionStarted
    }

    /// Pick the right end at `slot` and resolve the attempt.
    ///
    /// A mismatch resets every connection on the board, not just the
    /// failed attempt.
    pub fn select_right(&mut self, slot: usize) -> CableOutcome {
        let Some(pair) = self.selected.take() else {
            return CableOutcome::Ignored;
        };
        let Some(&occupant) = self.right_slots.get(slot) else {
            return CableOutcome::Ignored;
        };
        if occupant == pair {
            self.connected[pair] = true;
            CableOutcome::Connected
        } else {
            self.connected.fill(false);
            CableOutcome::Mismatch
        }
    }

    /// Whether every pair is connected.
    pub fn solved(&self) -> bool {
        self.connected.iter().all(|&c| c)
    }

    /// Number of cable pairs.
    pub fn pairs(&self) -> usize {
        self.connected.len()
    }

    /// Number of pairs currently connected.
    pub fn connected_count(&self) -> usize {
        self.connected.iter().filter(|&&c| c).count()
    }

    /// The pair id occupying right slot `slot`.
    pub fn right_slot(&self, slot: usize) -> Option<usize> {
        self.right_slots.get(slot).copied()
    }
}
