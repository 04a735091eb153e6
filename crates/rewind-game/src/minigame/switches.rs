//! The switch-activation board.

/// A row of switches, all starting OFF. Solved when every switch is ON.
#[derive(Debug)]
pub struct SwitchBoard {
    switches: Vec<bool>,
}

impl SwitchBoard {
    /// Switch counts per difficulty level 1..=3.
    const COUNTS: [usize; 3] = [3, 4, 5];

    /// A board sized by `difficulty` (clamped to 1..=3).
    pub fn new(difficulty: u8) -> Self {
        let level = difficulty.clamp(1, 3) as usize;
        Self {
            switches: vec![false; Self::COUNTS[level - 1]],
        }
    }

    /// Flip switch `index`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(s) = self.switches.get_mut(index) {
            *s = !*s;
        }
    }

    /// Whether every switch is ON.
    pub fn solved(&self) -> bool {
        self.switches.iter().all(|&s| s)
    }

    /// Number of switches on the board.
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    /// Whether the board has no switches.
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// State of switch `index`.
    pub fn is_on(&self, index: usize) -> bool {
        self.switches.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_follows_difficulty() {
        assert_eq!(SwitchBoard::new(1).len(), 3);
        assert_eq!(SwitchBoard::new(2).len(), 4);
        assert_eq!(SwitchBoard::new(3).len(), 5);
        // Out-of-range difficulty clamps.
        assert_eq!(SwitchBoard::new(0).len(), 3);
        assert_eq!(SwitchBoard::new(9).len(), 5);
    }

    #[test]
    fn solved_when_all_switches_on() {
        let mut board = SwitchBoard::new(1);
        assert!(!board.solved());
        board.toggle(0);
        board.toggle(1);
        assert!(!board.solved());
        board.toggle(2);
        assert!(board.solved());
    }

    #[test]
    fn toggling_twice_turns_a_switch_back_off() {
        let mut board = SwitchBoard::new(1);
        board.toggle(0);
        assert!(board.is_on(0));
        board.toggle(0);
        assert!(!board.is_on(0));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut board = SwitchBoard::new(1);
        board.toggle(99);
        assert!(!board.solved());
    }
}
