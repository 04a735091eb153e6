//! The number-sequence board.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// A pad of the digits 0 through 9 that must be pressed in ascending
/// order. Any out-of-order press resets progress to zero.
#[derive(Debug)]
pub struct NumberPad {
    layout: Vec<u8>,
    entered: u8,
}

impl NumberPad {
    /// Whether the pad layout is shuffled, per difficulty level 1..=3.
    const SHUFFLED: [bool; 3] = [false, true, true];

    const DIGITS: u8 = 10;

    /// A pad whose layout order depends on `difficulty` (clamped to
    /// 1..=3): sequential at level 1, shuffled above.
    pub fn new(difficulty: u8, rng: &mut ChaCha8Rng) -> Self {
        let level = difficulty.clamp(1, 3) as usize;
        let mut layout: Vec<u8> = (0..Self::DIGITS).collect();
        if Self::SHUFFLED[level - 1] {
            layout.shuffle(rng);
        }
        Self { layout, entered: 0 }
    }

    /// Press `digit`. Returns `true` when it was the expected next
    /// digit; a wrong press resets progress to zero.
    pub fn press(&mut self, digit: u8) -> bool {
        if digit == self.entered {
            self.entered += 1;
            true
        } else {
            self.entered = 0;
            false
        }
    }

    /// Whether the full sequence has been entered.
    pub fn solved(&self) -> bool {
        self.entered == Self::DIGITS
    }

    /// Number of digits correctly entered so far.
    pub fn entered(&self) -> u8 {
        self.entered
    }

    /// The pad's display layout.
    pub fn layout(&self) -> &[u8] {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn pressing_in_order_solves_the_pad() {
        let mut pad = NumberPad::new(1, &mut rng(0));
        for digit in 0..10 {
            assert!(pad.press(digit));
        }
        assert!(pad.solved());
    }

    #[test]
    fn wrong_press_resets_progress_to_zero() {
        let mut pad = NumberPad::new(1, &mut rng(0));
        pad.press(0);
        pad.press(1);
        assert_eq!(pad.entered(), 2);
        assert!(!pad.press(7));
        assert_eq!(pad.entered(), 0);
        // Must restart from 0.
        assert!(pad.press(0));
    }

    #[test]
    fn layout_is_sequential_at_difficulty_one() {
        let pad = NumberPad::new(1, &mut rng(0));
        assert_eq!(pad.layout(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn layout_is_shuffled_above_difficulty_one() {
        // One fixed seed that demonstrably permutes the layout.
        let pad = NumberPad::new(2, &mut rng(3));
        let mut sorted = pad.layout().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        assert_ne!(pad.layout(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn shuffled_layout_does_not_change_the_required_order() {
        let mut pad = NumberPad::new(3, &mut rng(5));
        for digit in 0..10 {
            assert!(pad.press(digit));
        }
        assert!(pad.solved());
    }
}
