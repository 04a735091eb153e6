//! Cooperative deadline scheduling.
//!
//! Delayed phase sequencing ("wait N seconds, then proceed") is a small
//! queue of (deadline, action) pairs drained once per tick — no hidden
//! suspension points, no threads, no blocking sleeps. Two clocks exist:
//! the scaled game clock, which stands still while the game is paused,
//! and the real clock, which never stops (restart delays after
//! GameOver/Victory run on real time even though the phase is paused).

use smallvec::SmallVec;

/// Which clock a deadline is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    /// The scaled game clock; frozen while the phase pauses the game.
    Scaled,
    /// Wall-clock time; unaffected by pause.
    Real,
}

#[derive(Debug)]
struct Entry<A> {
    due: f32,
    clock: Clock,
    action: A,
}

/// A deterministic queue of delayed actions, polled once per tick.
#[derive(Debug)]
pub struct Scheduler<A> {
    pending: Vec<Entry<A>>,
    scaled_now: f32,
    real_now: f32,
}

impl<A> Scheduler<A> {
    /// An empty scheduler with both clocks at zero.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            scaled_now: 0.0,
            real_now: 0.0,
        }
    }

    /// Schedule `action` to fire `delay` seconds from now on `clock`.
    pub fn schedule_in(&mut self, delay: f32, clock: Clock, action: A) {
        let now = match clock {
            Clock::Scaled => self.scaled_now,
            Clock::Real => self.real_now,
        };
        self.pending.push(Entry {
            due: now + delay,
            clock,
            action,
        });
    }

    /// Advance both clocks and return the actions that came due, in
    /// deadline order. Ties resolve in scheduling order (stable sort).
    pub fn advance(&mut self, scaled_dt: f32, real_dt: f32) -> SmallVec<[A; 2]> {
        self.scaled_now += scaled_dt;
        self.real_now += real_dt;

        let mut due_indices: Vec<usize> = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                let now = match e.clock {
                    Clock::Scaled => self.scaled_now,
                    Clock::Real => self.real_now,
                };
                e.due <= now
            })
            .map(|(i, _)| i)
            .collect();
        due_indices.sort_by(|&a, &b| {
            self.pending[a]
                .due
                .partial_cmp(&self.pending[b].due)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut fired = SmallVec::new();
        // Remove back-to-front so earlier indices stay valid.
        for &i in due_indices.iter().rev() {
            fired.push(self.pending.remove(i).action);
        }
        fired.reverse();
        fired
    }

    /// Drop all pending actions. Used when a round is torn down.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of pending actions.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_fires_when_scaled_deadline_passes() {
        let mut s = Scheduler::new();
        s.schedule_in(1.0, Clock::Scaled, "a");
        assert!(s.advance(0.5, 0.5).is_empty());
        let fired = s.advance(0.6, 0.6);
        assert_eq!(fired.as_slice(), ["a"]);
        assert_eq!(s.pending_count(), 0);
    }

    #[test]
    fn scaled_deadline_does_not_fire_while_paused() {
        let mut s = Scheduler::new();
        s.schedule_in(1.0, Clock::Scaled, "a");
        // Paused: scaled clock stands still, real clock runs.
        for _ in 0..100 {
            assert!(s.advance(0.0, 0.1).is_empty());
        }
        assert_eq!(s.advance(1.0, 1.0).as_slice(), ["a"]);
    }

    #[test]
    fn real_deadline_fires_even_while_paused() {
        let mut s = Scheduler::new();
        s.schedule_in(1.0, Clock::Real, "restart");
        let mut fired = SmallVec::<[&str; 2]>::new();
        for _ in 0..11 {
            fired.extend(s.advance(0.0, 0.1));
        }
        assert_eq!(fired.as_slice(), ["restart"]);
    }

    #[test]
    fn multiple_due_actions_fire_in_deadline_order() {
        let mut s = Scheduler::new();
        s.schedule_in(2.0, Clock::Scaled, "second");
        s.schedule_in(1.0, Clock::Scaled, "first");
        let fired = s.advance(5.0, 5.0);
        assert_eq!(fired.as_slice(), ["first", "second"]);
    }

    #[test]
    fn clear_drops_pending_actions() {
        let mut s = Scheduler::new();
        s.schedule_in(1.0, Clock::Scaled, "a");
        s.clear();
        assert!(s.advance(10.0, 10.0).is_empty());
    }
}
