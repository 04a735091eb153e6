//! The pausable investigation countdown.
//!
//! One timer, one purpose: it bounds the Investigating phase. Paused is
//! distinct from Stopped — pausing preserves the remaining time for
//! resumption, stopping ends the countdown until the next `start`.
//! Expiry fires exactly once per `start` and is reported to the caller
//! of [`tick`](CountdownTimer::tick).

use crate::phase::GamePhase;

/// Lifecycle state of the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Not counting; remaining time is not meaningful.
    Stopped,
    /// Counting down.
    Running,
    /// Suspended with remaining time preserved.
    Paused,
}

/// Display severity derived from the remaining time.
///
/// Pure presentation state — never consulted by game logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

/// A pausable countdown clock with threshold-derived severity tiers.
#[derive(Debug)]
pub struct CountdownTimer {
    remaining: f32,
    total: f32,
    state: TimerState,
    warning_threshold: f32,
    critical_threshold: f32,
}

impl CountdownTimer {
    /// Create a stopped timer with the given severity thresholds.
    pub fn new(warning_threshold: f32, critical_threshold: f32) -> Self {
        Self {
            remaining: 0.0,
            total: 0.0,
            state: TimerState::Stopped,
            warning_threshold,
            critical_threshold,
        }
    }

    /// Begin a fresh countdown of `duration` seconds.
    pub fn start(&mut self, duration: f32) {
        self.remaining = duration;
        self.total = duration;
        self.state = TimerState::Running;
    }

    /// Suspend the countdown, preserving remaining time.
    /// No-op unless currently running.
    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Resume a paused countdown.
    ///
    /// Only effective when time remains **and** the game is in the
    /// Investigating phase. Resuming a defusal countdown while the game
    /// is anywhere else is forbidden by design, however the call site
    /// got there.
    pub fn resume(&mut self, phase: GamePhase) {
        if self.state == TimerState::Paused
            && self.remaining > 0.0
            && phase == GamePhase::Investigating
        {
            self.state = TimerState::Running;
        }
    }

    /// Stop the countdown entirely.
    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }

    /// Advance the countdown by `dt` seconds.
    ///
    /// Returns `true` exactly when this call crossed zero: remaining is
    /// clamped at 0, the timer transitions to Stopped, and the caller
    /// fires the expiry notification. Subsequent ticks return `false`
    /// until the next `start`.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.state = TimerState::Stopped;
            return true;
        }
        false
    }

    /// Adjust remaining time by `seconds` (negative for penalties),
    /// clamped to `[0, total]`. Does not change the lifecycle state.
    pub fn add(&mut self, seconds: f32) {
        self.remaining = (self.remaining + seconds).clamp(0.0, self.total);
    }

    /// Remaining seconds.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// The duration passed to the last `start`.
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Severity tier for display.
    pub fn severity(&self) -> Severity {
        if self.remaining <= self.critical_threshold {
            Severity::Critical
        } else if self.remaining <= self.warning_threshold {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    /// Remaining time as `mm:ss` for display.
    pub fn display(&self) -> String {
        let total_seconds = self.remaining.max(0.0) as u32;
        format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
    }

    /// Fraction of the countdown remaining, in `[0, 1]`.
    pub fn fill_fraction(&self) -> f32 {
        if self.total > 0.0 {
            (self.remaining / self.total).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
