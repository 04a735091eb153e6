//! The round director: one owner for the whole control flow.
//!
//! [`GameDirector`] wires the recorder, rewind player, countdown,
//! hazard state, and mini-game dispatch behind a single `tick` driven
//! by the host loop. Every phase transition runs through
//! [`change_phase`](GameDirector::change_phase) and is published on the
//! phase bus; round sequencing ("hazard in 5 seconds", "restart in 3")
//! is deadline entries on the [`Scheduler`], never hidden timers.
//!
//! Operations called in the wrong phase are deliberate no-ops. The host
//! forwards raw input without tracking the phase itself, so the
//! director is the single place where "does this input mean anything
//! right now" is decided.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rewind_core::{EntityId, EventBus, Pose, Subscription, WorldAccess};
use rewind_record::{Recorder, RewindPlayer, StepOutcome};

use crate::config::{ConfigError, GameConfig};
use crate::events::{
    HazardPrevented, HazardTriggered, HazardWarning, MiniGameCompleted, PhaseChanged,
    RewindCompleted, TimerExpired,
};
use crate::hazard::{HazardCatalog, HazardKind, HazardState};
use crate::minigame::{MiniGameCatalog, MiniGameDispatch, MiniGameKind, MiniGameSession};
use crate::phase::GamePhase;
use crate::schedule::{Clock, Scheduler};
use crate::timer::{CountdownTimer, TimerState};

/// Deferred round-sequencing actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    /// Publish the hazard warning banner.
    WarnHazard,
    /// Execute the hazard and enter the rewind.
    ExecuteHazard,
    /// Start the round over after a game over.
    RestartLevel,
    /// Start the next round after a victory.
    AdvanceLevel,
}

/// Owns one game world and runs rounds over it.
pub struct GameDirector<W: WorldAccess> {
    config: GameConfig,
    world: W,
    phase: GamePhase,

    recorder: Recorder,
    player: RewindPlayer,
    timer: CountdownTimer,
    hazards: HazardState,
    hazard_catalog: HazardCatalog,
    dispatch: MiniGameDispatch,
    minigame_kind: Option<MiniGameKind>,
    scheduler: Scheduler<Pending>,
    rng: ChaCha8Rng,

    game_time: f32,
    real_time: f32,
    level: u32,
    interact_ready_at: f32,

    phase_events: EventBus<PhaseChanged>,
    warning_events: EventBus<HazardWarning>,
    hazard_events: EventBus<HazardTriggered>,
    prevented_events: EventBus<HazardPrevented>,
    timer_events: EventBus<TimerExpired>,
    rewind_events: EventBus<RewindCompleted>,
    minigame_events: EventBus<MiniGameCompleted>,
}

impl<W: WorldAccess> GameDirector<W> {
    /// A director over `world` with the stock hazard and mini-game
    /// catalogs. `player_id` is the entity the fine-grained recording
    /// stream follows.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`GameConfig::validate`].
    pub fn new(config: GameConfig, world: W, player_id: Option<EntityId>) -> Result<Self, ConfigError> {
        Self::with_catalogs(
            config,
            world,
            player_id,
            HazardCatalog::default_catalog(),
            MiniGameCatalog::default_catalog(),
        )
    }

    /// A director with caller-supplied catalogs.
    pub fn with_catalogs(
        config: GameConfig,
        world: W,
        player_id: Option<EntityId>,
        hazard_catalog: HazardCatalog,
        minigame_catalog: MiniGameCatalog,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let recorder = Recorder::new(
            config.world_capacity,
            config.world_record_hz,
            config.player_capacity,
            config.player_record_hz,
            player_id,
        );
        let timer = CountdownTimer::new(config.warning_threshold, config.critical_threshold);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            world,
            phase: GamePhase::Menu,
            recorder,
            player: RewindPlayer::new(),
            timer,
            hazards: HazardState::new(),
            hazard_catalog,
            dispatch: MiniGameDispatch::new(minigame_catalog),
            minigame_kind: None,
            scheduler: Scheduler::new(),
            rng,
            game_time: 0.0,
            real_time: 0.0,
            level: 1,
            interact_ready_at: 0.0,
            phase_events: EventBus::new(),
            warning_events: EventBus::new(),
            hazard_events: EventBus::new(),
            prevented_events: EventBus::new(),
            timer_events: EventBus::new(),
            rewind_events: EventBus::new(),
            minigame_events: EventBus::new(),
        })
    }

    // ── Round lifecycle ──────────────────────────────────────────────

    /// Start the first round. No-op outside the Menu phase.
    pub fn start_game(&mut self) {
        self.start_game_with(None, None);
    }

    /// Start the first round with a forced hazard kind and/or a pinned
    /// hazard location. No-op outside the Menu phase.
    pub fn start_game_with(&mut self, forced: Option<HazardKind>, spawn: Option<[f32; 2]>) {
        if self.phase != GamePhase::Menu {
            return;
        }
        self.begin_round(forced, spawn);
    }

    fn begin_round(&mut self, forced: Option<HazardKind>, spawn: Option<[f32; 2]>) {
        self.scheduler.clear();
        self.dispatch.abort();
        self.minigame_kind = None;
        self.player.force_complete();
        self.timer.stop();
        self.hazards
            .prepare(&self.hazard_catalog, forced, spawn, &mut self.rng);
        self.recorder.start();

        self.scheduler
            .schedule_in(self.config.hazard_delay, Clock::Scaled, Pending::WarnHazard);
        self.scheduler.schedule_in(
            self.config.hazard_delay + self.config.hazard_warning_time,
            Clock::Scaled,
            Pending::ExecuteHazard,
        );
        self.change_phase(GamePhase::Playing);
    }

    /// Advance the whole round by one tick of `real_dt` wall seconds.
    ///
    /// The scaled clock receives `real_dt` too, except in phases that
    /// pause it, where it receives zero. Mini-game session timers run
    /// on the real clock regardless.
    pub fn tick(&mut self, real_dt: f32) {
        let scaled_dt = if self.phase.pauses_clock() {
            0.0
        } else {
            real_dt
        };
        self.real_time += real_dt;
        if self.phase.accumulates_game_time() {
            self.game_time += scaled_dt;
        }

        for action in self.scheduler.advance(scaled_dt, real_dt) {
            self.handle_pending(action);
        }

        match self.phase {
            GamePhase::Playing => {
                self.recorder.tick(self.game_time, scaled_dt, &self.world);
            }
            GamePhase::Rewinding => {
                let outcome = self.player.step(
                    scaled_dt,
                    self.config.rewind_speed,
                    &self.recorder,
                    &mut self.world,
                );
                match outcome {
                    Ok(StepOutcome::InProgress) => {}
                    // An inactive player here means the rewind is over
                    // however we arrived; close the phase out.
                    Ok(StepOutcome::Done) | Err(_) => self.finish_rewind(),
                }
            }
            GamePhase::Investigating => {
                if self.timer.tick(scaled_dt) {
                    self.on_countdown_expired();
                }
            }
            GamePhase::MiniGame => {
                let result = self.dispatch.tick(real_dt);
                self.settle_minigame(result);
            }
            GamePhase::Menu | GamePhase::GameOver | GamePhase::Victory => {}
        }
    }

    fn handle_pending(&mut self, action: Pending) {
        match action {
            Pending::WarnHazard => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                if let Some(active) = self.hazards.current() {
                    let event = HazardWarning {
                        kind: active.hazard.kind,
                        location: active.location,
                    };
                    self.warning_events.publish(event);
                }
            }
            Pending::ExecuteHazard => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                self.execute_hazard();
            }
            Pending::RestartLevel => {
                if self.phase != GamePhase::GameOver {
                    return;
                }
                self.game_time = 0.0;
                self.begin_round(None, None);
            }
            Pending::AdvanceLevel => {
                if self.phase != GamePhase::Victory {
                    return;
                }
                self.level += 1;
                self.begin_round(None, None);
            }
        }
    }

    fn execute_hazard(&mut self) {
        let Some(active) = self.hazards.current() else {
            // No hazard this round: go straight to the investigation.
            self.begin_investigation();
            return;
        };
        let event = HazardTriggered {
            kind: active.hazard.kind,
            location: active.location,
        };

        let hit = self.hazards.execute(&self.world);
        for id in hit {
            if let Some(mut pose) = self.world.pose(id) {
                pose.active = false;
                self.world.set_pose(id, pose);
            }
        }
        self.hazard_events.publish(event);

        match self
            .player
            .begin(&self.recorder, self.config.rewind_duration)
        {
            Ok(()) => self.change_phase(GamePhase::Rewinding),
            // Nothing recorded: nothing to replay, skip the phase.
            Err(_) => self.begin_investigation(),
        }
    }

    fn finish_rewind(&mut self) {
        self.rewind_events.publish(RewindCompleted);
        self.begin_investigation();
    }

    fn begin_investigation(&mut self) {
        self.change_phase(GamePhase::Investigating);
        self.timer.start(self.config.investigation_time);
    }

    fn on_countdown_expired(&mut self) {
        self.timer_events.publish(TimerExpired);
        self.dispatch.abort();
        self.minigame_kind = None;
        self.change_phase(GamePhase::GameOver);
        self.scheduler.schedule_in(
            self.config.restart_delay,
            Clock::Real,
            Pending::RestartLevel,
        );
    }

    /// Abandon an in-progress rewind and jump to the investigation.
    /// No-op outside the Rewinding phase.
    pub fn skip_rewind(&mut self) {
        if self.phase != GamePhase::Rewinding {
            return;
        }
        self.player.force_complete();
        self.finish_rewind();
    }

    // ── Interaction and mini-game input ──────────────────────────────

    /// The player interacts with the hazard site.
    ///
    /// Only meaningful during the investigation, outside the interact
    /// cooldown, within `interact_radius` of the hazard site, while the
    /// hazard is still unprevented: pauses the countdown and opens the
    /// mini-game the hazard kind resolves to. Returns whether a session
    /// was opened.
    pub fn interact(&mut self) -> bool {
        if self.phase != GamePhase::Investigating {
            return false;
        }
        if self.real_time < self.interact_ready_at {
            return false;
        }
        if self.hazards.is_prevented() {
            return false;
        }
        let Some(kind) = self.hazards.current().map(|a| a.mini_game) else {
            return false;
        };
        if !self.player_in_reach() {
            return false;
        }

        self.interact_ready_at = self.real_time + self.config.interact_cooldown;
        self.timer.pause();
        match self.dispatch.start(kind, &mut self.rng) {
            Some(started) => {
                self.minigame_kind = Some(started);
                self.change_phase(GamePhase::MiniGame);
                true
            }
            None => {
                self.timer.resume(GamePhase::Investigating);
                false
            }
        }
    }

    // Proximity gate: with no tracked player entity there is nothing
    // to measure, so interaction is allowed from anywhere.
    fn player_in_reach(&self) -> bool {
        let (Some(player_id), Some(active)) = (self.recorder.player_id(), self.hazards.current())
        else {
            return true;
        };
        let Some(pose) = self.world.pose(player_id) else {
            return true;
        };
        let site = Pose::at(active.location[0], active.location[1]);
        pose.planar_distance(&site) <= self.config.interact_radius
    }

    /// Force the active mini-game to a result without further input.
    /// No-op outside the MiniGame phase or when no session is open.
    pub fn complete_mini_game(&mut self, success: bool) {
        if self.phase != GamePhase::MiniGame || self.dispatch.session().is_none() {
            return;
        }
        self.dispatch.abort();
        self.settle_minigame(Some(success));
    }

    /// Flip a switch on the active switch board. No-op otherwise.
    pub fn toggle_switch(&mut self, index: usize) {
        if self.phase != GamePhase::MiniGame {
            return;
        }
        let result = self.dispatch.toggle_switch(index);
        self.settle_minigame(result);
    }

    /// Pick the left end of a cable pair. No-op otherwise.
    pub fn select_cable_left(&mut self, pair: usize) {
        if self.phase != GamePhase::MiniGame {
            return;
        }
        let result = self.dispatch.select_cable_left(pair);
        self.settle_minigame(result);
    }

    /// Pick a right-side cable slot. No-op otherwise.
    pub fn select_cable_right(&mut self, slot: usize) {
        if self.phase != GamePhase::MiniGame {
            return;
        }
        let result = self.dispatch.select_cable_right(slot);
        self.settle_minigame(result);
    }

    /// Press a digit on the active number pad. No-op otherwise.
    pub fn press_digit(&mut self, digit: u8) {
        if self.phase != GamePhase::MiniGame {
            return;
        }
        let result = self.dispatch.press_digit(digit);
        self.settle_minigame(result);
    }

    fn settle_minigame(&mut self, result: Option<bool>) {
        let Some(success) = result else { return };
        let kind = match self.minigame_kind.take() {
            Some(kind) => kind,
            None => return,
        };
        self.minigame_events
            .publish(MiniGameCompleted { kind, success });

        if success {
            if self.hazards.prevent() {
                if let Some(active) = self.hazards.current() {
                    let event = HazardPrevented {
                        kind: active.hazard.kind,
                    };
                    self.prevented_events.publish(event);
                }
            }
            self.timer.stop();
            self.change_phase(GamePhase::Victory);
            self.scheduler.schedule_in(
                self.config.restart_delay,
                Clock::Real,
                Pending::AdvanceLevel,
            );
        } else {
            self.change_phase(GamePhase::Investigating);
            if self.config.failure_time_penalty > 0.0 {
                self.timer.add(-self.config.failure_time_penalty);
            }
            // The penalty can drain the paused countdown to zero; that
            // is an expiry, not a stuck timer.
            if self.timer.remaining() <= 0.0 && self.timer.state() == TimerState::Paused {
                self.on_countdown_expired();
            } else {
                self.timer.resume(GamePhase::Investigating);
            }
        }
    }

    fn change_phase(&mut self, to: GamePhase) {
        if to == self.phase {
            return;
        }
        let event = PhaseChanged {
            from: self.phase,
            to,
        };
        self.phase = to;
        self.phase_events.publish(event);
    }

    // ── Subscriptions ────────────────────────────────────────────────

    /// Subscribe to phase transitions.
    pub fn subscribe_phase(&mut self) -> Subscription<PhaseChanged> {
        self.phase_events.subscribe()
    }

    /// Subscribe to hazard warnings.
    pub fn subscribe_warnings(&mut self) -> Subscription<HazardWarning> {
        self.warning_events.subscribe()
    }

    /// Subscribe to hazard executions.
    pub fn subscribe_hazards(&mut self) -> Subscription<HazardTriggered> {
        self.hazard_events.subscribe()
    }

    /// Subscribe to hazard preventions.
    pub fn subscribe_prevented(&mut self) -> Subscription<HazardPrevented> {
        self.prevented_events.subscribe()
    }

    /// Subscribe to countdown expiries.
    pub fn subscribe_timer(&mut self) -> Subscription<TimerExpired> {
        self.timer_events.subscribe()
    }

    /// Subscribe to rewind completions.
    pub fn subscribe_rewinds(&mut self) -> Subscription<RewindCompleted> {
        self.rewind_events.subscribe()
    }

    /// Subscribe to mini-game results.
    pub fn subscribe_minigames(&mut self) -> Subscription<MiniGameCompleted> {
        self.minigame_events.subscribe()
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The current level, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Accumulated scaled game time for this run.
    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    /// The investigation countdown.
    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// The active mini-game session, if one is open.
    pub fn mini_game(&self) -> Option<&MiniGameSession> {
        self.dispatch.session()
    }

    /// The round's hazard lifecycle state.
    pub fn hazards(&self) -> &HazardState {
        &self.hazards
    }

    /// The recording streams.
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// The game world.
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable access to the game world, for host-driven movement.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
