//! End-to-end round tests: live play → hazard → rewind →
//! investigation → mini-game, driven tick by tick through the
//! [`GameDirector`] against the in-memory test world.

use rewind_core::{EntityId, Pose, WorldAccess};
use rewind_game::{Board, GameConfig, GameDirector, GamePhase, HazardKind, TimerState};
use rewind_test_utils::TestWorld;

const DT: f32 = 1.0 / 60.0;

// ── Helpers ─────────────────────────────────────────────────────

fn fast_config() -> GameConfig {
    GameConfig {
        investigation_time: 5.0,
        hazard_delay: 1.0,
        hazard_warning_time: 0.2,
        rewind_duration: 0.5,
        restart_delay: 0.3,
        interact_cooldown: 0.0,
        ..Default::default()
    }
}

fn setup(config: GameConfig) -> (GameDirector<TestWorld>, EntityId) {
    let mut world = TestWorld::new();
    let player = world.register(Pose::at(0.0, 0.0));
    let director = GameDirector::new(config, world, Some(player)).unwrap();
    (director, player)
}

/// Drive the loop, walking the player right while the round is live.
fn run_until(
    director: &mut GameDirector<TestWorld>,
    player: EntityId,
    target: GamePhase,
    max_seconds: f32,
) {
    let steps = (max_seconds / DT).round() as usize;
    for _ in 0..steps {
        if director.phase() == target {
            return;
        }
        if director.phase() == GamePhase::Playing {
            if let Some(mut pose) = director.world().pose(player) {
                pose.position[0] += 1.0 * DT;
                director.world_mut().set_pose(player, pose);
            }
        }
        director.tick(DT);
    }
    panic!("never reached {target}, stuck in {}", director.phase());
}

fn solve_cables(director: &mut GameDirector<TestWorld>) {
    // Connecting in pair order never mismatches, so connected_count is
    // always the next pair to wire up.
    while let Some(session) = director.mini_game() {
        let Board::Cables(board) = session.board() else {
            panic!("expected a cable board");
        };
        let pair = board.connected_count();
        let slot = (0..board.pairs())
            .find(|&s| board.right_slot(s) == Some(pair))
            .unwrap();
        director.select_cable_left(pair);
        director.select_cable_right(slot);
    }
}

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn rewind_walks_the_player_back_toward_the_start() {
    let (mut director, player) = setup(fast_config());
    director.start_game_with(Some(HazardKind::Fire), Some([100.0, 100.0]));

    run_until(&mut director, player, GamePhase::Rewinding, 3.0);
    let at_hazard = director.world().pose(player).unwrap().position[0];
    assert!(at_hazard > 0.5, "player should have moved before the hazard");

    run_until(&mut director, player, GamePhase::Investigating, 3.0);
    let after_rewind = director.world().pose(player).unwrap().position[0];
    assert!(
        after_rewind < at_hazard,
        "rewind should restore an earlier pose: {after_rewind} vs {at_hazard}"
    );
}

#[test]
fn victory_path_through_the_cable_board() {
    let (mut director, player) = setup(fast_config());
    // Collapse resolves to the cable board. The hazard strikes at the
    // player's spawn so the interact range check passes after rewind.
    director.start_game_with(Some(HazardKind::Collapse), Some([0.0, 0.0]));
    run_until(&mut director, player, GamePhase::Investigating, 6.0);

    assert!(director.interact());
    assert_eq!(director.phase(), GamePhase::MiniGame);
    solve_cables(&mut director);

    assert_eq!(director.phase(), GamePhase::Victory);
    assert!(director.hazards().is_prevented());

    // The next level starts on the real clock.
    run_until(&mut director, player, GamePhase::Playing, 1.0);
    assert_eq!(director.level(), 2);
}

#[test]
fn defeat_path_restarts_the_same_level_with_fresh_history() {
    let (mut director, player) = setup(fast_config());
    director.start_game_with(Some(HazardKind::Fire), Some([100.0, 100.0]));
    run_until(&mut director, player, GamePhase::Investigating, 6.0);

    // Never interact: the countdown expires.
    run_until(&mut director, player, GamePhase::GameOver, 6.0);
    assert_eq!(director.timer().state(), TimerState::Stopped);

    run_until(&mut director, player, GamePhase::Playing, 1.0);
    assert_eq!(director.level(), 1);
    assert_eq!(director.game_time(), 0.0);
    // History from the failed round is gone.
    assert!(director.recorder().world_ring().len() <= 1);
}

#[test]
fn identical_seeds_produce_identical_rounds() {
    let run = |seed: u64| {
        let config = GameConfig {
            seed,
            ..fast_config()
        };
        let (mut director, player) = setup(config);
        let phases = director.subscribe_phase();
        director.start_game();
        for _ in 0..(8.0 / DT) as usize {
            if director.phase() == GamePhase::Playing {
                if let Some(mut pose) = director.world().pose(player) {
                    pose.position[0] += DT;
                    director.world_mut().set_pose(player, pose);
                }
            }
            director.tick(DT);
        }
        let kind = director.hazards().current().map(|a| a.hazard.kind);
        let trace: Vec<GamePhase> = phases.drain().into_iter().map(|e| e.to).collect();
        let pose = director.world().pose(player);
        (kind, trace, pose)
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn mini_game_failure_costs_countdown_time_but_not_the_round() {
    let config = GameConfig {
        investigation_time: 60.0,
        failure_time_penalty: 4.0,
        ..fast_config()
    };
    let (mut director, player) = setup(config);
    // Explosion resolves to the number pad.
    director.start_game_with(Some(HazardKind::Explosion), Some([0.0, 0.0]));
    run_until(&mut director, player, GamePhase::Investigating, 6.0);
    let before = director.timer().remaining();

    assert!(director.interact());
    // Time the session out on the real clock (25 s limit).
    for _ in 0..(26.0 / DT) as usize {
        director.tick(DT);
        if director.phase() != GamePhase::MiniGame {
            break;
        }
    }

    assert_eq!(director.phase(), GamePhase::Investigating);
    assert_eq!(director.timer().state(), TimerState::Running);
    assert!(director.timer().remaining() <= before - 4.0 + 1e-3);

    // The round is still winnable: a second interact reopens the pad.
    assert!(director.interact());
    for digit in 0..10 {
        director.press_digit(digit);
    }
    assert_eq!(director.phase(), GamePhase::Victory);
}
