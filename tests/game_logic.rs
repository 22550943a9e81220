/// Integration tests for game logic
///
/// These tests drive whole sessions through the public API and verify
/// formation movement, combat outcomes and the session lifecycle.
use invaders::{Body, GameAction, GameConfig, GameSession, GameState};

const DT: f32 = 1.0 / 60.0;

/// Default world with alien fire disabled, so runs are deterministic.
fn silent_config() -> GameConfig {
    GameConfig {
        alien_shoot_chance: 0.0,
        ..GameConfig::default()
    }
}

/// One stationary, silent alien directly above the ship's spawn point.
fn single_alien_config() -> GameConfig {
    GameConfig {
        alien_rows: 1,
        alien_columns: 1,
        alien_speed: 0.0,
        alien_shoot_chance: 0.0,
        ..GameConfig::default()
    }
}

/// Ticks the session until it leaves `Playing`.
fn run_to_completion(session: &mut GameSession) {
    for _ in 0..2000 {
        if session.state() != GameState::Playing {
            return;
        }
        session.on_update(DT);
    }
    panic!("session never finished");
}

#[test]
fn test_formation_reverses_in_lockstep_at_the_wall() {
    let mut session = GameSession::new(silent_config());
    let start_y: Vec<f32> = session.formation().aliens.iter().map(|a| a.y).collect();

    // March right until the outer column touches the wall. Every alien
    // must share one velocity the whole way.
    let mut ticks = 0;
    while session.formation().aliens[0].vx > 0.0 {
        session.on_update(DT);
        ticks += 1;
        assert!(ticks < 600, "formation never reached the wall");

        let first_vx = session.formation().aliens[0].vx;
        assert!(session.formation().aliens.iter().all(|a| a.vx == first_vx));
    }

    // The whole grid dropped together on the reversal tick.
    for (alien, y0) in session.formation().aliens.iter().zip(start_y) {
        assert_eq!(alien.y, y0 - 50.0);
    }
    assert_eq!(session.state(), GameState::Playing);
}

#[test]
fn test_shooting_the_last_alien_wins_the_game() {
    let mut session = GameSession::new(single_alien_config());
    session.on_key_action(GameAction::Fire);
    assert_eq!(session.player_bullets().len(), 1);

    let mut ticks = 0;
    while session.state() == GameState::Playing {
        session.on_update(DT);
        ticks += 1;
        assert!(ticks < 120, "shot never reached the alien");
    }

    assert_eq!(session.state(), GameState::Won);
    assert_eq!(session.score(), 10);
    assert!(session.formation().aliens.is_empty());
    assert!(session.player_bullets().is_empty());
}

#[test]
fn test_two_overlapping_shots_score_one_kill() {
    // Both shots leave the same spot on the same tick and fly the same
    // path; only the first may consume the alien.
    let mut session = GameSession::new(single_alien_config());
    session.on_key_action(GameAction::Fire);
    session.on_key_action(GameAction::Fire);

    let mut ticks = 0;
    while session.state() == GameState::Playing {
        session.on_update(DT);
        ticks += 1;
        assert!(ticks < 120, "shots never reached the alien");
    }

    assert_eq!(session.state(), GameState::Won);
    assert_eq!(session.score(), 10);
    assert_eq!(session.player_bullets().len(), 1);
}

#[test]
fn test_alien_fire_drains_lives_to_game_over() {
    let config = GameConfig {
        alien_shoot_chance: 1.0,
        player_lives: 1,
        ..single_alien_config()
    };
    let mut session = GameSession::new(config);

    run_to_completion(&mut session);

    assert_eq!(session.state(), GameState::GameOver);
    assert_eq!(session.player().lives, 0);
}

#[test]
fn test_finished_session_ignores_input_and_updates() {
    let config = GameConfig {
        alien_shoot_chance: 1.0,
        player_lives: 1,
        ..single_alien_config()
    };
    let mut session = GameSession::new(config);
    run_to_completion(&mut session);

    let player_x = session.player().x;
    let alien_bullets = session.formation().bullets.len();

    session.on_key_action(GameAction::MoveLeftPressed);
    session.on_key_action(GameAction::Fire);
    for _ in 0..30 {
        session.on_update(DT);
    }

    assert_eq!(session.state(), GameState::GameOver);
    assert_eq!(session.player().x, player_x);
    assert_eq!(session.formation().bullets.len(), alien_bullets);
    assert!(session.player_bullets().is_empty());
}

#[test]
fn test_restart_starts_a_fresh_run_with_the_same_config() {
    let config = GameConfig {
        alien_shoot_chance: 1.0,
        player_lives: 1,
        ..single_alien_config()
    };
    let mut session = GameSession::new(config);
    run_to_completion(&mut session);
    assert_eq!(session.state(), GameState::GameOver);

    session.on_key_action(GameAction::Restart);

    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(session.score(), 0);
    // The configured single life comes back, not the default three.
    assert_eq!(session.player().lives, 1);
    assert_eq!(session.formation().live_count(), 1);
    assert!(session.formation().bullets.is_empty());
}

#[test]
fn test_in_flight_cap_limits_player_shots() {
    let mut session = GameSession::new(single_alien_config());

    // Step aside so shots fly past the alien instead of into it.
    session.on_key_action(GameAction::MoveLeftPressed);
    for _ in 0..20 {
        session.on_update(DT);
    }
    session.on_key_action(GameAction::MoveLeftReleased);

    for _ in 0..8 {
        session.on_key_action(GameAction::Fire);
    }
    assert_eq!(session.player_bullets().len(), 3);

    // Slots free up once shots leave the screen.
    let mut ticks = 0;
    while !session.player_bullets().is_empty() {
        session.on_update(DT);
        ticks += 1;
        assert!(ticks < 200, "shots never left the screen");
    }
    session.on_key_action(GameAction::Fire);
    assert_eq!(session.player_bullets().len(), 1);
}

#[test]
fn test_descending_formation_ends_the_game() {
    let config = GameConfig {
        alien_rows: 1,
        alien_columns: 1,
        alien_speed: 400.0,
        alien_drop_distance: 150.0,
        alien_shoot_chance: 0.0,
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config);

    let mut ticks = 0;
    while session.state() == GameState::Playing {
        session.on_update(DT);
        ticks += 1;
        assert!(ticks < 600, "formation never descended far enough");
    }

    // The run ended on descent: the alien survives at the far wall and
    // the ship was never touched.
    assert_eq!(session.state(), GameState::GameOver);
    assert_eq!(session.formation().live_count(), 1);
    assert!(session.formation().aliens[0].bottom() < 80.0);
    assert_eq!(session.player().lives, 3);
}

#[test]
fn test_stale_release_does_not_stop_the_ship() {
    let mut session = GameSession::new(silent_config());

    // Hold left, tap right, then let go of left. The left release
    // arrives while the ship already moves right and must be ignored.
    session.on_key_action(GameAction::MoveLeftPressed);
    session.on_key_action(GameAction::MoveRightPressed);
    session.on_key_action(GameAction::MoveLeftReleased);

    let x_before = session.player().x;
    session.on_update(DT);
    assert!(session.player().x > x_before);

    // Releasing the key that actually drives the ship stops it.
    session.on_key_action(GameAction::MoveRightReleased);
    let x_stopped = session.player().x;
    session.on_update(DT);
    assert_eq!(session.player().x, x_stopped);
}

#[test]
fn test_ship_stops_at_the_playfield_edge() {
    let mut session = GameSession::new(silent_config());

    session.on_key_action(GameAction::MoveRightPressed);
    for _ in 0..240 {
        session.on_update(DT);
    }

    assert_eq!(session.player().right(), 800.0);
}

#[test]
fn test_default_session_invariants_hold_over_time() {
    // Full default world, random alien fire included. Whatever the rolls
    // do, the structural rules must hold on every tick.
    let mut session = GameSession::new(GameConfig::default());
    let mut last_score = 0;

    for tick in 0..600 {
        if tick % 30 == 0 {
            session.on_key_action(GameAction::Fire);
        }
        session.on_update(DT);

        assert!(session.player_bullets().len() <= 3);
        assert!(session.score() >= last_score);
        last_score = session.score();

        let mut live = session.formation().aliens.iter().filter(|a| a.alive);
        if let Some(first) = live.next() {
            let vx = first.vx;
            assert!(live.all(|a| a.vx == vx));
        }

        if session.state() != GameState::Playing {
            break;
        }
    }
}
