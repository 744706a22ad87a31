// Integration tests (native) for the `dino-runner` crate.
// These drive the simulation through its public API without any browser
// objects so they run under plain `cargo test` on the host.

use dino_runner::game::{
    Action, Game, GameConfig, Obstacle, Phase, advance_obstacles, first_hit,
};

// No spawns inside the test horizon and a constant scroll speed of 6.
fn steady_config() -> GameConfig {
    GameConfig {
        min_spawn_gap: 100_000,
        max_spawn_gap: 100_000,
        speed_increment: 0.0,
        max_speed: 6.0,
        ..GameConfig::default()
    }
}

#[test]
fn cactus_scores_once_at_removal_tick() {
    let cfg = steady_config();
    let mut obstacles = vec![Obstacle::ground(800.0, 20.0, 40.0)];
    let mut score = 0;
    for tick in 1..=200u32 {
        let before = score;
        score += advance_obstacles(&mut obstacles, 6.0, &cfg);
        if tick == 137 {
            assert_eq!(score - before, 1, "tick {tick}");
        } else {
            assert_eq!(score, before, "tick {tick}");
        }
    }
    assert!(obstacles.is_empty());
}

#[test]
fn passing_pterodactyl_scores_in_running_game() {
    let mut game = Game::seeded(steady_config(), 3).unwrap();
    // flies well above the runner's head
    game.place_obstacle(Obstacle::flying(800.0, 40.0, 20.0, 120.0));
    for tick in 1..=150u32 {
        assert_eq!(game.tick(), Phase::Running);
        let expected = if tick >= 108 { 1 } else { 0 };
        assert_eq!(game.score(), expected, "tick {tick}");
    }
}

#[test]
fn resting_runner_collides_with_cactus() {
    let mut game = Game::seeded(steady_config(), 4).unwrap();
    let cactus = Obstacle::ground(50.0, 20.0, 40.0);
    assert_eq!(first_hit(game.runner(), &[cactus], 150.0), Some(0));

    game.place_obstacle(cactus);
    assert_eq!(game.tick(), Phase::GameOver);
    assert!(game.is_over());
}

#[test]
fn jumping_runner_clears_cactus() {
    let mut game = Game::seeded(steady_config(), 5).unwrap();
    game.lift_runner(60.0);
    let cactus = Obstacle::ground(50.0, 20.0, 40.0);
    assert_eq!(first_hit(game.runner(), &[cactus], 150.0), None);

    game.place_obstacle(Obstacle::ground(56.0, 20.0, 40.0));
    assert_eq!(game.tick(), Phase::Running);
}

#[test]
fn no_scoring_after_game_over() {
    let mut game = Game::seeded(steady_config(), 6).unwrap();
    game.place_obstacle(Obstacle::ground(56.0, 20.0, 40.0));
    game.place_obstacle(Obstacle::ground(-19.0, 20.0, 40.0));
    // removal runs before the collision check, so the tick of the hit still scores
    assert_eq!(game.tick(), Phase::GameOver);
    let score = game.score();
    for _ in 0..50 {
        game.tick();
    }
    assert_eq!(game.score(), score);
    assert_eq!(game.session().obstacles.len(), 1);
}

#[test]
fn restart_after_long_session_resets_state() {
    let cfg = GameConfig::default();
    let mut game = Game::seeded(cfg.clone(), 11).unwrap();
    let mut ticks = 0;
    while !game.is_over() && ticks < 100_000 {
        game.tick();
        ticks += 1;
    }
    assert!(game.is_over(), "a runner that never jumps must eventually crash");

    game.push_action(Action::Restart);
    assert_eq!(game.tick(), Phase::Running);
    assert_eq!(game.score(), 0);
    assert!(game.session().obstacles.is_empty());
    assert_eq!(game.session().scroll_speed, cfg.initial_speed);
    assert_eq!(game.session().elapsed_ticks, 0);
}

#[test]
fn jump_ignored_while_over() {
    let mut game = Game::seeded(steady_config(), 12).unwrap();
    game.place_obstacle(Obstacle::ground(56.0, 20.0, 40.0));
    game.tick();
    let runner = *game.runner();
    game.push_action(Action::Jump);
    game.tick();
    assert_eq!(*game.runner(), runner);
    assert!(!game.runner().airborne);
}

#[test]
fn restart_ignored_while_running() {
    let mut game = Game::seeded(steady_config(), 13).unwrap();
    for _ in 0..10 {
        game.tick();
    }
    game.push_action(Action::Restart);
    game.tick();
    assert_eq!(game.session().elapsed_ticks, 11);
    assert!(!game.restart());
}
