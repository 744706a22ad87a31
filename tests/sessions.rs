// Long seeded sessions checking the loop invariants tick by tick.
// A simple autopilot jumps at approaching cacti so sessions last a while;
// every game over is followed by a restart.

use dino_runner::game::{Action, Game, GameConfig, ObstacleKind, Phase};

fn autopilot(game: &Game) -> bool {
    let runner = game.runner();
    let speed = game.session().scroll_speed;
    let front = runner.x + runner.width;
    game.session()
        .obstacles
        .iter()
        .any(|o| o.kind == ObstacleKind::Ground && o.x > front && o.x < front + speed * 6.0)
}

#[test]
fn invariants_hold_across_seeded_sessions() {
    let cfg = GameConfig::default();
    for seed in 0..8u64 {
        let mut game = Game::seeded(cfg.clone(), seed).unwrap();
        let mut spawn_ticks: Vec<u64> = Vec::new();

        for _ in 0..20_000 {
            if autopilot(&game) {
                game.push_action(Action::Jump);
            }
            let before = game.session().clone();
            let phase = game.tick();
            let after = game.session();
            let runner = game.runner();

            assert_eq!(runner.offset == 0.0, !runner.airborne, "seed {seed}");
            assert!(runner.offset >= 0.0);
            assert!((cfg.initial_speed..=cfg.max_speed).contains(&after.scroll_speed));

            if before.is_over() {
                // restart on the tick after the crash
                assert_eq!(phase, Phase::Running);
                assert_eq!(after.score, 0);
                assert!(after.obstacles.is_empty());
                spawn_ticks.clear();
                continue;
            }

            assert!(after.scroll_speed >= before.scroll_speed);
            let spawned = u64::from(after.last_spawn_tick == after.elapsed_ticks);
            if spawned == 1 {
                if let Some(&prev) = spawn_ticks.last() {
                    let gap = after.elapsed_ticks - prev;
                    let gaps = cfg.min_spawn_gap..=cfg.max_spawn_gap;
                    assert!(gaps.contains(&gap), "seed {seed} gap {gap}");
                }
                spawn_ticks.push(after.elapsed_ticks);
            }
            let removed = before.obstacles.len() as u64 + spawned - after.obstacles.len() as u64;
            let tick = after.elapsed_ticks;
            assert_eq!(after.score - before.score, removed, "seed {seed} tick {tick}");
            assert!(after.obstacles.iter().all(|o| o.width >= 0.0 && o.height >= 0.0));
            let since = after.elapsed_ticks - spawn_ticks.last().copied().unwrap_or(0);
            assert!(since <= cfg.max_spawn_gap, "seed {seed}: no spawn for {since} ticks");

            if phase == Phase::GameOver {
                game.push_action(Action::Restart);
            }
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed| {
        let mut game = Game::seeded(GameConfig::default(), seed).unwrap();
        for _ in 0..3_000 {
            if autopilot(&game) {
                game.push_action(Action::Jump);
            }
            game.tick();
        }
        (game.session().clone(), *game.runner())
    };
    assert_eq!(run(77), run(77));
}
