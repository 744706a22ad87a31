//! Endless-runner simulation.
//!
//! `Game` owns the runner, the session state and the spawn RNG and advances
//! them once per `tick()`. Nothing in here knows about the browser: the host
//! (see `crate::web`) calls `tick()` from its frame callback and hands the
//! result to a [`Surface`] for drawing, while tests call `tick()` directly.
//!
//! Tick order while running: physics, spawn, scroll/removal, collision,
//! speed ramp. Once the runner hits something the session is over and only
//! a restart changes state again.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

mod collision;
mod config;
mod input;
mod obstacle;
mod physics;
mod render;
mod spawn;

pub use collision::{Rect, first_hit, runner_bounds};
pub use config::{GameConfig, ObstacleSpec, Span};
pub use input::{Action, PendingInput};
pub use obstacle::{Obstacle, ObstacleKind, advance_obstacles};
pub use physics::{Runner, step};
pub use render::{Surface, draw_frame};
pub use spawn::SpawnScheduler;

use crate::error::ConfigError;

/// Full wing flap cycle in ticks; wings are raised for the first half.
pub const WING_CYCLE: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

/// Mutable per-session counters. Rebuilt from scratch on restart.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Spawn order is also draw and update order.
    pub obstacles: Vec<Obstacle>,
    pub elapsed_ticks: u64,
    pub scroll_speed: f64,
    pub score: u64,
    pub phase: Phase,
    pub last_spawn_tick: u64,
    pub wing_phase: u32,
}

impl SessionState {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            obstacles: Vec::new(),
            elapsed_ticks: 0,
            scroll_speed: cfg.initial_speed,
            score: 0,
            phase: Phase::Running,
            last_spawn_tick: 0,
            wing_phase: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Wings are drawn raised during the first half of the flap cycle.
    pub fn wings_up(&self) -> bool {
        self.wing_phase < WING_CYCLE / 2
    }
}

pub struct Game<R = SmallRng> {
    cfg: GameConfig,
    scheduler: SpawnScheduler,
    rng: R,
    runner: Runner,
    session: SessionState,
    input: PendingInput,
}

impl Game<SmallRng> {
    /// New game seeded from the platform entropy source.
    pub fn new(cfg: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(cfg, SmallRng::from_entropy())
    }

    /// Deterministic game for replays in tests.
    pub fn seeded(cfg: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(cfg, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(cfg: GameConfig, rng: R) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let scheduler = SpawnScheduler::new(&cfg)?;
        Ok(Self {
            runner: Runner::new(&cfg),
            session: SessionState::new(&cfg),
            scheduler,
            rng,
            cfg,
            input: PendingInput::default(),
        })
    }

    /// Latch an action for the next tick.
    pub fn push_action(&mut self, action: Action) {
        self.input.push(action);
    }

    /// Advance the simulation by one tick and report the resulting phase.
    pub fn tick(&mut self) -> Phase {
        let (jump, restart) = self.input.take();
        if self.session.is_over() {
            if restart {
                self.restart();
            }
            return self.session.phase;
        }

        let session = &mut self.session;
        session.elapsed_ticks += 1;

        self.runner = physics::step(self.runner, jump, &self.cfg);

        let since_last = session.elapsed_ticks - session.last_spawn_tick;
        if let Some(obs) = self.scheduler.poll(since_last, &self.cfg, &mut self.rng) {
            debug!(
                "tick {}: spawned {:?} w={:.1} h={:.1} alt={:.1}",
                session.elapsed_ticks, obs.kind, obs.width, obs.height, obs.altitude
            );
            session.obstacles.push(obs);
            session.last_spawn_tick = session.elapsed_ticks;
        }

        let passed = advance_obstacles(&mut session.obstacles, session.scroll_speed, &self.cfg);
        session.score += passed;

        if let Some(idx) = first_hit(&self.runner, &session.obstacles, self.cfg.baseline_y) {
            session.phase = Phase::GameOver;
            info!(
                "game over after {} ticks: hit {:?} obstacle #{}, score {}",
                session.elapsed_ticks, session.obstacles[idx].kind, idx, session.score
            );
            return session.phase;
        }

        let ramped = session.scroll_speed + self.cfg.speed_increment;
        session.scroll_speed = ramped.min(self.cfg.max_speed);
        session.wing_phase = (session.wing_phase + 1) % WING_CYCLE;
        session.phase
    }

    /// Start over. Only meaningful once the session is over; returns false
    /// and leaves everything untouched while running.
    pub fn restart(&mut self) -> bool {
        if !self.session.is_over() {
            return false;
        }
        info!("restart (previous score {})", self.session.score);
        self.session = SessionState::new(&self.cfg);
        self.runner = Runner::new(&self.cfg);
        self.input = PendingInput::default();
        true
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Put an obstacle on the track behind the ones already there, as if it
    /// had just spawned. Spawn bookkeeping is left alone.
    pub fn place_obstacle(&mut self, obstacle: Obstacle) {
        self.session.obstacles.push(obstacle);
    }

    /// Hold the runner at `offset` above the baseline with no vertical
    /// velocity; it falls from there on the next tick. Negative offsets clamp
    /// to the ground.
    pub fn lift_runner(&mut self, offset: f64) {
        self.runner.offset = offset.max(0.0);
        self.runner.velocity = 0.0;
        self.runner.airborne = self.runner.offset > 0.0;
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }
}
