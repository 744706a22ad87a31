// Runner vertical motion: constant gravity, single jump, clamp on landing.

use super::config::GameConfig;

/// The player character. Horizontal position never changes; only the height
/// above the baseline does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Runner {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    /// Distance of the runner's feet above the baseline (0 when grounded).
    pub offset: f64,
    /// Upward velocity in pixels per tick.
    pub velocity: f64,
    pub airborne: bool,
}

impl Runner {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            x: cfg.runner_x,
            width: cfg.runner_width,
            height: cfg.runner_height,
            offset: 0.0,
            velocity: 0.0,
            airborne: false,
        }
    }

    /// Start a jump. Returns false (and changes nothing) if already in the air.
    pub fn try_jump(&mut self, impulse: f64) -> bool {
        if self.airborne {
            return false;
        }
        self.velocity = impulse;
        self.airborne = true;
        true
    }

    /// Advance one tick of projectile motion.
    pub fn integrate(&mut self, gravity: f64) {
        if !self.airborne {
            return;
        }
        self.offset += self.velocity;
        self.velocity -= gravity;
        if self.offset <= 0.0 {
            self.offset = 0.0;
            self.velocity = 0.0;
            self.airborne = false;
        }
    }
}

/// One physics step: optional jump trigger, then integration.
pub fn step(runner: Runner, jump: bool, cfg: &GameConfig) -> Runner {
    let mut next = runner;
    if jump {
        next.try_jump(cfg.jump_impulse);
    }
    next.integrate(cfg.gravity);
    next
}
