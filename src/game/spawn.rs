// Obstacle spawn scheduling.
//
// After `min_spawn_gap` ticks since the last spawn, each tick spawns with
// `spawn_probability`; at `max_spawn_gap` the spawn is forced.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use super::config::{GameConfig, Span};
use super::obstacle::{Obstacle, ObstacleKind};
use crate::error::ConfigError;

pub struct SpawnScheduler {
    kinds: WeightedIndex<f64>,
}

impl SpawnScheduler {
    pub fn new(cfg: &GameConfig) -> Result<Self, ConfigError> {
        let weights = ObstacleKind::ALL.map(|k| k.spec(cfg).weight);
        let kinds = WeightedIndex::new(weights).map_err(|_| ConfigError::NoObstacleWeight)?;
        Ok(Self { kinds })
    }

    /// Whether a spawn happens this tick. `since_last` is the number of ticks
    /// elapsed since the previous spawn (or since the session started).
    pub fn should_spawn<R: Rng>(&self, since_last: u64, cfg: &GameConfig, rng: &mut R) -> bool {
        if since_last < cfg.min_spawn_gap {
            return false;
        }
        since_last >= cfg.max_spawn_gap || rng.gen_bool(cfg.spawn_probability)
    }

    /// Draw a new obstacle at the right edge of the surface.
    pub fn spawn<R: Rng>(&self, cfg: &GameConfig, rng: &mut R) -> Obstacle {
        let kind = ObstacleKind::ALL[self.kinds.sample(rng)];
        let spec = kind.spec(cfg);
        let width = sample(spec.width, rng);
        let height = sample(spec.height, rng);
        match kind {
            ObstacleKind::Ground => Obstacle::ground(cfg.surface_width, width, height),
            ObstacleKind::Flying => {
                let altitude = sample(spec.altitude, rng);
                Obstacle::flying(cfg.surface_width, width, height, altitude)
            }
        }
    }

    /// Spawn if due, returning the new obstacle.
    pub fn poll<R: Rng>(&self, since_last: u64, cfg: &GameConfig, rng: &mut R) -> Option<Obstacle> {
        self.should_spawn(since_last, cfg, rng).then(|| self.spawn(cfg, rng))
    }
}

fn sample<R: Rng>(span: Span, rng: &mut R) -> f64 {
    if span.is_fixed() { span.min } else { rng.gen_range(span.min..span.max) }
}
