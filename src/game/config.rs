// Game tuning descriptor.
// Defaults reproduce the classic feel: 800x200 surface, speed 6 ramping to 14,
// an obstacle every 50..=75 ticks, mostly cacti with the odd pterodactyl.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Half-open sampling range `[min, max)`. A collapsed range (`min == max`)
/// always yields `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f64) -> Self {
        Self { min: value, max: value }
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        let finite = self.min.is_finite() && self.max.is_finite();
        if !finite || self.min < 0.0 || self.max < self.min {
            return Err(ConfigError::BadRange { field, min: self.min, max: self.max });
        }
        Ok(())
    }
}

/// Per-kind spawn parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObstacleSpec {
    /// Relative weight in the kind draw.
    pub weight: f64,
    pub width: Span,
    pub height: Span,
    /// Height of the obstacle's underside above the baseline. Must stay
    /// `Span::fixed(0.0)` for ground obstacles.
    pub altitude: Span,
    /// Multiplier applied to the scroll speed for this kind.
    pub speed_factor: f64,
}

/// Everything the simulation needs to know up front. Immutable during a session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct GameConfig {
    pub surface_width: f64,
    pub surface_height: f64,
    /// Screen-space y of the ground line; everything stands on it.
    pub baseline_y: f64,

    pub runner_x: f64,
    pub runner_width: f64,
    pub runner_height: f64,
    pub gravity: f64,
    pub jump_impulse: f64,

    pub initial_speed: f64,
    pub max_speed: f64,
    pub speed_increment: f64,

    pub min_spawn_gap: u64,
    pub max_spawn_gap: u64,
    pub spawn_probability: f64,

    pub ground: ObstacleSpec,
    pub flying: ObstacleSpec,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: 800.0,
            surface_height: 200.0,
            baseline_y: 150.0,
            runner_x: 50.0,
            runner_width: 44.0,
            runner_height: 47.0,
            gravity: 1.0,
            jump_impulse: 18.0,
            initial_speed: 6.0,
            max_speed: 14.0,
            speed_increment: 0.002,
            min_spawn_gap: 50,
            max_spawn_gap: 75,
            spawn_probability: 0.1,
            ground: ObstacleSpec {
                weight: 0.8,
                width: Span::new(20.0, 35.0),
                height: Span::new(40.0, 60.0),
                altitude: Span::fixed(0.0),
                speed_factor: 1.0,
            },
            flying: ObstacleSpec {
                weight: 0.2,
                width: Span::fixed(40.0),
                height: Span::fixed(20.0),
                altitude: Span::new(50.0, 100.0),
                speed_factor: 1.3,
            },
        }
    }
}

impl GameConfig {
    /// Reject tunings the loop cannot honour (e.g. two spawns on one tick).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("runner_width", self.runner_width),
            ("runner_height", self.runner_height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("initial_speed", self.initial_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(0.0..=self.surface_height).contains(&self.baseline_y) {
            return Err(ConfigError::BaselineOutOfBounds {
                baseline: self.baseline_y,
                height: self.surface_height,
            });
        }
        if !(self.max_speed.is_finite() && self.max_speed >= self.initial_speed) {
            return Err(ConfigError::SpeedCap { initial: self.initial_speed, cap: self.max_speed });
        }
        if !(self.speed_increment.is_finite() && self.speed_increment >= 0.0) {
            return Err(ConfigError::Negative {
                field: "speed_increment",
                value: self.speed_increment,
            });
        }
        if self.min_spawn_gap == 0 {
            return Err(ConfigError::ZeroSpawnGap);
        }
        if self.max_spawn_gap < self.min_spawn_gap {
            return Err(ConfigError::SpawnGapOrder {
                min: self.min_spawn_gap,
                max: self.max_spawn_gap,
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::Probability(self.spawn_probability));
        }
        let kinds = [("ground.weight", &self.ground), ("flying.weight", &self.flying)];
        for (weight_field, spec) in kinds {
            if !(spec.weight.is_finite() && spec.weight >= 0.0) {
                return Err(ConfigError::Negative { field: weight_field, value: spec.weight });
            }
            if !(spec.speed_factor.is_finite() && spec.speed_factor > 0.0) {
                return Err(ConfigError::NotPositive {
                    field: "speed_factor",
                    value: spec.speed_factor,
                });
            }
            spec.width.check("width")?;
            spec.height.check("height")?;
            spec.altitude.check("altitude")?;
        }
        let altitude = self.ground.altitude;
        if altitude != Span::fixed(0.0) {
            return Err(ConfigError::GroundAltitude { min: altitude.min, max: altitude.max });
        }
        if self.ground.weight + self.flying.weight <= 0.0 {
            return Err(ConfigError::NoObstacleWeight);
        }
        Ok(())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
