//! Error types for the edges of the game: tuning validation and browser setup.
//! The simulation itself never fails; losing is a state, not an error.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Rejected [`GameConfig`](crate::game::GameConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("baseline {baseline} lies outside a surface {height} high")]
    BaselineOutOfBounds { baseline: f64, height: f64 },
    #[error("speed cap {cap} is below the initial speed {initial}")]
    SpeedCap { initial: f64, cap: f64 },
    #[error("minimum spawn gap must be at least one tick")]
    ZeroSpawnGap,
    #[error("maximum spawn gap {max} is below the minimum {min}")]
    SpawnGapOrder { min: u64, max: u64 },
    #[error("spawn probability {0} is outside [0, 1]")]
    Probability(f64),
    #[error("{field} range [{min}, {max}) is invalid")]
    BadRange { field: &'static str, min: f64, max: f64 },
    #[error("ground obstacles stand on the baseline; altitude [{min}, {max}) must be 0")]
    GroundAltitude { min: f64, max: f64 },
    #[error("at least one obstacle kind needs a positive weight")]
    NoObstacleWeight,
    #[error("invalid config json: {0}")]
    Json(String),
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Failures while attaching the game to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("element #{0} is not a canvas")]
    NotACanvas(&'static str),
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ConfigError::SpawnGapOrder { min: 50, max: 10 };
        assert_eq!(err.to_string(), "maximum spawn gap 10 is below the minimum 50");
        assert_eq!(
            SetupError::NotACanvas("dino-canvas").to_string(),
            "element #dino-canvas is not a canvas"
        );
    }
}
