// Obstacles scroll leftwards and are dropped once fully off-screen.

use super::collision::Rect;
use super::config::{GameConfig, ObstacleSpec};

/// Kinds of obstacles. A cactus on the ground or a pterodactyl in the air.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Ground,
    Flying,
}

impl ObstacleKind {
    /// Index order used by the weighted kind draw.
    pub const ALL: [ObstacleKind; 2] = [ObstacleKind::Ground, ObstacleKind::Flying];

    pub fn spec(self, cfg: &GameConfig) -> &ObstacleSpec {
        match self {
            ObstacleKind::Ground => &cfg.ground,
            ObstacleKind::Flying => &cfg.flying,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Left edge in screen space.
    pub x: f64,
    pub width: f64,
    pub height: f64,
    /// Underside height above the baseline; always 0 for ground obstacles.
    pub altitude: f64,
}

impl Obstacle {
    pub fn ground(x: f64, width: f64, height: f64) -> Self {
        Self { kind: ObstacleKind::Ground, x, width, height, altitude: 0.0 }
    }

    pub fn flying(x: f64, width: f64, height: f64, altitude: f64) -> Self {
        Self { kind: ObstacleKind::Flying, x, width, height, altitude }
    }

    /// Screen-space bounding box given the baseline y.
    pub fn bounds(&self, baseline_y: f64) -> Rect {
        Rect {
            x: self.x,
            y: baseline_y - self.altitude - self.height,
            width: self.width,
            height: self.height,
        }
    }

    /// True once the right edge has passed the surface's left edge.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Scroll every obstacle by `speed` (scaled per kind) and drop the ones that
/// left the surface. Returns how many were dropped. Only called while the
/// session is running; a finished game never scrolls.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, speed: f64, cfg: &GameConfig) -> u64 {
    for obs in obstacles.iter_mut() {
        obs.x -= speed * obs.kind.spec(cfg).speed_factor;
    }
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_off_screen());
    (before - obstacles.len()) as u64
}
