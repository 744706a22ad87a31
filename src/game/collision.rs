// Axis-aligned bounding boxes in screen space (y grows downward).

use super::obstacle::Obstacle;
use super::physics::Runner;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Strict overlap; boxes that only touch along an edge do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Runner box lifted by its current jump offset.
pub fn runner_bounds(runner: &Runner, baseline_y: f64) -> Rect {
    Rect {
        x: runner.x,
        y: baseline_y - runner.height - runner.offset,
        width: runner.width,
        height: runner.height,
    }
}

/// Index of the first obstacle (in spawn order) overlapping the runner.
pub fn first_hit(runner: &Runner, obstacles: &[Obstacle], baseline_y: f64) -> Option<usize> {
    let body = runner_bounds(runner, baseline_y);
    obstacles.iter().position(|o| body.intersects(&o.bounds(baseline_y)))
}
