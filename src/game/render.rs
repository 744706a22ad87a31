// Frame drawing against an abstract 2D surface.

use super::config::GameConfig;
use super::obstacle::{Obstacle, ObstacleKind};
use super::physics::Runner;
use super::SessionState;

const GROUND_COLOR: &str = "#555";
const RUNNER_COLOR: &str = "#000";
const EYE_COLOR: &str = "#fff";
const CACTUS_COLOR: &str = "#228B22";
const PTERO_COLOR: &str = "#555";
const OVERLAY_COLOR: &str = "rgba(0,0,0,0.6)";
const OVERLAY_TEXT_COLOR: &str = "#fff";
const TITLE_FONT: &str = "30px 'Press Start 2P', cursive";
const HINT_FONT: &str = "18px 'Press Start 2P', cursive";

/// Minimal drawing primitives the game needs from its host.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64);
    fn draw_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str);
}

/// Draw one full frame: ground, runner, obstacles and, once over, the overlay.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &GameConfig,
    runner: &Runner,
    session: &SessionState,
) {
    surface.clear();
    let base = cfg.baseline_y;
    surface.stroke_line(0.0, base, surface.width(), base, GROUND_COLOR, 4.0);

    draw_runner(surface, runner, base);
    let wing = if session.wings_up() { 5.0 } else { 0.0 };
    for obs in &session.obstacles {
        match obs.kind {
            ObstacleKind::Ground => {
                surface.fill_rect(obs.x, base - obs.height, obs.width, obs.height, CACTUS_COLOR)
            }
            ObstacleKind::Flying => draw_pterodactyl(surface, obs, base, wing),
        }
    }

    if session.is_over() {
        draw_game_over(surface);
    }
}

fn draw_runner<S: Surface + ?Sized>(surface: &mut S, runner: &Runner, base: f64) {
    let top = base - runner.height - runner.offset;
    surface.fill_rect(runner.x, top, runner.width, runner.height, RUNNER_COLOR);
    surface.fill_rect(runner.x + 30.0, top + 10.0, 6.0, 6.0, EYE_COLOR);
}

fn draw_pterodactyl<S: Surface + ?Sized>(surface: &mut S, obs: &Obstacle, base: f64, wing: f64) {
    let top = base - obs.altitude - obs.height;
    surface.fill_rect(obs.x, top, obs.width, obs.height * 0.6, PTERO_COLOR);
    surface.fill_rect(obs.x - wing, top + 5.0, obs.width + wing, 5.0, PTERO_COLOR);
    surface.fill_rect(obs.x, top + 15.0, obs.width + wing, 5.0, PTERO_COLOR);
}

fn draw_game_over<S: Surface + ?Sized>(surface: &mut S) {
    let (w, h) = (surface.width(), surface.height());
    surface.fill_rect(0.0, 0.0, w, h, OVERLAY_COLOR);
    let (cx, cy) = (w / 2.0, h / 2.0);
    surface.draw_text("GAME OVER", cx - 90.0, cy - 10.0, TITLE_FONT, OVERLAY_TEXT_COLOR);
    let hint = "Press Enter to Restart";
    surface.draw_text(hint, cx - 110.0, cy + 30.0, HINT_FONT, OVERLAY_TEXT_COLOR);
}
