//! Dino Runner core crate.
//!
//! An endless runner in the spirit of the offline dinosaur game: jump the
//! cacti, dodge the pterodactyls, and survive as the scroll speed climbs.
//! The simulation in [`game`] is plain Rust and runs natively under
//! `cargo test`; [`web`] attaches it to a canvas and drives it from
//! `requestAnimationFrame` when built for the browser.

use wasm_bindgen::prelude::*;

pub mod error;
pub mod game;
pub mod logging;
pub mod web;

pub use error::{ConfigError, SetupError};
pub use game::{Action, Game, GameConfig, Phase};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
