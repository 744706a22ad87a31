// Browser tests for the wasm host. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn start_attaches_canvas_and_score() {
    dino_runner::web::start_game().unwrap();
    let canvas = document().get_element_by_id("dino-canvas").expect("canvas created");
    assert_eq!(canvas.get_attribute("width").as_deref(), Some("800"));
    assert!(document().get_element_by_id("dino-score").is_some());
    assert_eq!(dino_runner::web::current_score(), 0);
    assert!(!dino_runner::web::is_game_over());
    assert!(dino_runner::web::is_running());
    dino_runner::web::stop_game();
}

#[wasm_bindgen_test]
fn stop_clears_status_and_is_idempotent() {
    dino_runner::web::start_game().unwrap();
    dino_runner::web::queue_jump();
    dino_runner::web::stop_game();
    dino_runner::web::stop_game();
    assert!(!dino_runner::web::is_running());
    assert_eq!(dino_runner::web::current_score(), 0);
    assert!(!dino_runner::web::is_game_over());
}

#[wasm_bindgen_test]
fn restart_from_scratch_reuses_canvas() {
    dino_runner::web::start_game().unwrap();
    let first = document().get_element_by_id("dino-canvas").unwrap();
    dino_runner::web::start_game().unwrap();
    let second = document().get_element_by_id("dino-canvas").unwrap();
    assert!(first.is_same_node(Some(&second)));
    dino_runner::web::stop_game();
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen_test]
fn rejected_config_keeps_current_game() {
    dino_runner::web::start_game().unwrap();
    dino_runner::web::queue_jump();
    assert!(dino_runner::web::start_game_with_config(r#"{ "min_spawn_gap": 0 }"#).is_err());
    assert!(dino_runner::web::is_running());
    assert!(document().get_element_by_id("dino-canvas").is_some());
    dino_runner::web::stop_game();
}
