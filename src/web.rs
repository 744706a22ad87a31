//! Browser host: canvas surface, keyboard wiring and the animation-frame loop.
//!
//! The running session lives in a thread-local slot. `start_game()` fills it
//! and schedules frames; `stop_game()` cancels the pending frame, removes the
//! key listener and empties the slot so nothing touches a detached canvas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, KeyboardEvent, window,
};

use crate::error::SetupError;
use crate::game::{Action, Game, GameConfig, Surface, draw_frame};

const CANVAS_ID: &str = "dino-canvas";
const SCORE_ID: &str = "dino-score";
const CANVAS_STYLE: &str = "border:3px solid #444; border-radius:10px; \
    background-color:#f7f7f7; display:block; margin:0 auto;";
const SCORE_STYLE: &str = "text-align:center; margin-top:15px; \
    font-family:'Press Start 2P', cursive; font-size:20px;";

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d =
            canvas.get_context("2d")?.ok_or(SetupError::NoContext)?.dyn_into()?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, x, y).ok();
    }
}

struct Host {
    game: Game,
    surface: CanvasSurface,
    score_el: Element,
    shown_score: Option<u64>,
}

impl Host {
    fn frame(&mut self) {
        self.game.tick();
        draw_frame(&mut self.surface, self.game.config(), self.game.runner(), self.game.session());
        let score = self.game.score();
        if self.shown_score != Some(score) {
            self.score_el.set_text_content(Some(&format!("Score: {score}")));
            self.shown_score = Some(score);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Everything needed to tear the loop down again.
struct LoopHandle {
    document: Document,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

thread_local! {
    static HOST: RefCell<Option<Host>> = RefCell::new(None);
    static LOOP: RefCell<Option<LoopHandle>> = RefCell::new(None);
}

/// Start (or restart from scratch) with the default tuning.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    start_with(GameConfig::default())
}

/// Start with a JSON tuning object; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(config_json: &str) -> Result<(), JsValue> {
    let cfg = GameConfig::from_json(config_json).inspect_err(|e| warn!("rejected config: {e}"))?;
    start_with(cfg)
}

/// Stop the loop and detach from the page. Safe to call when not running.
#[wasm_bindgen]
pub fn stop_game() {
    let handle = LOOP.with(|cell| cell.borrow_mut().take());
    if let Some(handle) = handle {
        if let (Some(id), Some(win)) = (handle.frame_id.take(), window()) {
            win.cancel_animation_frame(id).ok();
        }
        let listener = handle.keydown.as_ref().unchecked_ref();
        handle.document.remove_event_listener_with_callback("keydown", listener).ok();
        // Dropping the closure breaks the self-referencing frame cycle.
        handle.frame.borrow_mut().take();
        info!("game stopped");
    }
    HOST.with(|cell| cell.borrow_mut().take());
}

/// True while a frame loop is scheduled (between start and stop).
#[wasm_bindgen]
pub fn is_running() -> bool {
    LOOP.with(|cell| cell.borrow().is_some())
}

#[wasm_bindgen]
pub fn current_score() -> u32 {
    HOST.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(0, |h| u32::try_from(h.game.score()).unwrap_or(u32::MAX))
    })
}

#[wasm_bindgen]
pub fn is_game_over() -> bool {
    HOST.with(|cell| cell.borrow().as_ref().is_some_and(|h| h.game.is_over()))
}

/// Queue a jump from a non-keyboard control (e.g. a touch button).
#[wasm_bindgen]
pub fn queue_jump() {
    push_action(Action::Jump);
}

#[wasm_bindgen]
pub fn queue_restart() {
    push_action(Action::Restart);
}

fn push_action(action: Action) {
    HOST.with(|cell| {
        if let Some(host) = cell.borrow_mut().as_mut() {
            host.game.push_action(action);
        }
    });
}

fn start_with(cfg: GameConfig) -> Result<(), JsValue> {
    crate::logging::init(false);
    // A rejected config leaves any running session alone.
    let game = Game::new(cfg).inspect_err(|e| warn!("rejected config: {e}"))?;
    stop_game();

    let win = window().ok_or(SetupError::NoWindow)?;
    let doc = win.document().ok_or(SetupError::NoDocument)?;

    let canvas = ensure_canvas(&doc, game.config())?;
    let surface = CanvasSurface::new(canvas)?;
    let score_el = ensure_score_overlay(&doc)?;

    HOST.with(|cell| {
        cell.borrow_mut().replace(Host { game, surface, score_el, shown_score: None });
    });

    let keydown = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        if let Some(action) = Action::from_key(&evt.key()) {
            // keep Space / ArrowUp from scrolling the page
            evt.prevent_default();
            push_action(action);
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let frame_id = Rc::new(Cell::new(None));
    {
        let f = frame.clone();
        let id = frame_id.clone();
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            let alive = HOST.with(|cell| match cell.borrow_mut().as_mut() {
                Some(host) => {
                    host.frame();
                    true
                }
                None => false,
            });
            id.set(None);
            if alive {
                if let Some(cb) = f.borrow().as_ref() {
                    id.set(request_frame(cb).ok());
                }
            }
        }) as Box<dyn FnMut(f64)>));
    }
    if let Some(cb) = frame.borrow().as_ref() {
        frame_id.set(Some(request_frame(cb)?));
    }

    LOOP.with(|cell| {
        cell.borrow_mut().replace(LoopHandle { document: doc, frame, frame_id, keydown });
    });
    info!("game started");
    Ok(())
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window().ok_or(SetupError::NoWindow)?.request_animation_frame(cb.as_ref().unchecked_ref())
}

fn ensure_canvas(doc: &Document, cfg: &GameConfig) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = match doc.get_element_by_id(CANVAS_ID) {
        Some(el) => el.dyn_into().map_err(|_| SetupError::NotACanvas(CANVAS_ID))?,
        None => {
            let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
            c.set_id(CANVAS_ID);
            c.set_attribute("style", CANVAS_STYLE).ok();
            doc.body().ok_or(SetupError::NoBody)?.append_child(&c)?;
            c
        }
    };
    canvas.set_width(cfg.surface_width as u32);
    canvas.set_height(cfg.surface_height as u32);
    Ok(canvas)
}

fn ensure_score_overlay(doc: &Document) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(SCORE_ID) {
        return Ok(el);
    }
    let div = doc.create_element("p")?;
    div.set_id(SCORE_ID);
    div.set_text_content(Some("Score: 0"));
    div.set_attribute("style", SCORE_STYLE).ok();
    doc.body().ok_or(SetupError::NoBody)?.append_child(&div)?;
    Ok(div)
}
