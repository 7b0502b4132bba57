//! Browser driver
//!
//! Owns the requestAnimationFrame loop and the input listeners. Everything
//! runs on the page's single thread: listeners mutate the engine between
//! frames, and each frame runs to completion before the next is scheduled.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::{FrameSchedule, host, seed_or};
use crate::audio::AudioManager;
use crate::best_score::LocalStorageStore;
use crate::engine::Engine;
use crate::renderer::CanvasSurface;
use crate::settings::Settings;

/// Loop state shared between the frame callback and the listeners
struct Runner {
    engine: Engine,
    surface: CanvasSurface,
    schedule: FrameSchedule,
}

/// Handle returned to the page
///
/// Freeing the handle tears the game down, since the listeners it owns
/// cannot outlive it.
#[wasm_bindgen]
pub struct GameHandle {
    audio: Rc<RefCell<AudioManager>>,
    runner: Rc<RefCell<Runner>>,
    canvas: HtmlCanvasElement,
    on_click: Closure<dyn FnMut(MouseEvent)>,
    on_key: Closure<dyn FnMut(KeyboardEvent)>,
}

#[wasm_bindgen]
impl GameHandle {
    /// Remove input listeners and stop scheduling frames
    pub fn teardown(&mut self) {
        let mut runner = self.runner.borrow_mut();
        if !runner.schedule.is_running() {
            return;
        }

        let window = web_sys::window();
        if let (Some(window), Some(id)) = (window.as_ref(), runner.schedule.stop()) {
            let _ = window.cancel_animation_frame(id);
        }
        let _ = self
            .canvas
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        if let Some(window) = window {
            let _ = window
                .remove_event_listener_with_callback("keydown", self.on_key.as_ref().unchecked_ref());
        }
        log::info!("Game torn down");
    }

    /// Current score of the run in progress
    pub fn score(&self) -> u32 {
        self.runner.borrow().engine.state().score.current
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&self, vol: f32) {
        self.audio.borrow_mut().volume.set_master(vol);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&self, vol: f32) {
        self.audio.borrow_mut().volume.set_sfx(vol);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&self, muted: bool) {
        self.audio.borrow_mut().volume.muted = muted;
    }
}

impl Drop for GameHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialised when the page starts a second game
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Start a game on the canvas with the given element id
///
/// `settings_json` is optional host configuration; invalid JSON falls back
/// to defaults.
#[wasm_bindgen]
pub fn start_game(canvas_id: &str, settings_json: Option<String>) -> Result<GameHandle, JsValue> {
    init_logging();
    let settings = Settings::from_host(settings_json.as_deref());
    start(canvas_id, &settings).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

pub fn start(canvas_id: &str, settings: &Settings) -> Result<GameHandle> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow!("no element #{}", canvas_id))?
        .dyn_into()
        .map_err(|_| anyhow!("#{} is not a canvas", canvas_id))?;

    host::signal_ready();

    let surface = CanvasSurface::new(&canvas, settings)?;
    let seed = seed_or(settings.seed, || js_sys::Date::now() as u64);
    let audio = Rc::new(RefCell::new(AudioManager::new(settings)));
    let engine = Engine::from_settings(
        settings,
        seed,
        Box::new(audio.clone()),
        Box::new(LocalStorageStore),
    );

    let runner = Rc::new(RefCell::new(Runner {
        engine,
        surface,
        schedule: FrameSchedule::default(),
    }));

    let on_click = {
        let runner = runner.clone();
        Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut r = runner.borrow_mut();
            if r.schedule.is_running() {
                r.engine.tap();
            }
        })
    };
    let on_key = {
        let runner = runner.clone();
        Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut r = runner.borrow_mut();
            if r.schedule.is_running() && r.engine.key(&event.code()) {
                // Keep Space/ArrowUp from scrolling the page
                event.prevent_default();
            }
        })
    };
    // Built before registering so a failed registration still tears down
    let handle = GameHandle {
        audio,
        runner,
        canvas,
        on_click,
        on_key,
    };
    handle
        .canvas
        .add_event_listener_with_callback("click", handle.on_click.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("click listener: {:?}", e))?;
    window
        .add_event_listener_with_callback("keydown", handle.on_key.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("keydown listener: {:?}", e))?;

    request_animation_frame(handle.runner.clone());
    log::info!("Flappy Canvas running on #{}", canvas_id);

    Ok(handle)
}

fn request_animation_frame(runner: Rc<RefCell<Runner>>) {
    let Some(window) = web_sys::window() else { return };
    let next = runner.clone();
    let callback = Closure::once_into_js(move |_time: f64| {
        game_loop(next);
    });
    match window.request_animation_frame(callback.unchecked_ref()) {
        Ok(id) => runner.borrow_mut().schedule.scheduled(id),
        Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
    }
}

fn game_loop(runner: Rc<RefCell<Runner>>) {
    {
        let mut r = runner.borrow_mut();
        if !r.schedule.begin_frame() {
            return;
        }
        let Runner {
            engine, surface, ..
        } = &mut *r;
        engine.frame(surface);
    }

    request_animation_frame(runner);
}
