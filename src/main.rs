//! Flappy Canvas entry point
//!
//! On the web this boots the game on `#canvas`. Natively it plays a
//! headless run with a simple autopilot and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    match flappy_canvas::platform::web::start_game("canvas", None) {
        // The page owns the game for its whole lifetime
        Ok(handle) => std::mem::forget(handle),
        Err(e) => log::error!("Failed to start: {:?}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_canvas::audio::CueRecorder;
    use flappy_canvas::renderer::RecordingSurface;
    use flappy_canvas::sim::{GameState, RunState};
    use flappy_canvas::{Engine, MemoryStore, Settings};

    env_logger::init();
    log::info!("Flappy Canvas (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let settings = Settings::from_host(std::env::args().nth(1).as_deref());
    let seed = flappy_canvas::platform::seed_or(settings.seed, || 2024);
    let mut engine = Engine::from_settings(
        &settings,
        seed,
        Box::new(CueRecorder::default()),
        Box::new(MemoryStore::new()),
    );
    let mut surface = RecordingSurface::with_default_sizes();

    engine.tap();
    const MAX_FRAMES: u64 = 20_000;
    while engine.phase() != RunState::Ended && engine.state().clock.frames < MAX_FRAMES {
        if autopilot_wants_flap(engine.state()) {
            engine.tap();
        }
        surface.clear();
        engine.frame(&mut surface);
    }
    // Let the actor settle and the game-over overlay sync the best score
    for _ in 0..120 {
        surface.clear();
        engine.frame(&mut surface);
    }

    let state = engine.state();
    let summary = serde_json::json!({
        "seed": seed,
        "frames": state.clock.frames,
        "phase": state.phase,
        "score": state.score,
        "obstacles_spawned": state.obstacles.spawned,
    });
    println!("{}", summary);

    fn autopilot_wants_flap(state: &GameState) -> bool {
        let actor = &state.actor;
        let target = match state.obstacles.front() {
            Some(front) => state.obstacles.gap_bottom(front) - actor.hit_radius() - 12.0,
            None => 200.0,
        };
        actor.pos.y > target && actor.velocity > 0.0
    }
}
