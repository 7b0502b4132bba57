//! Per-frame simulation update
//!
//! Components update in a fixed order: actor, ground, obstacles, overlay.
//! The frame counter advances only after the frame has also been drawn.

use super::actor::ActorEnv;
use super::state::GameState;
use crate::audio::CuePlayer;

/// Update every component for the current frame
pub fn tick(state: &mut GameState, cues: &mut dyn CuePlayer) {
    let ctx = state.clock.context(&state.tuning);
    let GameState {
        phase,
        actor,
        ground,
        obstacles,
        score,
        overlay,
        rng,
        ..
    } = state;

    actor.update(
        phase,
        ActorEnv {
            ctx,
            floor: ground.y,
            obstacles,
            score,
            cues,
        },
    );
    ground.update(*phase, &ctx);
    obstacles.update(*phase, &ctx, rng);
    overlay.update(*phase, &ctx);
}

/// Update and advance the clock without drawing (headless runs)
pub fn step(state: &mut GameState, cues: &mut dyn CuePlayer) {
    tick(state, cues);
    state.clock.advance();
}
