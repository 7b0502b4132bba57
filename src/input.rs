//! Tap and key handling
//!
//! A pointer press and the Space / W / ArrowUp keys all mean the same thing:
//! start a run, flap, or go back to the ready screen.

use crate::audio::{CuePlayer, SoundCue};
use crate::sim::{GameState, RunState};

/// `KeyboardEvent.code` values that act as a tap
pub const TAP_KEYS: [&str; 3] = ["Space", "KeyW", "ArrowUp"];

pub fn is_tap_key(code: &str) -> bool {
    TAP_KEYS.contains(&code)
}

/// Apply one tap immediately
pub fn handle_tap(state: &mut GameState, cues: &mut dyn CuePlayer) {
    match state.phase {
        RunState::Ready => {
            state.phase = RunState::Playing;
            cues.play(SoundCue::Start);
            log::info!("Run started");
        }
        RunState::Playing => state.actor.flap(cues),
        RunState::Ended => {
            state.reset_run();
            log::info!("Back to ready (best {})", state.score.best);
        }
    }
}

/// Apply a key press; returns true when the key was consumed
pub fn handle_key(state: &mut GameState, cues: &mut dyn CuePlayer, code: &str) -> bool {
    if !is_tap_key(code) {
        return false;
    }
    handle_tap(state, cues);
    true
}
