//! Overlay animation state (the drawing lives in the renderer)

use super::state::{FrameContext, RunState};
use crate::tuning::Tuning;

/// Frames in the "tap" prompt animation
pub const TAP_FRAMES: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Current tap prompt frame
    pub tap_frame: usize,
    tap_cadence: u64,
}

impl Overlay {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            tap_frame: 0,
            tap_cadence: tuning.tap_cadence,
        }
    }

    /// Cycle the tap prompt on every screen except live play
    pub fn update(&mut self, phase: RunState, ctx: &FrameContext) {
        if phase == RunState::Playing {
            return;
        }
        if ctx.every(self.tap_cadence) {
            self.tap_frame += 1;
        }
        self.tap_frame %= TAP_FRAMES;
    }
}
