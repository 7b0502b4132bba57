//! Scrolling ground strip

use super::state::{FrameContext, RunState};
use crate::consts::CANVAS_HEIGHT;
use crate::tuning::SpriteMetrics;

#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    /// Horizontal tiling offset, wraps at half a tile
    pub x: f32,
    /// Top edge; the floor the actor lands on
    pub y: f32,
    tile_width: f32,
}

impl Ground {
    pub fn new(metrics: &SpriteMetrics) -> Self {
        let mut ground = Self {
            x: 0.0,
            y: 0.0,
            tile_width: metrics.ground_width,
        };
        ground.pin(CANVAS_HEIGHT, metrics.ground_height);
        ground
    }

    /// Scroll left while playing
    pub fn update(&mut self, phase: RunState, ctx: &FrameContext) {
        if phase != RunState::Playing {
            return;
        }
        self.x -= ctx.scroll_speed;
        let wrap = self.tile_width / 2.0;
        if wrap > 0.0 {
            self.x %= wrap;
        }
    }

    /// Keep the strip pinned to the bottom of the field
    pub fn pin(&mut self, field_height: f32, tile_height: f32) {
        self.y = field_height - tile_height;
    }

    /// Replace the tile width once the real image is known
    pub fn set_tile_width(&mut self, width: f32) {
        self.tile_width = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(frame: u64) -> FrameContext {
        FrameContext {
            frame,
            scroll_speed: 2.0,
        }
    }

    #[test]
    fn test_pinned_to_bottom() {
        let ground = Ground::new(&SpriteMetrics::default());
        assert_eq!(ground.y, 368.0);
    }

    #[test]
    fn test_static_unless_playing() {
        let mut ground = Ground::new(&SpriteMetrics::default());
        for frame in 0..50 {
            ground.update(RunState::Ready, &ctx(frame));
            ground.update(RunState::Ended, &ctx(frame));
        }
        assert_eq!(ground.x, 0.0);
    }

    #[test]
    fn test_scroll_wraps_at_half_tile() {
        let mut ground = Ground::new(&SpriteMetrics::default());
        for frame in 0..83 {
            ground.update(RunState::Playing, &ctx(frame));
        }
        assert_eq!(ground.x, -166.0);
        ground.update(RunState::Playing, &ctx(83));
        // -168 % 168
        assert_eq!(ground.x, 0.0);
        ground.update(RunState::Playing, &ctx(84));
        assert_eq!(ground.x, -2.0);
    }
}
