//! 2D immediate-mode rendering
//!
//! The game draws through the `Surface` trait so the same draw code runs on
//! a browser canvas or a recording surface in tests. Images that have not
//! loaded report a zero size and draw nothing.

pub mod hud;
pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::best_score::ScoreStore;
use crate::sim::GameState;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Ground,
    ObstacleTop,
    ObstacleBottom,
    Actor0,
    Actor1,
    Actor2,
    ReadyBanner,
    GameOverBanner,
    Tap0,
    Tap1,
}

impl Sprite {
    pub const ALL: [Sprite; 11] = [
        Sprite::Background,
        Sprite::Ground,
        Sprite::ObstacleTop,
        Sprite::ObstacleBottom,
        Sprite::Actor0,
        Sprite::Actor1,
        Sprite::Actor2,
        Sprite::ReadyBanner,
        Sprite::GameOverBanner,
        Sprite::Tap0,
        Sprite::Tap1,
    ];

    /// Asset path relative to the asset root
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Background => "img/BG.png",
            Sprite::Ground => "img/ground.png",
            Sprite::ObstacleTop => "img/toppipe.png",
            Sprite::ObstacleBottom => "img/botpipe.png",
            Sprite::Actor0 => "img/bird/b0.png",
            Sprite::Actor1 => "img/bird/b1.png",
            Sprite::Actor2 => "img/bird/b2.png",
            Sprite::ReadyBanner => "img/getready.png",
            Sprite::GameOverBanner => "img/go.png",
            Sprite::Tap0 => "img/tap/t0.png",
            Sprite::Tap1 => "img/tap/t1.png",
        }
    }

    /// Image for an actor animation frame; frame 3 reuses frame 0
    pub fn actor_frame(frame: usize) -> Sprite {
        match frame % crate::sim::ANIMATION_FRAMES {
            1 => Sprite::Actor1,
            2 => Sprite::Actor2,
            _ => Sprite::Actor0,
        }
    }

    /// Image for a tap prompt frame
    pub fn tap_frame(frame: usize) -> Sprite {
        if frame % crate::sim::TAP_FRAMES == 0 {
            Sprite::Tap0
        } else {
            Sprite::Tap1
        }
    }
}

/// Immediate-mode 2D drawing context
pub trait Surface {
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, font: &str);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);

    /// Natural size of an image, zero until it has loaded
    fn sprite_size(&self, sprite: Sprite) -> Vec2;
}

/// Draw one frame back-to-front
pub fn draw_frame(state: &mut GameState, surface: &mut dyn Surface, store: &mut dyn ScoreStore) {
    scene::sync_sprite_metrics(state, surface);
    scene::draw_background(surface);
    scene::draw_obstacles(state, surface);
    scene::draw_actor(state, surface);
    scene::draw_ground(state, surface);
    hud::draw_overlay(state, surface, store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_score::MemoryStore;

    #[test]
    fn test_fourth_actor_frame_reuses_first() {
        assert_eq!(Sprite::actor_frame(3), Sprite::Actor0);
        assert_eq!(Sprite::actor_frame(2), Sprite::Actor2);
        assert_eq!(Sprite::tap_frame(1), Sprite::Tap1);
    }

    #[test]
    fn test_draw_order_back_to_front() {
        let mut state = GameState::with_seed(3);
        state.phase = crate::sim::RunState::Playing;
        state.obstacles.pairs.push_back(crate::sim::Obstacle { x: 200.0, y: -250.0 });

        let mut surface = RecordingSurface::with_default_sizes();
        draw_frame(&mut state, &mut surface, &mut MemoryStore::new());

        assert_eq!(
            surface.images(),
            vec![
                Sprite::Background,
                Sprite::ObstacleTop,
                Sprite::ObstacleBottom,
                Sprite::Actor0,
                Sprite::Ground,
            ]
        );
        assert_eq!(surface.texts(), vec!["0"]);
    }

    #[test]
    fn test_unloaded_images_draw_nothing_but_text_still_works() {
        let mut state = GameState::with_seed(3);
        state.phase = crate::sim::RunState::Playing;
        state.score.current = 4;

        let mut surface = RecordingSurface::unloaded();
        draw_frame(&mut state, &mut surface, &mut MemoryStore::new());

        assert!(surface.images().is_empty());
        assert_eq!(surface.texts(), vec!["4"]);
        // Floor falls back to the nominal ground height
        assert_eq!(state.ground.y, 368.0);
    }
}
