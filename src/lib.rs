//! Flappy Canvas - a side-scrolling flappy arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (actor, ground, obstacles, run state)
//! - `input`: Tap/key handling that drives run-state transitions
//! - `renderer`: Immediate-mode 2D drawing contract and draw order
//! - `engine`: Per-frame orchestration of update then draw
//! - `platform`: Browser driver and host page handshake
//! - `tuning` / `settings`: Data-driven gameplay constants and host config

pub mod audio;
pub mod best_score;
pub mod engine;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use best_score::{MemoryStore, ScoreStore};
pub use engine::Engine;
pub use settings::Settings;
pub use tuning::{SpriteMetrics, Tuning};

/// Game configuration constants
pub mod consts {
    /// Logical drawing surface size
    pub const CANVAS_WIDTH: f32 = 320.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    /// Sky colour behind the background image
    pub const SKY_COLOR: &str = "#30c0df";

    /// Rotation limits in degrees (nose-up, nose-down)
    pub const MAX_NOSE_UP_DEG: f32 = -25.0;
    pub const MAX_NOSE_DOWN_DEG: f32 = 90.0;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}
