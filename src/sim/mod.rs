//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Frame counter is the only clock (no wall time)
//! - Seeded or injected RNG only
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod ground;
pub mod obstacles;
pub mod overlay;
pub mod state;
pub mod tick;

pub use actor::{ANIMATION_FRAMES, Actor, ActorEnv};
pub use collision::{PairContact, front_pair_contact};
pub use ground::Ground;
pub use obstacles::{Obstacle, ObstacleStream};
pub use overlay::{Overlay, TAP_FRAMES};
pub use state::{Clock, FrameContext, GameState, RunState, Score};
pub use tick::{step, tick};
