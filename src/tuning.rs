//! Gameplay tuning
//!
//! Every constant that shapes the feel of a run lives here so hosts can
//! override it from JSON without touching the simulation.

use serde::{Deserialize, Serialize};

/// Physics and pacing constants for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per frame² while playing
    pub gravity: f32,
    /// Upward velocity applied by a flap
    pub thrust: f32,
    /// Horizontal scroll per frame for ground and obstacles
    pub scroll_speed: f32,
    /// Vertical opening between the top and bottom obstacle pieces
    pub gap: f32,
    /// Frames between obstacle spawns
    pub spawn_interval: u64,
    /// Base height for the random spawn offset
    pub spawn_base_height: f32,
    /// Upper bound of the spawn factor (lower bound is 1.0)
    pub spawn_factor_cap: f32,
    /// Fixed horizontal position of the actor
    pub actor_x: f32,
    /// Actor height at the start of every run
    pub spawn_y: f32,
    /// Frames between bob/animation steps while ready
    pub ready_cadence: u64,
    /// Frames between wing-flap animation steps while playing
    pub flap_cadence: u64,
    /// Frames between tap-prompt animation steps
    pub tap_cadence: u64,
    /// Gravity multiplier while settling after a crash
    pub ended_gravity_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.125,
            thrust: 3.6,
            scroll_speed: 2.0,
            gap: 85.0,
            spawn_interval: 100,
            spawn_base_height: 210.0,
            spawn_factor_cap: 1.8,
            actor_x: 50.0,
            spawn_y: 100.0,
            ready_cadence: 10,
            flap_cadence: 5,
            tap_cadence: 10,
            ended_gravity_scale: 2.0,
        }
    }
}

/// Nominal sprite dimensions the headless simulation measures against
///
/// The renderer draws the real images; these sizes stand in for them
/// wherever gameplay needs a width or height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteMetrics {
    pub actor_width: f32,
    pub actor_height: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub ground_width: f32,
    pub ground_height: f32,
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self {
            actor_width: 34.0,
            actor_height: 26.0,
            obstacle_width: 52.0,
            obstacle_height: 400.0,
            ground_width: 336.0,
            ground_height: 112.0,
        }
    }
}

impl SpriteMetrics {
    /// Radius used for pipe collision and scoring, smaller than the sprite
    pub fn hit_radius(&self) -> f32 {
        self.actor_height / 4.0 + self.actor_width / 4.0
    }

    /// Radius used against the ground line
    pub fn ground_radius(&self) -> f32 {
        self.actor_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gap": 120.0 }"#).unwrap();
        assert_eq!(tuning.gap, 120.0);
        assert_eq!(tuning.thrust, 3.6);
        assert_eq!(tuning.spawn_interval, 100);
    }

    #[test]
    fn test_radii_from_default_sprite() {
        let metrics = SpriteMetrics::default();
        assert_eq!(metrics.hit_radius(), 15.0);
        assert_eq!(metrics.ground_radius(), 17.0);
    }
}
