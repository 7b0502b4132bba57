//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::ground::Ground;
use super::obstacles::ObstacleStream;
use super::overlay::Overlay;
use crate::consts::CANVAS_HEIGHT;
use crate::tuning::{SpriteMetrics, Tuning};

/// Current mode of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    /// Waiting for the first tap
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Crashed; the next tap returns to Ready
    Ended,
}

/// Frame counter driving every periodic behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub frames: u64,
}

impl Clock {
    pub fn advance(&mut self) {
        self.frames += 1;
    }

    /// Per-frame context handed to every component
    pub fn context(&self, tuning: &Tuning) -> FrameContext {
        FrameContext {
            frame: self.frames,
            scroll_speed: tuning.scroll_speed,
        }
    }
}

/// Shared per-frame inputs (replaces global frame/scroll counters)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub frame: u64,
    pub scroll_speed: f32,
}

impl FrameContext {
    /// True on frames that land on the given cadence
    #[inline]
    pub fn every(&self, cadence: u64) -> bool {
        cadence != 0 && self.frame % cadence == 0
    }
}

/// Running and best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub current: u32,
    pub best: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: RunState,
    pub clock: Clock,
    pub tuning: Tuning,
    pub metrics: SpriteMetrics,
    pub actor: Actor,
    pub ground: Ground,
    pub obstacles: ObstacleStream,
    pub score: Score,
    pub overlay: Overlay,
    /// Spawn randomness
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(tuning: Tuning, metrics: SpriteMetrics, seed: u64) -> Self {
        Self {
            seed,
            phase: RunState::Ready,
            clock: Clock::default(),
            actor: Actor::new(&tuning, &metrics),
            ground: Ground::new(&metrics),
            obstacles: ObstacleStream::new(&tuning, &metrics),
            score: Score::default(),
            overlay: Overlay::new(&tuning),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            metrics,
        }
    }

    /// Default tuning and sprite sizes
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Tuning::default(), SpriteMetrics::default(), seed)
    }

    /// Measure everything against `metrics` from now on
    ///
    /// Live pairs keep their positions; only the geometry derived from
    /// sprite sizes changes.
    pub fn apply_metrics(&mut self, metrics: SpriteMetrics) {
        self.metrics = metrics;
        self.actor.set_metrics(&metrics);
        self.obstacles.set_metrics(&metrics);
        self.ground.set_tile_width(metrics.ground_width);
        self.ground.pin(CANVAS_HEIGHT, metrics.ground_height);
    }

    /// Ended -> Ready: the single reset point between runs
    pub fn reset_run(&mut self) {
        self.phase = RunState::Ready;
        self.actor.reset();
        self.obstacles.clear();
        self.score.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;

    #[test]
    fn test_reset_run_restores_start_conditions() {
        let mut state = GameState::with_seed(7);
        state.phase = RunState::Ended;
        state.actor.pos.y = 351.0;
        state.actor.velocity = 6.5;
        state.actor.die_cue_played = true;
        state.obstacles.pairs.push_back(Obstacle { x: 40.0, y: -250.0 });
        state.score = Score { current: 9, best: 12 };

        state.reset_run();

        assert_eq!(state.phase, RunState::Ready);
        assert_eq!(state.actor.velocity, 0.0);
        assert_eq!(state.actor.pos.y, 100.0);
        assert!(state.obstacles.pairs.is_empty());
        assert_eq!(state.score.current, 0);
        assert_eq!(state.score.best, 12);
        assert!(!state.actor.die_cue_played);
    }

    #[test]
    fn test_apply_metrics_reshapes_collision_geometry() {
        let mut state = GameState::with_seed(3);
        let metrics = SpriteMetrics {
            actor_width: 40.0,
            actor_height: 20.0,
            obstacle_width: 60.0,
            obstacle_height: 320.0,
            ground_width: 300.0,
            ground_height: 80.0,
        };

        state.apply_metrics(metrics);

        let pair = Obstacle { x: 0.0, y: -300.0 };
        assert_eq!(state.obstacles.width(), 60.0);
        assert_eq!(state.obstacles.gap_top(&pair), 20.0);
        assert_eq!(state.actor.hit_radius(), 15.0);
        assert_eq!(state.actor.ground_radius(), 20.0);
        assert_eq!(state.ground.y, 400.0);
        assert_eq!(state.metrics, metrics);
    }

    #[test]
    fn test_frame_context_cadence() {
        let ctx = FrameContext {
            frame: 30,
            scroll_speed: 2.0,
        };
        assert!(ctx.every(10));
        assert!(ctx.every(5));
        assert!(!ctx.every(100));
        assert!(!ctx.every(0));
    }
}
