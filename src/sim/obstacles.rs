//! Obstacle stream
//!
//! Pairs spawn at the right edge on a fixed frame cadence, scroll left, and
//! leave from the front once fully off-screen. Spawn order, left-to-right
//! order and queue order are the same thing.

use std::collections::VecDeque;

use rand::Rng;

use super::state::{FrameContext, RunState};
use crate::consts::CANVAS_WIDTH;
use crate::tuning::{SpriteMetrics, Tuning};

/// One top+bottom pair sharing an x position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top edge of the upper piece (always negative when spawned)
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct ObstacleStream {
    /// Live pairs, front is the next to be passed
    pub pairs: VecDeque<Obstacle>,
    /// True while the front pair has not been scored
    pub pending: bool,
    /// Pairs spawned since creation
    pub spawned: u64,

    gap: f32,
    width: f32,
    piece_height: f32,
    spawn_x: f32,
    spawn_interval: u64,
    spawn_base_height: f32,
    spawn_factor_cap: f32,
}

impl ObstacleStream {
    pub fn new(tuning: &Tuning, metrics: &SpriteMetrics) -> Self {
        Self {
            pairs: VecDeque::new(),
            pending: true,
            spawned: 0,
            gap: tuning.gap,
            width: metrics.obstacle_width,
            piece_height: metrics.obstacle_height,
            spawn_x: CANVAS_WIDTH,
            spawn_interval: tuning.spawn_interval,
            spawn_base_height: tuning.spawn_base_height,
            spawn_factor_cap: tuning.spawn_factor_cap,
        }
    }

    /// Adopt the real piece size once the images are known
    pub fn set_metrics(&mut self, metrics: &SpriteMetrics) {
        self.width = metrics.obstacle_width;
        self.piece_height = metrics.obstacle_height;
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn piece_height(&self) -> f32 {
        self.piece_height
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.pairs.front()
    }

    /// Bottom edge of the upper piece
    pub fn gap_top(&self, pair: &Obstacle) -> f32 {
        pair.y + self.piece_height
    }

    /// Top edge of the lower piece
    pub fn gap_bottom(&self, pair: &Obstacle) -> f32 {
        self.gap_top(pair) + self.gap
    }

    /// Drop every pair; the next pair to arrive is scoreable
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.pending = true;
    }

    /// Vertical offset for a new pair, in [-cap * base, -base]
    pub fn spawn_offset<R: Rng>(&self, rng: &mut R) -> f32 {
        let factor = (rng.random::<f32>() + 1.0).min(self.spawn_factor_cap);
        -self.spawn_base_height * factor
    }

    pub fn update<R: Rng>(&mut self, phase: RunState, ctx: &FrameContext, rng: &mut R) {
        if phase != RunState::Playing {
            return;
        }

        if ctx.every(self.spawn_interval) {
            let y = self.spawn_offset(rng);
            self.pairs.push_back(Obstacle { x: self.spawn_x, y });
            self.spawned += 1;
            log::debug!("Spawned pair #{} at y={:.1}", self.spawned, y);
        }

        for pair in self.pairs.iter_mut() {
            pair.x -= ctx.scroll_speed;
        }

        if self.pairs.front().is_some_and(|p| p.x < -self.width) {
            self.pairs.pop_front();
            self.pending = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// Yields the same word forever
    struct FixedRng(u32);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            ((self.0 as u64) << 32) | self.0 as u64
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(4) {
                let bytes = self.0.to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    fn stream() -> ObstacleStream {
        ObstacleStream::new(&Tuning::default(), &SpriteMetrics::default())
    }

    fn ctx(frame: u64) -> FrameContext {
        FrameContext {
            frame,
            scroll_speed: 2.0,
        }
    }

    #[test]
    fn test_spawn_cadence_over_1000_frames() {
        let mut stream = stream();
        let mut rng = Pcg32::seed_from_u64(1);
        for frame in 0..1000 {
            stream.update(RunState::Playing, &ctx(frame), &mut rng);
        }
        assert_eq!(stream.spawned, 10);
    }

    #[test]
    fn test_spawns_at_right_edge_then_scrolls() {
        let mut stream = stream();
        let mut rng = Pcg32::seed_from_u64(1);
        stream.update(RunState::Playing, &ctx(0), &mut rng);
        assert_eq!(stream.pairs.len(), 1);
        // Spawned at 320 and scrolled the same frame
        assert_eq!(stream.pairs[0].x, 318.0);
    }

    #[test]
    fn test_no_motion_or_spawn_outside_playing() {
        let mut stream = stream();
        stream.pairs.push_back(Obstacle { x: 120.0, y: -250.0 });
        let mut rng = Pcg32::seed_from_u64(1);
        for frame in 0..300 {
            stream.update(RunState::Ready, &ctx(frame), &mut rng);
            stream.update(RunState::Ended, &ctx(frame), &mut rng);
        }
        assert_eq!(stream.pairs.len(), 1);
        assert_eq!(stream.pairs[0].x, 120.0);
        assert_eq!(stream.spawned, 0);
    }

    #[test]
    fn test_eviction_sets_pending() {
        let mut stream = stream();
        stream.pending = false;
        stream.pairs.push_back(Obstacle { x: -51.0, y: -250.0 });
        stream.pairs.push_back(Obstacle { x: 149.0, y: -250.0 });
        let mut rng = Pcg32::seed_from_u64(1);

        stream.update(RunState::Playing, &ctx(1), &mut rng);
        assert_eq!(stream.pairs.len(), 1);
        assert_eq!(stream.pairs[0].x, 147.0);
        assert!(stream.pending);
    }

    #[test]
    fn test_spawn_offset_bounds_with_injected_rng() {
        let stream = stream();
        assert_eq!(stream.spawn_offset(&mut FixedRng(0)), -210.0);
        assert_eq!(stream.spawn_offset(&mut FixedRng(u32::MAX)), -210.0 * 1.8);
    }

    #[test]
    fn test_clear_resets_pending() {
        let mut stream = stream();
        stream.pairs.push_back(Obstacle { x: 10.0, y: -250.0 });
        stream.pending = false;
        stream.clear();
        assert!(stream.pairs.is_empty());
        assert!(stream.pending);
    }

    #[test]
    fn test_gap_bounds() {
        let stream = stream();
        let pair = Obstacle { x: 0.0, y: -300.0 };
        assert_eq!(stream.gap_top(&pair), 100.0);
        assert_eq!(stream.gap_bottom(&pair), 185.0);
    }

    proptest! {
        #[test]
        fn prop_pairs_stay_ordered(seed in any::<u64>(), frames in 1u64..2000) {
            let mut stream = stream();
            let mut rng = Pcg32::seed_from_u64(seed);
            for frame in 0..frames {
                stream.update(RunState::Playing, &ctx(frame), &mut rng);
                let xs: Vec<f32> = stream.pairs.iter().map(|p| p.x).collect();
                prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
                for pair in &stream.pairs {
                    prop_assert!(pair.y <= -210.0 && pair.y >= -210.0 * 1.8);
                }
            }
        }
    }
}
