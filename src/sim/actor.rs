//! The player-controlled actor
//!
//! Falls under gravity, flaps upward on demand, and decides the end of a
//! run by touching the ground or the front obstacle pair.

use glam::Vec2;

use super::collision::{PairContact, front_pair_contact};
use super::obstacles::ObstacleStream;
use super::state::{FrameContext, RunState, Score};
use crate::audio::{CuePlayer, SoundCue};
use crate::consts::{MAX_NOSE_DOWN_DEG, MAX_NOSE_UP_DEG};
use crate::tuning::{SpriteMetrics, Tuning};

/// Number of animation frames (the fourth reuses the first image)
pub const ANIMATION_FRAMES: usize = 4;

/// Everything the actor reads or mutates besides itself during an update
pub struct ActorEnv<'a> {
    pub ctx: FrameContext,
    /// Top edge of the ground
    pub floor: f32,
    pub obstacles: &'a mut ObstacleStream,
    pub score: &'a mut Score,
    pub cues: &'a mut dyn CuePlayer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Centre of the sprite; x never changes
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
    /// Degrees, positive is nose-down
    pub rotation: f32,
    /// Animation frame index
    pub frame: usize,
    /// Set once the die cue has played for the current crash
    pub die_cue_played: bool,

    gravity: f32,
    thrust: f32,
    hit_radius: f32,
    ground_radius: f32,
    spawn_y: f32,
    ready_cadence: u64,
    flap_cadence: u64,
    ended_gravity_scale: f32,
}

impl Actor {
    pub fn new(tuning: &Tuning, metrics: &SpriteMetrics) -> Self {
        Self {
            pos: Vec2::new(tuning.actor_x, tuning.spawn_y),
            velocity: 0.0,
            rotation: 0.0,
            frame: 0,
            die_cue_played: false,
            gravity: tuning.gravity,
            thrust: tuning.thrust,
            hit_radius: metrics.hit_radius(),
            ground_radius: metrics.ground_radius(),
            spawn_y: tuning.spawn_y,
            ready_cadence: tuning.ready_cadence,
            flap_cadence: tuning.flap_cadence,
            ended_gravity_scale: tuning.ended_gravity_scale,
        }
    }

    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    pub fn ground_radius(&self) -> f32 {
        self.ground_radius
    }

    /// Re-derive both radii from a new sprite size
    pub fn set_metrics(&mut self, metrics: &SpriteMetrics) {
        self.hit_radius = metrics.hit_radius();
        self.ground_radius = metrics.ground_radius();
    }

    /// Back to the spawn point with no motion
    pub fn reset(&mut self) {
        self.velocity = 0.0;
        self.pos.y = self.spawn_y;
        self.die_cue_played = false;
    }

    /// Upward impulse; ignored once above the top of the field
    pub fn flap(&mut self, cues: &mut dyn CuePlayer) {
        if self.pos.y > 0.0 {
            cues.play(SoundCue::Flap);
            self.velocity = -self.thrust;
        }
    }

    /// Rotation derived from the current velocity
    pub fn rotation_for(velocity: f32, thrust: f32) -> f32 {
        if velocity <= 0.0 {
            (MAX_NOSE_UP_DEG * velocity / -thrust).max(MAX_NOSE_UP_DEG)
        } else {
            (MAX_NOSE_DOWN_DEG * velocity / (thrust * 2.0)).min(MAX_NOSE_DOWN_DEG)
        }
    }

    fn update_rotation(&mut self) {
        self.rotation = Self::rotation_for(self.velocity, self.thrust);
    }

    pub fn update(&mut self, phase: &mut RunState, env: ActorEnv<'_>) {
        let ActorEnv {
            ctx,
            floor,
            obstacles,
            score,
            cues,
        } = env;

        match *phase {
            RunState::Ready => {
                self.rotation = 0.0;
                if ctx.every(self.ready_cadence) {
                    self.pos.y += crate::deg_to_rad(ctx.frame as f32).sin();
                    self.frame += 1;
                }
            }
            RunState::Playing => {
                if ctx.every(self.flap_cadence) {
                    self.frame += 1;
                }
                self.pos.y += self.velocity;
                self.update_rotation();
                // No terminal velocity: the fall keeps accelerating
                self.velocity += self.gravity;

                if self.pos.y + self.ground_radius >= floor
                    || self.check_front_pair(obstacles, score, cues)
                {
                    log::info!("Run ended at score {}", score.current);
                    *phase = RunState::Ended;
                }
            }
            RunState::Ended => {
                self.frame = 1;
                if self.pos.y + self.ground_radius < floor {
                    self.pos.y += self.velocity;
                    self.update_rotation();
                    self.velocity += self.gravity * self.ended_gravity_scale;
                } else {
                    self.velocity = 0.0;
                    self.pos.y = floor - self.ground_radius;
                    self.rotation = MAX_NOSE_DOWN_DEG;
                    if !self.die_cue_played {
                        cues.play(SoundCue::Die);
                        self.die_cue_played = true;
                    }
                }
            }
        }
        self.frame %= ANIMATION_FRAMES;
    }

    /// Collision and scoring against the front pair; true on a hit
    fn check_front_pair(
        &self,
        obstacles: &mut ObstacleStream,
        score: &mut Score,
        cues: &mut dyn CuePlayer,
    ) -> bool {
        match front_pair_contact(self.pos, self.hit_radius, obstacles) {
            PairContact::Struck => {
                cues.play(SoundCue::Hit);
                true
            }
            PairContact::Passed if obstacles.pending => {
                score.current += 1;
                cues.play(SoundCue::Score);
                obstacles.pending = false;
                log::debug!("Scored, now {}", score.current);
                false
            }
            _ => false,
        }
    }
}
