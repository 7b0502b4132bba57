//! World layer: sky, background, obstacles, actor, ground

use glam::Vec2;

use super::{Sprite, Surface};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, SKY_COLOR};
use crate::deg_to_rad;
use crate::sim::GameState;
use crate::tuning::SpriteMetrics;

/// Real image size, or `fallback` while the image is still loading
fn size_or(surface: &dyn Surface, sprite: Sprite, fallback: Vec2) -> Vec2 {
    let size = surface.sprite_size(sprite);
    if size.x > 0.0 && size.y > 0.0 { size } else { fallback }
}

pub fn draw_background(surface: &mut dyn Surface) {
    surface.set_fill_style(SKY_COLOR);
    surface.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
    let bg = surface.sprite_size(Sprite::Background);
    surface.draw_image(Sprite::Background, 0.0, CANVAS_HEIGHT - bg.y);
}

/// Adopt the real image sizes for every piece of collision geometry
///
/// Runs before anything is drawn, so the gap, radii and floor always match
/// what ends up on screen. Sprites still loading keep their current size.
pub fn sync_sprite_metrics(state: &mut GameState, surface: &dyn Surface) {
    let current = state.metrics;
    let actor = size_or(
        surface,
        Sprite::Actor0,
        Vec2::new(current.actor_width, current.actor_height),
    );
    let obstacle = size_or(
        surface,
        Sprite::ObstacleTop,
        Vec2::new(current.obstacle_width, current.obstacle_height),
    );
    let ground = size_or(
        surface,
        Sprite::Ground,
        Vec2::new(current.ground_width, current.ground_height),
    );

    let metrics = SpriteMetrics {
        actor_width: actor.x,
        actor_height: actor.y,
        obstacle_width: obstacle.x,
        obstacle_height: obstacle.y,
        ground_width: ground.x,
        ground_height: ground.y,
    };
    if metrics != current {
        log::debug!("Sprite metrics now {:?}", metrics);
    }
    state.apply_metrics(metrics);
}

pub fn draw_obstacles(state: &GameState, surface: &mut dyn Surface) {
    let stream = &state.obstacles;
    for pair in &stream.pairs {
        surface.draw_image(Sprite::ObstacleTop, pair.x, pair.y);
        surface.draw_image(Sprite::ObstacleBottom, pair.x, stream.gap_bottom(pair));
    }
}

pub fn draw_actor(state: &GameState, surface: &mut dyn Surface) {
    let actor = &state.actor;
    let sprite = Sprite::actor_frame(actor.frame);
    let size = surface.sprite_size(sprite);

    surface.save();
    surface.translate(actor.pos.x, actor.pos.y);
    surface.rotate(deg_to_rad(actor.rotation));
    surface.draw_image(sprite, -size.x / 2.0, -size.y / 2.0);
    surface.restore();
}

pub fn draw_ground(state: &GameState, surface: &mut dyn Surface) {
    surface.draw_image(Sprite::Ground, state.ground.x, state.ground.y);
}
