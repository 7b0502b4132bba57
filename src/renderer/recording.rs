//! Surface that records draw calls instead of rasterising them

use std::collections::HashMap;

use glam::Vec2;

use super::{Sprite, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f32),
    Font(String),
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    Image { sprite: Sprite, x: f32, y: f32 },
    FillText { text: String, x: f32, y: f32 },
    StrokeText { text: String, x: f32, y: f32 },
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate { radians: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    sizes: HashMap<Sprite, Vec2>,
}

impl RecordingSurface {
    /// Nothing loaded: every image is zero-sized
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Sizes of the stock artwork
    pub fn with_default_sizes() -> Self {
        let sizes = Sprite::ALL
            .iter()
            .map(|&sprite| {
                let size = match sprite {
                    Sprite::Background => Vec2::new(276.0, 228.0),
                    Sprite::Ground => Vec2::new(336.0, 112.0),
                    Sprite::ObstacleTop | Sprite::ObstacleBottom => Vec2::new(52.0, 400.0),
                    Sprite::Actor0 | Sprite::Actor1 | Sprite::Actor2 => Vec2::new(34.0, 26.0),
                    Sprite::ReadyBanner => Vec2::new(174.0, 160.0),
                    Sprite::GameOverBanner => Vec2::new(188.0, 144.0),
                    Sprite::Tap0 | Sprite::Tap1 => Vec2::new(114.0, 98.0),
                };
                (sprite, size)
            })
            .collect();
        Self {
            commands: Vec::new(),
            sizes,
        }
    }

    pub fn set_size(&mut self, sprite: Sprite, size: Vec2) {
        self.sizes.insert(sprite, size);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Images actually drawn, in order
    pub fn images(&self) -> Vec<Sprite> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { sprite, .. } => Some(*sprite),
                _ => None,
            })
            .collect()
    }

    /// Filled text, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h });
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32) {
        // Unloaded images are a no-op, same as the canvas
        if self.sprite_size(sprite) == Vec2::ZERO {
            return;
        }
        self.commands.push(DrawCommand::Image { sprite, x, y });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::StrokeText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCommand::Rotate { radians });
    }

    fn sprite_size(&self, sprite: Sprite) -> Vec2 {
        self.sizes.get(&sprite).copied().unwrap_or(Vec2::ZERO)
    }
}
