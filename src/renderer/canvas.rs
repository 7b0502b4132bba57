//! Canvas 2D backend

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Sprite, Surface};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::settings::Settings;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<Sprite, HtmlImageElement>,
}

impl CanvasSurface {
    /// Size the canvas to the logical field and start loading every image
    pub fn new(canvas: &HtmlCanvasElement, settings: &Settings) -> Result<Self> {
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("2d context has unexpected type"))?;

        let mut images = HashMap::new();
        for sprite in Sprite::ALL {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(&settings.asset_url(sprite.path()));
                    images.insert(sprite, img);
                }
                Err(_) => log::warn!("Failed to create image element for {:?}", sprite),
            }
        }
        log::info!("Loading {} images", images.len());

        Ok(Self { ctx, images })
    }

    fn loaded(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        self.images
            .get(&sprite)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

impl Surface for CanvasSurface {
    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32) {
        let Some(img) = self.loaded(sprite) else { return };
        let _ = self
            .ctx
            .draw_image_with_html_image_element(img, x as f64, y as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        let _ = self.ctx.stroke_text(text, x as f64, y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        let _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        let _ = self.ctx.rotate(radians as f64);
    }

    fn sprite_size(&self, sprite: Sprite) -> Vec2 {
        self.loaded(sprite)
            .map(|img| Vec2::new(img.natural_width() as f32, img.natural_height() as f32))
            .unwrap_or(Vec2::ZERO)
    }
}
