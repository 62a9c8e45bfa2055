/*
 * Renderer Module
 *
 * Bridges the backdrop to nannou. NannouSurface records the frame pass into
 * a nannou Draw, translating surface coordinates (top-left origin, y down)
 * into window coordinates (centered origin, y up). The view function only
 * submits what the update step recorded.
 */

use log::warn;
use nannou::color::{Rgb, Rgba};
use nannou::prelude::*;

use crate::app::Model;
use crate::surface::Surface;
use crate::viewport::Viewport;

pub struct NannouSurface {
    draw: Draw,
    viewport: Viewport,
    background: Rgb<u8>,
}

impl NannouSurface {
    pub fn new(draw: Draw, background: Rgb<u8>) -> Self {
        Self {
            draw,
            viewport: Viewport::default(),
            background,
        }
    }

    pub fn draw(&self) -> &Draw {
        &self.draw
    }

    fn color(color: Rgb<u8>, alpha: f32) -> Rgba {
        rgba(
            color.red as f32 / 255.0,
            color.green as f32 / 255.0,
            color.blue as f32 / 255.0,
            alpha,
        )
    }
}

impl Surface for NannouSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
    }

    fn clear(&mut self) {
        // Drop last frame's commands before painting the background
        self.draw.reset();
        self.draw.background().color(self.background);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb<u8>, alpha: f32) {
        self.draw
            .ellipse()
            .xy(self.viewport.to_window(center))
            .radius(radius)
            .color(Self::color(color, alpha));
    }

    fn line(&mut self, start: Vec2, end: Vec2, color: Rgb<u8>, alpha: f32, weight: f32) {
        self.draw
            .line()
            .start(self.viewport.to_window(start))
            .end(self.viewport.to_window(end))
            .weight(weight)
            .color(Self::color(color, alpha));
    }
}

// Submit the recorded frame and the controls panel
pub fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(err) = model.surface.draw().to_frame(app, &frame) {
        warn!("failed to submit frame: {err:?}");
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!("failed to draw controls: {err:?}");
    }
}
