/*
 * Surface Module
 *
 * The drawing surface the backdrop paints onto. Coordinates are in surface
 * space: origin at the top-left corner, y growing downwards. The window
 * implementation lives in the renderer module; RecordingSurface keeps the
 * issued commands so frames can be inspected without a window.
 */

use nannou::color::Rgb;
use nannou::prelude::*;

pub trait Surface {
    /// Match the surface to new viewport dimensions.
    fn resize(&mut self, width: f32, height: f32);

    /// Clear the whole surface.
    fn clear(&mut self);

    /// Paint a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb<u8>, alpha: f32);

    /// Stroke a line segment.
    fn line(&mut self, start: Vec2, end: Vec2, color: Rgb<u8>, alpha: f32, weight: f32);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Resize {
        width: f32,
        height: f32,
    },
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb<u8>,
        alpha: f32,
    },
    Line {
        start: Vec2,
        end: Vec2,
        color: Rgb<u8>,
        alpha: f32,
        weight: f32,
    },
}

// Surface that records every command instead of drawing it
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb<u8>, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn line(&mut self, start: Vec2, end: Vec2, color: Rgb<u8>, alpha: f32, weight: f32) {
        self.commands.push(DrawCommand::Line {
            start,
            end,
            color,
            alpha,
            weight,
        });
    }
}
