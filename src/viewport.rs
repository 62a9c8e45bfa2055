/*
 * Viewport Module
 *
 * Tracks the pixel dimensions of the drawable surface and converts between
 * surface space (top-left origin, y down) and nannou window space (centered
 * origin, y up).
 */

use nannou::prelude::*;

use crate::error::BackdropError;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, BackdropError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(BackdropError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    // Clamp a point into [0, width] x [0, height]
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        vec2(point.x.clamp(0.0, self.width), point.y.clamp(0.0, self.height))
    }

    // Convert a surface point to nannou window space
    pub fn to_window(&self, point: Vec2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    // Convert a nannou window point to surface space
    pub fn from_window(&self, point: Point2) -> Vec2 {
        vec2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }
}

/// Owns the current viewport and keeps the surface sized to it.
#[derive(Debug, Default)]
pub struct ViewportManager {
    viewport: Viewport,
}

impl ViewportManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record new dimensions and resize the surface to match.
    ///
    /// Invalid dimensions leave both the viewport and the surface untouched.
    pub fn resize<S: Surface + ?Sized>(
        &mut self,
        width: f32,
        height: f32,
        surface: &mut S,
    ) -> Result<Viewport, BackdropError> {
        let viewport = Viewport::new(width, height)?;
        surface.resize(viewport.width, viewport.height);
        self.viewport = viewport;
        Ok(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn rejects_negative_and_non_finite_dimensions() {
        assert!(Viewport::new(-1.0, 10.0).is_err());
        assert!(Viewport::new(10.0, f32::NAN).is_err());
        assert!(Viewport::new(f32::INFINITY, 10.0).is_err());
        assert!(Viewport::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn clamp_keeps_points_inside() {
        let viewport = Viewport::new(100.0, 50.0).unwrap();
        assert_eq!(viewport.clamp(vec2(-3.0, 70.0)), vec2(0.0, 50.0));
        assert_eq!(viewport.clamp(vec2(40.0, 20.0)), vec2(40.0, 20.0));
        assert!(viewport.contains(vec2(100.0, 0.0)));
        assert!(!viewport.contains(vec2(100.5, 0.0)));
    }

    #[test]
    fn window_conversion_round_trips_through_corners() {
        let viewport = Viewport::new(800.0, 600.0).unwrap();
        assert_eq!(viewport.to_window(vec2(0.0, 0.0)), pt2(-400.0, 300.0));
        assert_eq!(viewport.to_window(vec2(800.0, 600.0)), pt2(400.0, -300.0));
        assert_eq!(viewport.from_window(pt2(0.0, 0.0)), vec2(400.0, 300.0));
        assert_eq!(viewport.from_window(pt2(-400.0, 300.0)), vec2(0.0, 0.0));
    }

    #[test]
    fn resize_updates_surface() {
        let mut manager = ViewportManager::new();
        let mut surface = RecordingSurface::new();
        let viewport = manager.resize(1000.0, 800.0, &mut surface).unwrap();

        assert_eq!(viewport, Viewport { width: 1000.0, height: 800.0 });
        assert_eq!(manager.viewport(), viewport);
        assert_eq!(
            surface.commands,
            vec![DrawCommand::Resize { width: 1000.0, height: 800.0 }]
        );
    }

    #[test]
    fn failed_resize_leaves_state_untouched() {
        let mut manager = ViewportManager::new();
        let mut surface = RecordingSurface::new();
        manager.resize(300.0, 200.0, &mut surface).unwrap();
        surface.reset();

        assert!(manager.resize(-5.0, 200.0, &mut surface).is_err());
        assert_eq!(manager.viewport(), Viewport { width: 300.0, height: 200.0 });
        assert!(surface.commands.is_empty());
    }
}
