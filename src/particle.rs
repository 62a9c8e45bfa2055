/*
 * Particle Module
 *
 * This module defines the Particle struct and its behavior.
 * Each particle drifts with a constant velocity, bounces off the viewport
 * edges and is pulled gently towards the pointer when it comes close.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::BackdropParams;
use crate::pointer::PointerState;
use crate::surface::Surface;
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    // Spawn a particle uniformly inside the viewport
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, params: &BackdropParams) -> Self {
        // Scaling a unit sample keeps zero-sized viewports valid
        let position = vec2(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let velocity = vec2(
            (rng.gen::<f32>() - 0.5) * 2.0 * params.max_speed,
            (rng.gen::<f32>() - 0.5) * 2.0 * params.max_speed,
        );
        let radius = params.min_radius + rng.gen::<f32>() * (params.max_radius - params.min_radius);

        Self::new(position, velocity, radius)
    }

    // Advance one tick: drift, bounce off the edges, then drift towards the pointer
    pub fn update(&mut self, viewport: Viewport, pointer: PointerState, params: &BackdropParams) {
        self.position += self.velocity;

        // A boundary hit counts as a crossing
        if self.position.x <= 0.0 || self.position.x >= viewport.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y <= 0.0 || self.position.y >= viewport.height {
            self.velocity.y = -self.velocity.y;
        }

        self.position = viewport.clamp(self.position);

        let Some(target) = pointer.position() else {
            return;
        };

        let delta = target - self.position;
        let distance = delta.length();
        if distance < params.mouse_connection_distance {
            let force = 1.0 - distance / params.mouse_connection_distance;
            self.position += delta * force * params.attraction;
            // The pointer may be reported outside the window
            self.position = viewport.clamp(self.position);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, params: &BackdropParams) {
        surface.fill_circle(self.position, self.radius, params.color, params.particle_opacity);
    }
}
