/*
 * Links Module
 *
 * Draws the faint lines of the backdrop: between pairs of nearby particles
 * and from particles to the pointer. Opacity fades linearly from its peak
 * at zero distance to nothing at the threshold; it is the only visual
 * variable, color stays fixed.
 *
 * The particle pass checks every unordered pair. The field only holds tens
 * of particles, so no spatial index is used.
 */

use nannou::prelude::*;

use crate::params::BackdropParams;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::Surface;

/// Opacity of a link of length `distance`, or `None` at or beyond `threshold`.
pub fn link_opacity(distance: f32, threshold: f32, peak: f32) -> Option<f32> {
    if distance < threshold {
        Some((1.0 - distance / threshold) * peak)
    } else {
        None
    }
}

pub fn particle_link_opacity(distance: f32, params: &BackdropParams) -> Option<f32> {
    link_opacity(distance, params.connection_distance, params.particle_link_opacity)
}

pub fn pointer_link_opacity(distance: f32, params: &BackdropParams) -> Option<f32> {
    link_opacity(
        distance,
        params.mouse_connection_distance,
        params.pointer_link_opacity,
    )
}

// Link every pair of particles closer than the connection distance.
// Returns the number of links drawn.
pub fn draw_particle_links<S: Surface + ?Sized>(
    particles: &[Particle],
    surface: &mut S,
    params: &BackdropParams,
) -> usize {
    let threshold_squared = params.connection_distance * params.connection_distance;
    let mut drawn = 0;

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            // Reject with squared distances before paying for the root
            let distance_squared = a.position.distance_squared(b.position);
            if distance_squared >= threshold_squared {
                continue;
            }
            if let Some(alpha) = particle_link_opacity(distance_squared.sqrt(), params) {
                surface.line(
                    a.position,
                    b.position,
                    params.color,
                    alpha,
                    params.particle_link_weight,
                );
                drawn += 1;
            }
        }
    }

    drawn
}

// Link every particle near the pointer to it. Returns the number of links drawn.
pub fn draw_pointer_links<S: Surface + ?Sized>(
    particles: &[Particle],
    pointer: PointerState,
    surface: &mut S,
    params: &BackdropParams,
) -> usize {
    let Some(target) = pointer.position() else {
        return 0;
    };
    let mut drawn = 0;

    for particle in particles {
        let distance = particle.position.distance(target);
        if let Some(alpha) = pointer_link_opacity(distance, params) {
            surface.line(
                particle.position,
                target,
                params.color,
                alpha,
                params.pointer_link_weight,
            );
            drawn += 1;
        }
    }

    drawn
}
