/*
 * Particle Field Module
 *
 * Owns the particles of the backdrop. The field is regenerated wholesale
 * whenever the viewport changes; in between, each tick updates and draws
 * every particle in a stable order.
 */

use rand::Rng;

use crate::params::BackdropParams;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::Surface;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Replace every particle with `count` fresh ones spread over the viewport.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        viewport: Viewport,
        rng: &mut R,
        params: &BackdropParams,
    ) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, viewport, params));
        }
    }

    /// Update then draw each particle.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        viewport: Viewport,
        pointer: PointerState,
        surface: &mut S,
        params: &BackdropParams,
    ) {
        for particle in &mut self.particles {
            particle.update(viewport, pointer, params);
            particle.draw(surface, params);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use nannou::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn initialize_replaces_instead_of_appending() {
        let params = BackdropParams::default();
        let mut rng = StdRng::seed_from_u64(3);
        let viewport = Viewport::new(1000.0, 800.0).unwrap();
        let mut field = ParticleField::new();

        field.initialize(80, viewport, &mut rng, &params);
        assert_eq!(field.len(), 80);
        let first = field.particles().to_vec();

        field.initialize(80, viewport, &mut rng, &params);
        assert_eq!(field.len(), 80);
        assert_ne!(field.particles(), first.as_slice());

        field.initialize(5, viewport, &mut rng, &params);
        assert_eq!(field.len(), 5);
    }

    #[test]
    fn initialize_with_zero_count_empties_field() {
        let params = BackdropParams::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new();
        field.initialize(10, Viewport::new(10.0, 10.0).unwrap(), &mut rng, &params);

        field.initialize(0, Viewport::new(10.0, 10.0).unwrap(), &mut rng, &params);
        assert!(field.is_empty());
    }

    #[test]
    fn tick_updates_and_draws_in_order() {
        let params = BackdropParams::default();
        let viewport = Viewport::new(100.0, 100.0).unwrap();
        let mut field = ParticleField::from_particles(vec![
            Particle::new(vec2(10.0, 10.0), vec2(1.0, 0.0), 1.0),
            Particle::new(vec2(50.0, 50.0), vec2(0.0, 1.0), 2.0),
        ]);
        let mut surface = RecordingSurface::new();

        field.tick(viewport, PointerState::Absent, &mut surface, &params);

        let centers: Vec<Vec2> = surface
            .circles()
            .map(|c| match c {
                crate::surface::DrawCommand::Circle { center, .. } => *center,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(centers, vec![vec2(11.0, 10.0), vec2(50.0, 51.0)]);
        assert_eq!(field.particles()[0].position, vec2(11.0, 10.0));
    }
}
