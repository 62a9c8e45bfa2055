/*
 * Backdrop Module
 *
 * The controller that owns all animation state: viewport, pointer, particle
 * field, random source and parameters. The host feeds it resize and pointer
 * events and asks for one frame pass per displayed frame.
 *
 * A frame pass, in order:
 * 1. Clear the whole surface
 * 2. Update and draw every particle
 * 3. Draw particle-particle links
 * 4. Draw particle-pointer links
 */

use log::{debug, info, trace};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::BackdropError;
use crate::field::ParticleField;
use crate::links;
use crate::params::BackdropParams;
use crate::pointer::{PointerState, PointerTracker};
use crate::surface::Surface;
use crate::viewport::{Viewport, ViewportManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Links drawn during one frame pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub particle_links: usize,
    pub pointer_links: usize,
}

pub struct Backdrop {
    params: BackdropParams,
    viewport: ViewportManager,
    pointer: PointerTracker,
    field: ParticleField,
    rng: StdRng,
    state: LoopState,
    frames: u64,
}

impl Backdrop {
    /// Create a running backdrop seeded from system entropy.
    ///
    /// The field stays empty until the first `resize`.
    pub fn new(params: BackdropParams) -> Result<Self, BackdropError> {
        Self::from_rng(params, StdRng::from_entropy())
    }

    /// Create a running backdrop with a reproducible particle layout.
    pub fn with_seed(params: BackdropParams, seed: u64) -> Result<Self, BackdropError> {
        Self::from_rng(params, StdRng::seed_from_u64(seed))
    }

    fn from_rng(params: BackdropParams, rng: StdRng) -> Result<Self, BackdropError> {
        params.validate()?;
        Ok(Self {
            params,
            viewport: ViewportManager::new(),
            pointer: PointerTracker::new(),
            field: ParticleField::new(),
            rng,
            state: LoopState::Running,
            frames: 0,
        })
    }

    /// Handle a viewport resize: resize the surface, then replace every particle.
    ///
    /// Runs even when the dimensions did not change, so in-flight trajectories
    /// are always discarded.
    pub fn resize<S: Surface + ?Sized>(
        &mut self,
        width: f32,
        height: f32,
        surface: &mut S,
    ) -> Result<Viewport, BackdropError> {
        let viewport = self.viewport.resize(width, height, surface)?;
        self.reinitialize();
        info!(
            "viewport resized to {}x{}, spawned {} particles",
            viewport.width,
            viewport.height,
            self.field.len()
        );
        Ok(viewport)
    }

    /// Regenerate the field in the current viewport.
    pub fn reinitialize(&mut self) {
        self.field.initialize(
            self.params.particle_count,
            self.viewport.viewport(),
            &mut self.rng,
            &self.params,
        );
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.moved(position);
    }

    pub fn pointer_left(&mut self) {
        if self.pointer.state().is_present() {
            debug!("pointer left the surface");
        }
        self.pointer.left();
    }

    /// Perform one frame pass. Returns `None` while stopped.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<FrameStats> {
        if self.state == LoopState::Stopped {
            return None;
        }

        let viewport = self.viewport.viewport();
        let pointer = self.pointer.state();

        surface.clear();
        self.field.tick(viewport, pointer, surface, &self.params);
        let particle_links = links::draw_particle_links(self.field.particles(), surface, &self.params);
        let pointer_links =
            links::draw_pointer_links(self.field.particles(), pointer, surface, &self.params);

        self.frames += 1;
        let stats = FrameStats {
            particle_links,
            pointer_links,
        };
        trace!("frame {}: {:?}", self.frames, stats);
        Some(stats)
    }

    /// Drive up to `count` frame passes back to back. Returns how many ran.
    pub fn run_frames<S: Surface + ?Sized>(&mut self, count: usize, surface: &mut S) -> usize {
        let mut ran = 0;
        for _ in 0..count {
            if self.frame(surface).is_none() {
                break;
            }
            ran += 1;
        }
        ran
    }

    pub fn start(&mut self) {
        if self.state == LoopState::Stopped {
            info!("animation started");
        }
        self.state = LoopState::Running;
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            info!("animation stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn params(&self) -> &BackdropParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut BackdropParams {
        &mut self.params
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn backdrop(width: f32, height: f32) -> (Backdrop, RecordingSurface) {
        let mut backdrop = Backdrop::with_seed(BackdropParams::default(), 42).unwrap();
        let mut surface = RecordingSurface::new();
        backdrop.resize(width, height, &mut surface).unwrap();
        surface.reset();
        (backdrop, surface)
    }

    #[test]
    fn rejects_invalid_params() {
        let mut params = BackdropParams::default();
        params.mouse_connection_distance = -1.0;
        assert!(Backdrop::with_seed(params, 1).is_err());
    }

    #[test]
    fn field_is_empty_until_first_resize() {
        let backdrop = Backdrop::with_seed(BackdropParams::default(), 1).unwrap();
        assert!(backdrop.field().is_empty());
        assert!(backdrop.is_running());
    }

    #[test]
    fn frame_runs_passes_in_order() {
        let (mut backdrop, mut surface) = backdrop(1000.0, 800.0);
        backdrop.field = ParticleField::from_particles(vec![
            Particle::new(vec2(100.0, 100.0), Vec2::ZERO, 1.0),
            Particle::new(vec2(140.0, 100.0), Vec2::ZERO, 1.0),
        ]);
        backdrop.pointer_moved(vec2(120.0, 100.0));

        let stats = backdrop.frame(&mut surface).unwrap();

        assert_eq!(
            stats,
            FrameStats {
                particle_links: 1,
                pointer_links: 2
            }
        );
        let kinds: Vec<&str> = surface
            .commands
            .iter()
            .map(|c| match c {
                DrawCommand::Clear => "clear",
                DrawCommand::Circle { .. } => "circle",
                DrawCommand::Line { weight, .. } if *weight == 0.5 => "particle-link",
                DrawCommand::Line { .. } => "pointer-link",
                DrawCommand::Resize { .. } => "resize",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "clear",
                "circle",
                "circle",
                "particle-link",
                "pointer-link",
                "pointer-link"
            ]
        );
    }

    #[test]
    fn resize_replaces_field_even_when_unchanged() {
        let (mut backdrop, mut surface) = backdrop(300.0, 300.0);
        let before = backdrop.field().particles().to_vec();

        backdrop.resize(300.0, 300.0, &mut surface).unwrap();

        assert_eq!(backdrop.field().len(), 80);
        assert_ne!(backdrop.field().particles(), before.as_slice());
    }

    #[test]
    fn invalid_resize_keeps_previous_field() {
        let (mut backdrop, mut surface) = backdrop(300.0, 300.0);
        let before = backdrop.field().particles().to_vec();

        assert!(backdrop.resize(f32::NAN, 300.0, &mut surface).is_err());
        assert_eq!(backdrop.field().particles(), before.as_slice());
        assert_eq!(backdrop.viewport(), Viewport::new(300.0, 300.0).unwrap());
    }

    #[test]
    fn stopped_backdrop_draws_nothing() {
        let (mut backdrop, mut surface) = backdrop(400.0, 400.0);
        backdrop.stop();

        assert_eq!(backdrop.state(), LoopState::Stopped);
        assert_eq!(backdrop.frame(&mut surface), None);
        assert_eq!(backdrop.run_frames(10, &mut surface), 0);
        assert!(surface.commands.is_empty());
        assert_eq!(backdrop.frames(), 0);

        backdrop.start();
        assert_eq!(backdrop.run_frames(3, &mut surface), 3);
        assert_eq!(surface.clear_count(), 3);
        assert_eq!(backdrop.frames(), 3);
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let (a, _) = backdrop(640.0, 480.0);
        let (b, _) = backdrop(640.0, 480.0);
        assert_eq!(a.field().particles(), b.field().particles());
    }

    #[test]
    fn param_change_applies_on_reinitialize() {
        let (mut backdrop, _) = backdrop(640.0, 480.0);
        backdrop.params_mut().particle_count = 12;
        assert_eq!(backdrop.field().len(), 80);

        backdrop.reinitialize();
        assert_eq!(backdrop.field().len(), 12);
    }
}
