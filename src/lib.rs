/*
 * Driftfield - Module Definitions
 *
 * This file defines the module structure for the ambient particle backdrop.
 * The animation core (particles, field, links, pointer, viewport, backdrop)
 * is independent of the window; the host modules (app, input, renderer, ui,
 * debug) wire it to a nannou window.
 */

// Re-export key components for easier access
pub use backdrop::{Backdrop, FrameStats, LoopState};
pub use error::BackdropError;
pub use field::ParticleField;
pub use params::BackdropParams;
pub use particle::Particle;
pub use pointer::{PointerState, PointerTracker};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use viewport::{Viewport, ViewportManager};
pub use app::Model;

// Define modules
pub mod backdrop;
pub mod error;
pub mod field;
pub mod links;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod surface;
pub mod viewport;
pub mod app;
pub mod debug;
pub mod input;
pub mod renderer;
pub mod ui;

// Constants
pub const PARTICLE_COUNT: usize = 80;
pub const CONNECTION_DISTANCE: f32 = 150.0;
pub const MOUSE_CONNECTION_DISTANCE: f32 = 200.0;
pub const PARTICLE_RGB: (u8, u8, u8) = (100, 142, 183);
pub const BACKGROUND_RGB: (u8, u8, u8) = (12, 16, 26);
