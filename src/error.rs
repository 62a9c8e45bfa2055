/*
 * Error Module
 *
 * Errors raised while setting up the backdrop. Steady-state animation has
 * no error paths; these only surface at startup, on resize, or when params
 * are changed programmatically.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackdropError {
    /// The window or its drawing surface could not be created.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A resize reported dimensions that cannot bound particles.
    #[error("invalid viewport {width}x{height}: dimensions must be finite and non-negative")]
    InvalidViewport { width: f32, height: f32 },

    /// A parameter was outside its valid domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
