/*
 * Backdrop Parameters Module
 *
 * This module defines the BackdropParams struct holding every tunable value
 * of the backdrop: particle count, link thresholds, pointer attraction,
 * spawn ranges and link styling. The controls panel edits these in place;
 * snapshot-based change detection tells the app when the particle field has
 * to be regenerated.
 */

use nannou::color::Rgb;
use nannou::prelude::*;

use crate::error::BackdropError;
use crate::{CONNECTION_DISTANCE, MOUSE_CONNECTION_DISTANCE, PARTICLE_COUNT, PARTICLE_RGB};

pub struct BackdropParams {
    pub particle_count: usize,
    pub connection_distance: f32,
    pub mouse_connection_distance: f32,
    // Fraction of the pointer offset applied per tick at zero distance
    pub attraction: f32,
    // Per-axis bound of the initial velocity
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub particle_opacity: f32,
    // Peak opacities, reached at zero distance
    pub particle_link_opacity: f32,
    pub pointer_link_opacity: f32,
    pub particle_link_weight: f32,
    pub pointer_link_weight: f32,
    pub color: Rgb<u8>,
    pub show_debug: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, PartialEq)]
struct ParamSnapshot {
    particle_count: usize,
    connection_distance: f32,
    mouse_connection_distance: f32,
    attraction: f32,
    max_speed: f32,
    min_radius: f32,
    max_radius: f32,
    particle_opacity: f32,
    particle_link_opacity: f32,
    pointer_link_opacity: f32,
    particle_link_weight: f32,
    pointer_link_weight: f32,
    show_debug: bool,
}

/// What changed between the last snapshot and the current values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParamChanges {
    /// Spawn-affecting values changed; the field must be regenerated.
    pub reinitialize: bool,
    pub any: bool,
}

impl Default for BackdropParams {
    fn default() -> Self {
        let (r, g, b) = PARTICLE_RGB;
        Self {
            particle_count: PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            mouse_connection_distance: MOUSE_CONNECTION_DISTANCE,
            attraction: 0.03,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            particle_opacity: 0.8,
            particle_link_opacity: 0.5,
            pointer_link_opacity: 0.6,
            particle_link_weight: 0.5,
            pointer_link_weight: 0.8,
            color: rgb(r, g, b),
            show_debug: false,
            previous_values: None,
        }
    }
}

impl BackdropParams {
    /// Check every value against its valid domain.
    pub fn validate(&self) -> Result<(), BackdropError> {
        positive("connection_distance", self.connection_distance)?;
        positive("mouse_connection_distance", self.mouse_connection_distance)?;
        non_negative("attraction", self.attraction)?;
        non_negative("max_speed", self.max_speed)?;
        positive("min_radius", self.min_radius)?;
        if !(self.max_radius >= self.min_radius) {
            return Err(BackdropError::InvalidParameter {
                name: "max_radius",
                reason: format!(
                    "must be at least min_radius ({}), got {}",
                    self.min_radius, self.max_radius
                ),
            });
        }
        unit("particle_opacity", self.particle_opacity)?;
        unit("particle_link_opacity", self.particle_link_opacity)?;
        unit("pointer_link_opacity", self.pointer_link_opacity)?;
        non_negative("particle_link_weight", self.particle_link_weight)?;
        non_negative("pointer_link_weight", self.pointer_link_weight)?;
        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Check if any parameters have changed since the last snapshot
    pub fn detect_changes(&self) -> ParamChanges {
        // If we don't have previous values, nothing has changed
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        let reinitialize = self.particle_count != prev.particle_count
            || self.max_speed != prev.max_speed
            || self.min_radius != prev.min_radius
            || self.max_radius != prev.max_radius;

        ParamChanges {
            reinitialize,
            any: *prev != self.snapshot(),
        }
    }

    // Roll back to the last snapshot, used when an edit produced invalid values
    pub fn restore_snapshot(&mut self) {
        let Some(prev) = self.previous_values.clone() else {
            return;
        };
        self.particle_count = prev.particle_count;
        self.connection_distance = prev.connection_distance;
        self.mouse_connection_distance = prev.mouse_connection_distance;
        self.attraction = prev.attraction;
        self.max_speed = prev.max_speed;
        self.min_radius = prev.min_radius;
        self.max_radius = prev.max_radius;
        self.particle_opacity = prev.particle_opacity;
        self.particle_link_opacity = prev.particle_link_opacity;
        self.pointer_link_opacity = prev.pointer_link_opacity;
        self.particle_link_weight = prev.particle_link_weight;
        self.pointer_link_weight = prev.pointer_link_weight;
        self.show_debug = prev.show_debug;
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            particle_count: self.particle_count,
            connection_distance: self.connection_distance,
            mouse_connection_distance: self.mouse_connection_distance,
            attraction: self.attraction,
            max_speed: self.max_speed,
            min_radius: self.min_radius,
            max_radius: self.max_radius,
            particle_opacity: self.particle_opacity,
            particle_link_opacity: self.particle_link_opacity,
            pointer_link_opacity: self.pointer_link_opacity,
            particle_link_weight: self.particle_link_weight,
            pointer_link_weight: self.pointer_link_weight,
            show_debug: self.show_debug,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_particle_count_range() -> std::ops::RangeInclusive<usize> {
        0..=400
    }

    pub fn get_distance_range() -> std::ops::RangeInclusive<f32> {
        20.0..=400.0
    }

    pub fn get_attraction_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.2
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.5..=8.0
    }

    pub fn get_opacity_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_weight_range() -> std::ops::RangeInclusive<f32> {
        0.1..=4.0
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), BackdropError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BackdropError::InvalidParameter {
            name,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), BackdropError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BackdropError::InvalidParameter {
            name,
            reason: format!("must be zero or positive, got {value}"),
        })
    }
}

fn unit(name: &'static str, value: f32) -> Result<(), BackdropError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BackdropError::InvalidParameter {
            name,
            reason: format!("must be within [0, 1], got {value}"),
        })
    }
}
