/*
 * Input Module
 *
 * This module handles window events for the backdrop.
 *
 * Features:
 * - Pointer tracking, converted from window space to surface space
 * - Resetting the pointer when it leaves the window
 * - Viewport resizes, which regenerate the particle field
 * - Keyboard shortcuts for run state, overlay and reseeding
 */

use log::{debug, warn};
use nannou::prelude::*;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let position = model.backdrop.viewport().from_window(pos);
    model.backdrop.pointer_moved(position);
}

// Mouse left the window
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.backdrop.pointer_left();
}

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    if let Err(err) = model.backdrop.resize(size.x, size.y, &mut model.surface) {
        warn!("ignoring resize: {err}");
    }
}

// Keyboard shortcuts
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Leave keys to the controls panel while it is being typed into
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => {
            if model.backdrop.is_running() {
                model.backdrop.stop();
            } else {
                model.backdrop.start();
            }
        }
        Key::D => {
            let params = model.backdrop.params_mut();
            params.show_debug = !params.show_debug;
            debug!("debug overlay {}", if params.show_debug { "on" } else { "off" });
        }
        Key::R => model.backdrop.reinitialize(),
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
