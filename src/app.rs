/*
 * Application Module
 *
 * This module defines the nannou model for the backdrop and its update
 * step. The window is the drawable surface; nannou's frame loop is the
 * scheduler. Each update performs exactly one frame pass of the backdrop
 * while it is running, and the loop waits for events while it is stopped.
 */

use log::{error, info};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::backdrop::Backdrop;
use crate::debug::DebugInfo;
use crate::error::BackdropError;
use crate::input;
use crate::params::BackdropParams;
use crate::renderer::{self, NannouSurface};
use crate::ui;
use crate::BACKGROUND_RGB;

// Main model for the application
pub struct Model {
    pub backdrop: Backdrop,
    pub surface: NannouSurface,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Run state the loop mode was last synced to
    pub loop_running: bool,
}

// Initialize the model; a missing surface is fatal
pub fn model(app: &App) -> Model {
    match try_model(app) {
        Ok(model) => model,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}

fn try_model(app: &App) -> Result<Model, BackdropError> {
    let window_id = app
        .new_window()
        .title("Driftfield")
        .size(1280, 800)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_exited(input::mouse_exited)
        .resized(input::resized)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .map_err(|err| BackdropError::SurfaceUnavailable(format!("{err:?}")))?;

    let window = app
        .window(window_id)
        .ok_or_else(|| BackdropError::SurfaceUnavailable("window closed during startup".into()))?;

    let egui = Egui::from_window(&window);
    let rect = window.rect();
    drop(window);

    let (r, g, b) = BACKGROUND_RGB;
    let mut surface = NannouSurface::new(app.draw(), rgb(r, g, b));
    let mut backdrop = Backdrop::new(BackdropParams::default())?;

    // Size the field to the window before the first frame
    backdrop.resize(rect.w(), rect.h(), &mut surface)?;
    info!(
        "backdrop ready: {} particles in {:.0}x{:.0}",
        backdrop.field().len(),
        rect.w(),
        rect.h()
    );

    Ok(Model {
        backdrop,
        surface,
        egui,
        debug_info: DebugInfo::default(),
        loop_running: true,
    })
}

// Update the model: controls panel, then one frame pass
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let response = ui::update_ui(&mut model.egui, &mut model.backdrop, &model.debug_info);
    if response.reseed || response.changes.reinitialize {
        model.backdrop.reinitialize();
    }

    sync_loop_mode(app, model);

    if let Some(stats) = model.backdrop.frame(&mut model.surface) {
        model.debug_info.record(stats, model.backdrop.field().len(), model.backdrop.frames());

        if model.backdrop.params().show_debug {
            ui::draw_debug_info(model.surface.draw(), &model.debug_info, app.window_rect());
        }
    }
}

// Stop requesting frames while the backdrop is stopped
fn sync_loop_mode(app: &App, model: &mut Model) {
    let running = model.backdrop.is_running();
    if running == model.loop_running {
        return;
    }

    if running {
        app.set_loop_mode(LoopMode::refresh_sync());
    } else {
        app.set_loop_mode(LoopMode::wait());
    }
    model.loop_running = running;
}
