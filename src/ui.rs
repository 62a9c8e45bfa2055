/*
 * UI Module
 *
 * This module contains the controls panel, built with nannou_egui, and the
 * on-canvas debug overlay. Parameter change detection is handled by the
 * BackdropParams struct; the panel only reports what the app has to act on.
 */

use log::{debug, warn};
use nannou_egui::{egui, Egui};

use crate::backdrop::Backdrop;
use crate::debug::DebugInfo;
use crate::params::{BackdropParams, ParamChanges};

/// What the app has to do after the panel ran.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiResponse {
    pub reseed: bool,
    pub changes: ParamChanges,
}

// Show the controls panel and apply run-state edits to the backdrop
pub fn update_ui(egui: &mut Egui, backdrop: &mut Backdrop, debug_info: &DebugInfo) -> UiResponse {
    let mut reseed = false;
    let mut running = backdrop.is_running();

    let params = backdrop.params_mut();
    params.take_snapshot();

    {
        let ctx = egui.begin_frame();

        egui::Window::new("Backdrop Controls")
            .default_pos([10.0, 10.0])
            .default_open(false)
            .show(&ctx, |ui| {
                ui.collapsing("Particles", |ui| {
                    ui.add(egui::Slider::new(&mut params.particle_count, BackdropParams::get_particle_count_range()).text("Particle Count"));
                    ui.add(egui::Slider::new(&mut params.max_speed, BackdropParams::get_max_speed_range()).text("Max Speed"));
                    ui.add(egui::Slider::new(&mut params.min_radius, BackdropParams::get_radius_range()).text("Min Radius"));
                    ui.add(egui::Slider::new(&mut params.max_radius, BackdropParams::get_radius_range()).text("Max Radius"));
                    ui.add(egui::Slider::new(&mut params.particle_opacity, BackdropParams::get_opacity_range()).text("Opacity"));

                    if ui.button("Reseed Particles").clicked() {
                        reseed = true;
                    }
                });

                ui.collapsing("Links", |ui| {
                    ui.add(egui::Slider::new(&mut params.connection_distance, BackdropParams::get_distance_range()).text("Connection Distance"));
                    ui.add(egui::Slider::new(&mut params.particle_link_opacity, BackdropParams::get_opacity_range()).text("Peak Opacity"));
                    ui.add(egui::Slider::new(&mut params.particle_link_weight, BackdropParams::get_weight_range()).text("Line Weight"));
                });

                ui.collapsing("Pointer", |ui| {
                    ui.add(egui::Slider::new(&mut params.mouse_connection_distance, BackdropParams::get_distance_range()).text("Reach"));
                    ui.add(egui::Slider::new(&mut params.attraction, BackdropParams::get_attraction_range()).text("Attraction"));
                    ui.add(egui::Slider::new(&mut params.pointer_link_opacity, BackdropParams::get_opacity_range()).text("Peak Opacity"));
                    ui.add(egui::Slider::new(&mut params.pointer_link_weight, BackdropParams::get_weight_range()).text("Line Weight"));
                });

                ui.collapsing("Performance", |ui| {
                    ui.label(format!("FPS: {:.1}", debug_info.fps));
                    ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
                    ui.label(format!("Particles: {}", debug_info.particle_count));
                    ui.label(format!("Particle links: {}", debug_info.particle_links));
                    ui.label(format!("Pointer links: {}", debug_info.pointer_links));
                });

                ui.checkbox(&mut params.show_debug, "Show Debug Info");
                ui.checkbox(&mut running, "Running");
                ui.label("Space: start/stop  D: overlay  R: reseed");
            });
    } // End of UI scope - ctx is dropped here

    // Sliders can cross each other, e.g. min radius above max radius
    if let Err(err) = params.validate() {
        warn!("discarding parameter edit: {err}");
        params.restore_snapshot();
    }

    let changes = params.detect_changes();
    if changes.any {
        debug!("backdrop parameters changed (reinitialize: {})", changes.reinitialize);
    }

    if running != backdrop.is_running() {
        if running {
            backdrop.start();
        } else {
            backdrop.stop();
        }
    }

    UiResponse { reseed, changes }
}

// Draw debug information on the canvas, top-left corner
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time_ms()),
        format!("Particles: {}", debug_info.particle_count),
        format!("Particle links: {}", debug_info.particle_links),
        format!("Pointer links: {}", debug_info.pointer_links),
        format!("Window: {:.0}x{:.0}", window_rect.w(), window_rect.h()),
    ];

    // Background panel
    let panel_height = line_height * debug_texts.len() as f32 + margin;
    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Text is centered on its position, so shift right by a fixed offset
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
