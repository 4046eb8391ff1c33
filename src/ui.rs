/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui: mode buttons, theme cycling, the status line and the
 * simulation settings. It also draws the debug overlay onto the canvas.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::particle::Mode;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Normal,
    Success,
    Error,
}

impl StatusLevel {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            StatusLevel::Normal => (0xff, 0xaa, 0x00),
            StatusLevel::Success => (0x00, 0xff, 0x00),
            StatusLevel::Error => (0xff, 0x00, 0x00),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub text: String,
    pub level: StatusLevel,
}

impl Status {
    pub fn new(text: impl Into<String>, level: StatusLevel) -> Self {
        Self { text: text.into(), level }
    }

    pub fn theme_changed(theme: Theme) -> Self {
        Self::new(format!("Theme: {}", theme), StatusLevel::Success)
    }
}

// What the user asked for this frame
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UiResponse {
    pub mode: Option<Mode>,
    pub cycle_theme: bool,
    pub reset_particles: bool,
    pub num_particles_changed: bool,
}

// Update the UI and report the requested changes
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    mode: Mode,
    theme: Theme,
    status: &Status,
    debug_info: &DebugInfo,
) -> UiResponse {
    let mut response = UiResponse::default();

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Particle Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            let (r, g, b) = status.level.rgb();
            ui.colored_label(egui::Color32::from_rgb(r, g, b), status.text.as_str());

            ui.separator();

            ui.horizontal(|ui| {
                for choice in [Mode::Attract, Mode::Repel] {
                    let label = match choice {
                        Mode::Attract => "Attract",
                        Mode::Repel => "Repel",
                    };
                    if ui.selectable_label(mode == choice, label).clicked() && mode != choice {
                        response.mode = Some(choice);
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label(format!("Theme: {}", theme));
                if ui.button("Next Theme").clicked() {
                    response.cycle_theme = true;
                }
            });

            ui.collapsing("Simulation", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_particles, SimulationParams::get_num_particles_range())
                        .text("Number of Particles"),
                );

                if ui.button("Reset Particles").clicked() {
                    response.reset_particles = true;
                }

                ui.separator();

                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Visible Particles: {}", debug_info.visible_particles.get()));
                ui.label(format!("Targets: {}", debug_info.target_count));
            });

            ui.label("Space: toggle mode  T: theme  V: debug  P: pause");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    response.num_particles_changed = params.detect_changes();
    response
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    total: usize,
) {
    let lines = debug_info.lines(total);

    // Background panel in the bottom-left corner, clear of the egui window
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 240.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 100.0, y)
            .w(200.0)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_status() {
        let status = Status::theme_changed(Theme::Ocean);
        assert_eq!(status.text, "Theme: Ocean");
        assert_eq!(status.level, StatusLevel::Success);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(StatusLevel::Success.rgb(), (0, 255, 0));
        assert_eq!(StatusLevel::Error.rgb(), (255, 0, 0));
        assert_eq!(StatusLevel::Normal.rgb(), (255, 170, 0));
    }
}
