/*
 * Application Module
 *
 * This module defines the main application model and the per-frame loop.
 * Every frame runs strictly in sequence:
 * 1. UI and input are folded into the mode, theme and parameters
 * 2. The target source is polled for targets and gestures
 * 3. The particle system is updated once
 * 4. The view fades the previous frame and draws the particles once
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input::{self, Action};
use crate::params::SimulationParams;
use crate::particle::{Mode, Target};
use crate::perception::{Gesture, PointerTargets, TargetSource};
use crate::renderer::{self, CanvasDraw};
use crate::system::ParticleSystem;
use crate::theme::{Theme, ThemeSelector};
use crate::ui::{self, Status, StatusLevel};

// Main model for the application
pub struct Model {
    pub system: ParticleSystem,
    pub params: SimulationParams,
    pub themes: ThemeSelector,
    pub mode: Mode,
    pub pointer: PointerTargets,
    pub targets: Vec<Target>,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub status: Status,
}

impl Model {
    pub fn theme(&self) -> Theme {
        self.themes.current()
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn set_mode(&mut self, mode: Mode) {
        log::info!("Mode changed to {}", mode);
        self.mode = mode;
    }

    pub fn cycle_theme(&mut self) {
        let theme = self.themes.cycle();
        self.status = Status::theme_changed(theme);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleMode => self.toggle_mode(),
            Action::CycleTheme => self.cycle_theme(),
            Action::ToggleDebug => self.params.show_debug = !self.params.show_debug,
            Action::TogglePause => self.params.pause_simulation = !self.params.pause_simulation,
        }
    }

    pub fn handle_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Fist => self.cycle_theme(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        match self.system.resize(width, height) {
            Ok(()) => self.pointer.resize(width, height),
            Err(err) => {
                log::error!("Ignoring resize: {}", err);
                self.status = Status::new(err.to_string(), StatusLevel::Error);
            }
        }
    }

    // Rebuild the store with the current parameters on the current canvas
    pub fn reset_particles(&mut self) {
        let (width, height) = (self.system.width(), self.system.height());
        match ParticleSystem::with_params(self.params.clone(), width, height) {
            Ok(system) => self.system = system,
            Err(err) => {
                log::error!("Could not rebuild particles: {}", err);
                self.status = Status::new(err.to_string(), StatusLevel::Error);
            }
        }
    }
}

// A minimized window can report 0x0, so keep at least one pixel
fn startup_canvas((width, height): (f32, f32)) -> (f32, f32) {
    (width.max(1.0), height.max(1.0))
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Calculate window size based on monitor size (80% of monitor size)
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => {
            log::warn!("No primary monitor found, using a 1280x720 window");
            (1280.0, 720.0)
        }
    };

    let window_id = app
        .new_window()
        .title("Particle Mirror")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .key_pressed(input::key_pressed)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_exited(input::mouse_exited)
        .resized(input::resized)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to build the main window");

    let window = app.window(window_id).expect("Main window closed during setup");
    let egui = Egui::from_window(&window);

    // The canvas follows the window, which may differ from the requested size
    let (width, height) = startup_canvas(window.inner_size_points());

    let params = SimulationParams::default();
    let system = ParticleSystem::with_params(params.clone(), width, height)
        .expect("Default parameters are valid on a non-empty canvas");

    let mut pointer = PointerTargets::default();
    pointer.resize(width, height);

    Model {
        system,
        params,
        themes: ThemeSelector::new(),
        mode: Mode::default(),
        pointer,
        targets: Vec::new(),
        egui,
        debug_info: DebugInfo::default(),
        status: Status::new("Move the mouse over the canvas, right click to change theme", StatusLevel::Normal),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let response = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        model.mode,
        model.themes.current(),
        &model.status,
        &model.debug_info,
    );

    if let Some(mode) = response.mode {
        model.set_mode(mode);
    }
    if response.cycle_theme {
        model.cycle_theme();
    }
    if response.reset_particles || response.num_particles_changed {
        model.reset_particles();
    }

    if model.params.pause_simulation {
        return;
    }

    let perception = model.pointer.poll();
    for gesture in perception.gestures {
        model.handle_gesture(gesture);
    }
    model.targets = perception.targets;
    model.debug_info.target_count = model.targets.len();

    let theme = model.theme();
    if let Err(err) = model.system.update(&model.targets, model.mode, theme) {
        log::error!("Skipped frame: {}", err);
        model.status = Status::new(err.to_string(), StatusLevel::Error);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    if frame.nth() == 0 {
        draw.background().color(BLACK);
    }

    // Fade the previous frame instead of clearing it to leave trails
    draw.rect()
        .xy(window_rect.xy())
        .wh(window_rect.wh())
        .rgba(5.0 / 255.0, 5.0 / 255.0, 5.0 / 255.0, model.params.trail_fade);

    let mut canvas = CanvasDraw::new(&draw, model.system.width(), model.system.height());
    let visible = renderer::draw_particles(&model.system, model.theme(), &mut canvas);
    model.debug_info.visible_particles.set(visible);

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.system.len());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", err);
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to draw UI: {:?}", err);
    }
}
