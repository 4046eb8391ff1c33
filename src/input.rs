/*
 * Input Module
 *
 * This module handles user input events for the particle simulation.
 *
 * Features:
 * - Keyboard shortcuts for mode, theme, debug overlay and pause
 * - Mouse cursor feeding the pointer target source
 * - Right click standing in for the fist gesture
 * - Window resize forwarded to the particle store
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, WindowEvent};

use crate::app::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleMode,
    CycleTheme,
    ToggleDebug,
    TogglePause,
}

pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Space => Some(Action::ToggleMode),
        Key::T => Some(Action::CycleTheme),
        Key::V => Some(Action::ToggleDebug),
        Key::P => Some(Action::TogglePause),
        _ => None,
    }
}

// nannou window coordinates (centred, y up) to canvas pixels (top-left, y down)
pub fn screen_to_canvas(pos: Point2, window_rect: Rect) -> Vec2 {
    vec2(pos.x - window_rect.left(), window_rect.top() - pos.y)
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }
    if let Some(action) = action_for_key(key) {
        model.apply(action);
    }
}

pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let canvas_pos = screen_to_canvas(pos, app.window_rect());
    model.pointer.set_cursor(Some(canvas_pos));
}

pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.pointer.set_cursor(None);
}

pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Right && !model.egui.ctx().is_pointer_over_area() {
        model.pointer.fist();
    }
}

pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.resize(size.x, size.y);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
