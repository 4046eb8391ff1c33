/*
 * Renderer Module
 *
 * This module turns the particle store into drawing primitives.
 * Particles are drawn in index order, so later particles paint over earlier
 * ones, and anything outside the canvas is skipped. The Portal theme adds a
 * glowing divider down the middle and draws the right half as circles.
 *
 * Drawing goes through the DrawSurface trait. CanvasDraw maps it onto a
 * nannou Draw; FrameRecorder keeps the commands for headless use.
 */

use nannou::color::{IntoLinSrgba, LinSrgba};
use nannou::prelude::*;

use crate::system::ParticleSystem;
use crate::theme::{ParticleColor, Theme};

const DIVIDER_WIDTH: f32 = 2.0;
const DIVIDER_GLOW: f32 = 10.0;
const DIVIDER_COLOR: ParticleColor = ParticleColor::Rgba { red: 255, green: 255, blue: 255, alpha: 0.5 };

/// A 2D surface in canvas pixel space (origin top-left, y down).
pub trait DrawSurface {
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, glow: f32, color: ParticleColor);
    fn fill_rect(&mut self, top_left: Vec2, side: f32, color: ParticleColor);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: ParticleColor);
}

/// Depth cue: nearer particles (larger z) draw bigger, never below half size.
pub fn size_multiplier(z: f32) -> f32 {
    (2.0 + z * 0.01).max(0.5)
}

/// Draws the current state of `system` with `theme`. Returns how many particles were visible.
pub fn draw_particles<S: DrawSurface>(system: &ParticleSystem, theme: Theme, surface: &mut S) -> usize {
    let width = system.width();
    let height = system.height();
    let half_width = width / 2.0;
    let base_size = system.params().base_size;
    let total = system.len();

    if theme == Theme::Portal {
        surface.line(
            vec2(half_width, 0.0),
            vec2(half_width, height),
            DIVIDER_WIDTH,
            DIVIDER_GLOW,
            DIVIDER_COLOR,
        );
    }

    let mut visible = 0;
    for (i, particle) in system.particles().iter().enumerate() {
        let (x, y, z) = (particle.position.x, particle.position.y, particle.position.z);
        if !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
            continue;
        }
        visible += 1;

        let size = base_size * size_multiplier(z);
        let color = theme.color(i, total, x / width, y / height, 1.0);

        if theme == Theme::Portal && x >= half_width {
            surface.fill_circle(vec2(x, y), size / 2.0, color);
        } else {
            surface.fill_rect(vec2(x, y), size, color);
        }
    }
    visible
}

/// Draws onto a nannou `Draw`, converting from canvas space to nannou's
/// centred, y-up coordinates.
pub struct CanvasDraw<'a> {
    draw: &'a Draw,
    width: f32,
    height: f32,
}

impl<'a> CanvasDraw<'a> {
    pub fn new(draw: &'a Draw, width: f32, height: f32) -> Self {
        Self { draw, width, height }
    }

    fn to_screen(&self, p: Vec2) -> Vec2 {
        vec2(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }
}

fn to_linear(color: ParticleColor) -> LinSrgba {
    match color {
        ParticleColor::Hsla { hue, saturation, lightness, alpha } => {
            hsla(hue / 360.0, saturation / 100.0, lightness / 100.0, alpha).into_lin_srgba()
        }
        ParticleColor::Rgba { red, green, blue, alpha } => rgba(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
            alpha,
        )
        .into_lin_srgba(),
    }
}

impl<'a> DrawSurface for CanvasDraw<'a> {
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, glow: f32, color: ParticleColor) {
        let start = self.to_screen(from);
        let end = self.to_screen(to);

        // Soft halo: wider, fainter strokes underneath
        let layers = 4;
        for layer in (1..=layers).rev() {
            let spread = glow * layer as f32 / layers as f32;
            let halo = color.with_alpha(color.alpha() * 0.15);
            self.draw
                .line()
                .start(start)
                .end(end)
                .weight(weight + spread)
                .color(to_linear(halo));
        }

        self.draw.line().start(start).end(end).weight(weight).color(to_linear(color));
    }

    fn fill_rect(&mut self, top_left: Vec2, side: f32, color: ParticleColor) {
        let center = self.to_screen(top_left + vec2(side / 2.0, side / 2.0));
        self.draw.rect().xy(center).w_h(side, side).color(to_linear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: ParticleColor) {
        self.draw
            .ellipse()
            .xy(self.to_screen(center))
            .radius(radius)
            .color(to_linear(color));
    }
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { from: Vec2, to: Vec2, weight: f32, glow: f32, color: ParticleColor },
    Rect { top_left: Vec2, side: f32, color: ParticleColor },
    Circle { center: Vec2, radius: f32, color: ParticleColor },
}

impl DrawCommand {
    /// Whether a filled shape covers the point. Lines never cover.
    pub fn covers(&self, point: Vec2) -> bool {
        match *self {
            DrawCommand::Rect { top_left, side, .. } => {
                point.x >= top_left.x
                    && point.x < top_left.x + side
                    && point.y >= top_left.y
                    && point.y < top_left.y + side
            }
            DrawCommand::Circle { center, radius, .. } => center.distance(point) <= radius,
            DrawCommand::Line { .. } => false,
        }
    }

    pub fn color(&self) -> ParticleColor {
        match *self {
            DrawCommand::Line { color, .. }
            | DrawCommand::Rect { color, .. }
            | DrawCommand::Circle { color, .. } => color,
        }
    }
}

/// Headless surface that keeps every command in paint order.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of the last filled shape painted over `point`.
    pub fn top_color_at(&self, point: Vec2) -> Option<ParticleColor> {
        self.commands
            .iter()
            .rev()
            .find(|command| command.covers(point))
            .map(DrawCommand::color)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for FrameRecorder {
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, glow: f32, color: ParticleColor) {
        self.commands.push(DrawCommand::Line { from, to, weight, glow, color });
    }

    fn fill_rect(&mut self, top_left: Vec2, side: f32, color: ParticleColor) {
        self.commands.push(DrawCommand::Rect { top_left, side, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: ParticleColor) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }
}
