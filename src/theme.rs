/*
 * Theme Module
 *
 * This module defines the visual themes and the color model.
 * A theme picks the color of every particle from its index and its
 * normalized canvas position, and for Portal also switches on an extra
 * physics overlay in the integrator.
 *
 * Colors are produced in HSLA form (hue in degrees, saturation and
 * lightness in percent) and format as CSS color strings.
 */

use std::f32::consts::PI;
use std::fmt;

/// The fixed set of themes, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Rainbow,
    Fire,
    Ocean,
    Galaxy,
    Matrix,
    Portal,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Rainbow,
        Theme::Fire,
        Theme::Ocean,
        Theme::Galaxy,
        Theme::Matrix,
        Theme::Portal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Rainbow => "Rainbow",
            Theme::Fire => "Fire",
            Theme::Ocean => "Ocean",
            Theme::Galaxy => "Galaxy",
            Theme::Matrix => "Matrix",
            Theme::Portal => "Portal",
        }
    }

    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|theme| theme.name() == name)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The next theme in cycling order, wrapping after Portal.
    pub fn next(self) -> Theme {
        Theme::ALL[(self.index() + 1) % Theme::ALL.len()]
    }

    /// Color of particle `index` out of `total` at normalized position (`nx`, `ny`).
    ///
    /// `intensity` becomes the alpha channel, rounded to two decimals.
    pub fn color(self, index: usize, total: usize, nx: f32, ny: f32, intensity: f32) -> ParticleColor {
        let alpha = round_alpha(intensity);

        let (hue, saturation, lightness) = match self {
            Theme::Rainbow => {
                let share = if total > 0 { index as f32 / total as f32 } else { 0.0 };
                ((nx * 360.0 + share * 100.0) % 360.0, 80.0, 60.0)
            }
            Theme::Fire => (40.0 * ny, 100.0, 60.0),
            Theme::Ocean => (180.0 + 60.0 * ny, 90.0, 60.0),
            Theme::Galaxy => (260.0 + 60.0 * (nx * PI).sin(), 80.0, 70.0),
            Theme::Matrix => (120.0, 100.0, 50.0),
            Theme::Portal if nx < 0.5 => (120.0, 100.0, 50.0),
            Theme::Portal => (270.0 + 40.0 * (nx * PI * 4.0).sin(), 90.0, 60.0),
        };

        ParticleColor::Hsla { hue, saturation, lightness, alpha }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color lookup by theme name. Unknown names fall back to opaque white.
pub fn color_for_theme_name(name: &str, index: usize, total: usize, nx: f32, ny: f32, intensity: f32) -> ParticleColor {
    match Theme::from_name(name) {
        Some(theme) => theme.color(index, total, nx, ny, intensity),
        None => ParticleColor::WHITE,
    }
}

fn round_alpha(intensity: f32) -> f32 {
    (intensity * 100.0).round() / 100.0
}

/// A fill color as produced by the color model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleColor {
    /// Hue in degrees, saturation and lightness in percent, alpha in 0..=1.
    Hsla { hue: f32, saturation: f32, lightness: f32, alpha: f32 },
    /// Channels in 0..=255, alpha in 0..=1.
    Rgba { red: u8, green: u8, blue: u8, alpha: f32 },
}

impl ParticleColor {
    pub const WHITE: ParticleColor = ParticleColor::Rgba { red: 255, green: 255, blue: 255, alpha: 1.0 };

    pub fn alpha(&self) -> f32 {
        match *self {
            ParticleColor::Hsla { alpha, .. } | ParticleColor::Rgba { alpha, .. } => alpha,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> ParticleColor {
        match self {
            ParticleColor::Hsla { hue, saturation, lightness, .. } => {
                ParticleColor::Hsla { hue, saturation, lightness, alpha }
            }
            ParticleColor::Rgba { red, green, blue, .. } => ParticleColor::Rgba { red, green, blue, alpha },
        }
    }
}

impl fmt::Display for ParticleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParticleColor::Hsla { hue, saturation, lightness, alpha } => {
                write!(f, "hsla({}, {}%, {}%, {:.2})", hue, saturation, lightness, alpha)
            }
            ParticleColor::Rgba { red, green, blue, alpha } => {
                write!(f, "rgba({}, {}, {}, {:.2})", red, green, blue, alpha)
            }
        }
    }
}

/// Holds the current theme. `cycle` is the only way to change it.
#[derive(Debug, Clone, Default)]
pub struct ThemeSelector {
    current_index: usize,
}

impl ThemeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Theme {
        Theme::ALL[self.current_index]
    }

    pub fn cycle(&mut self) -> Theme {
        self.current_index = (self.current_index + 1) % Theme::ALL.len();
        log::info!("Theme changed to {}", self.current());
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(color: ParticleColor) -> (f32, f32, f32, f32) {
        match color {
            ParticleColor::Hsla { hue, saturation, lightness, alpha } => (hue, saturation, lightness, alpha),
            other => panic!("expected an HSLA color, got {:?}", other),
        }
    }

    #[test]
    fn test_cycle_returns_to_start() {
        let mut selector = ThemeSelector::new();
        let start = selector.current();
        for _ in 0..5 {
            let theme = selector.cycle();
            assert!(Theme::ALL.contains(&theme));
            assert_ne!(theme, start);
        }
        assert_eq!(selector.cycle(), start);
    }

    #[test]
    fn test_cycle_order() {
        let mut selector = ThemeSelector::new();
        assert_eq!(selector.current(), Theme::Rainbow);
        assert_eq!(selector.cycle(), Theme::Fire);
        assert_eq!(selector.cycle(), Theme::Ocean);
        assert_eq!(selector.cycle(), Theme::Galaxy);
        assert_eq!(selector.cycle(), Theme::Matrix);
        assert_eq!(selector.cycle(), Theme::Portal);
        assert_eq!(selector.cycle(), Theme::Rainbow);
        assert_eq!(Theme::Portal.next(), Theme::Rainbow);
    }

    #[test]
    fn test_matrix_is_constant_green() {
        for &(index, nx, ny) in &[(0, 0.0, 0.0), (42, 0.3, 0.9), (9999, 0.99, 0.5)] {
            let (hue, sat, light, alpha) = hsl(Theme::Matrix.color(index, 10000, nx, ny, 1.0));
            assert_eq!((hue, sat, light, alpha), (120.0, 100.0, 50.0, 1.0));
        }
        assert_eq!(
            Theme::Matrix.color(7, 100, 0.2, 0.2, 1.0).to_string(),
            "hsla(120, 100%, 50%, 1.00)"
        );
    }

    #[test]
    fn test_theme_formulas() {
        let (hue, sat, light, _) = hsl(Theme::Rainbow.color(50, 100, 0.5, 0.0, 1.0));
        assert!((hue - 230.0).abs() < 1e-3);
        assert_eq!((sat, light), (80.0, 60.0));

        // Wraps past 360
        let (hue, _, _, _) = hsl(Theme::Rainbow.color(99, 100, 0.9, 0.0, 1.0));
        assert!((hue - ((0.9 * 360.0 + 99.0) % 360.0)).abs() < 1e-3);

        let (hue, sat, light, _) = hsl(Theme::Fire.color(0, 1, 0.0, 0.5, 1.0));
        assert_eq!((hue, sat, light), (20.0, 100.0, 60.0));

        let (hue, sat, light, _) = hsl(Theme::Ocean.color(0, 1, 0.0, 1.0, 1.0));
        assert_eq!((hue, sat, light), (240.0, 90.0, 60.0));

        let (hue, sat, light, _) = hsl(Theme::Galaxy.color(0, 1, 0.5, 0.0, 1.0));
        assert!((hue - 320.0).abs() < 1e-3);
        assert_eq!((sat, light), (80.0, 70.0));
    }

    #[test]
    fn test_portal_splits_at_half() {
        let (hue, sat, light, _) = hsl(Theme::Portal.color(0, 1, 0.25, 0.5, 1.0));
        assert_eq!((hue, sat, light), (120.0, 100.0, 50.0));

        let (hue, sat, light, _) = hsl(Theme::Portal.color(0, 1, 0.5, 0.5, 1.0));
        let expected = 270.0 + 40.0 * (0.5 * PI * 4.0).sin();
        assert!((hue - expected).abs() < 1e-3);
        assert_eq!((sat, light), (90.0, 60.0));
    }

    #[test]
    fn test_alpha_is_rounded() {
        let color = Theme::Fire.color(0, 1, 0.0, 0.0, 0.456);
        assert!((color.alpha() - 0.46).abs() < 1e-6);
        assert!(color.to_string().ends_with(", 0.46)"));
    }

    #[test]
    fn test_unknown_theme_name_is_white() {
        let color = color_for_theme_name("Sepia", 1, 10, 0.5, 0.5, 1.0);
        assert_eq!(color, ParticleColor::WHITE);
        assert_eq!(color.to_string(), "rgba(255, 255, 255, 1.00)");

        let color = color_for_theme_name("Matrix", 1, 10, 0.5, 0.5, 1.0);
        assert_eq!(color, Theme::Matrix.color(1, 10, 0.5, 0.5, 1.0));
    }
}
