/*
 * Perception Module
 *
 * The seam between the simulation and whatever produces targets. A source
 * hands over a fresh list of target points and any gestures it detected
 * once per frame; the host passes the targets straight into the particle
 * system and maps gestures to actions.
 *
 * PointerTargets is the built-in source: it scatters a cluster of targets
 * around the mouse cursor and treats a right click as a fist.
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::particle::Target;

/// Discrete gestures reported by a target source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Closed hand. Cycles the theme.
    Fist,
}

/// Everything a source saw in one frame.
#[derive(Debug, Clone, Default)]
pub struct Perception {
    pub targets: Vec<Target>,
    pub gestures: Vec<Gesture>,
}

pub trait TargetSource {
    fn poll(&mut self) -> Perception;

    /// Canvas size changed; sources that map into canvas space follow it.
    fn resize(&mut self, _width: f32, _height: f32) {}
}

// Frames to ignore further fists after one fires
pub const GESTURE_COOLDOWN_FRAMES: u32 = 30;

pub struct PointerTargets {
    cursor: Option<Vec2>,
    canvas: Option<Vec2>,
    spread: f32,
    cluster_size: usize,
    fist_pending: bool,
    cooldown: u32,
    rng: StdRng,
}

impl PointerTargets {
    pub fn new(cluster_size: usize, spread: f32) -> Self {
        Self {
            cursor: None,
            canvas: None,
            spread,
            cluster_size,
            fist_pending: false,
            cooldown: 0,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Cursor position in canvas space, or None when it left the window.
    pub fn set_cursor(&mut self, cursor: Option<Vec2>) {
        self.cursor = cursor.map(|pos| self.clamp_to_canvas(pos));
    }

    fn clamp_to_canvas(&self, pos: Vec2) -> Vec2 {
        match self.canvas {
            Some(size) => vec2(pos.x.clamp(0.0, size.x), pos.y.clamp(0.0, size.y)),
            None => pos,
        }
    }

    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn fist(&mut self) {
        self.fist_pending = true;
    }
}

impl Default for PointerTargets {
    fn default() -> Self {
        Self::new(crate::POINTER_CLUSTER_SIZE, crate::POINTER_SPREAD)
    }
}

impl TargetSource for PointerTargets {
    fn poll(&mut self) -> Perception {
        let mut perception = Perception::default();

        if let Some(center) = self.cursor {
            perception.targets = (0..self.cluster_size)
                .map(|_| {
                    let angle = self.rng.gen_range(0.0..TAU);
                    let r = self.rng.gen::<f32>() * self.spread;
                    Target::new(center.x + angle.cos() * r, center.y + angle.sin() * r, 0.0)
                })
                .collect();
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
            self.fist_pending = false;
        } else if self.fist_pending {
            self.fist_pending = false;
            self.cooldown = GESTURE_COOLDOWN_FRAMES;
            perception.gestures.push(Gesture::Fist);
        }

        perception
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.canvas = Some(vec2(width, height));
        self.cursor = self.cursor.map(|pos| self.clamp_to_canvas(pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cursor_no_targets() {
        let mut source = PointerTargets::new(16, 10.0).with_seed(1);
        let perception = source.poll();
        assert!(perception.targets.is_empty());
        assert!(perception.gestures.is_empty());
    }

    #[test]
    fn test_cluster_around_cursor() {
        let mut source = PointerTargets::new(32, 10.0).with_seed(2);
        source.set_cursor(Some(vec2(100.0, 200.0)));
        let perception = source.poll();
        assert_eq!(perception.targets.len(), 32);
        for target in &perception.targets {
            let d = vec2(target.x, target.y).distance(vec2(100.0, 200.0));
            assert!(d <= 10.0 + 1e-3);
            assert_eq!(target.z, 0.0);
        }
    }

    #[test]
    fn test_cursor_follows_canvas_resize() {
        let mut source = PointerTargets::new(8, 0.0).with_seed(4);
        source.set_cursor(Some(vec2(300.0, 250.0)));
        source.resize(200.0, 100.0);
        assert_eq!(source.cursor(), Some(vec2(200.0, 100.0)));

        // Zero spread puts every target on the cursor, which is now on the canvas edge
        for target in source.poll().targets {
            assert_eq!((target.x, target.y), (200.0, 100.0));
        }

        source.set_cursor(Some(vec2(-5.0, 40.0)));
        assert_eq!(source.cursor(), Some(vec2(0.0, 40.0)));
    }

    #[test]
    fn test_fist_is_debounced() {
        let mut source = PointerTargets::new(1, 1.0).with_seed(3);
        source.fist();
        assert_eq!(source.poll().gestures, vec![Gesture::Fist]);

        // Swallowed during the cooldown
        source.fist();
        for _ in 0..GESTURE_COOLDOWN_FRAMES {
            assert!(source.poll().gestures.is_empty());
        }

        source.fist();
        assert_eq!(source.poll().gestures, vec![Gesture::Fist]);
    }
}
