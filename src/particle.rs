/*
 * Particle Module
 *
 * This module defines the Particle struct, the Target points that drive it
 * and the force Mode. A particle is a point with a position and a velocity
 * in canvas pixel space (origin top-left, y pointing down) and a pseudo-depth
 * on z. Each frame it is pushed towards or away from its target, integrated
 * with a unit timestep and damped by friction.
 */

use nannou::prelude::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    // Reserved: assigned at spawn, not read by the force model or renderer yet
    pub life: f32,
    // Reserved: the force model pairs particles with targets per frame instead
    pub target_index: Option<usize>,
}

impl Particle {
    pub fn new(x: f32, y: f32, life: f32) -> Self {
        Self {
            position: vec3(x, y, 0.0),
            velocity: Vec3::ZERO,
            life,
            target_index: None,
        }
    }

    // Pull towards the target on all three axes
    pub fn attract(&mut self, target: &Target, strength: f32) {
        self.velocity += (target.position() - self.position) * strength;
    }

    // Push away from the target in the xy plane, falling off with squared distance
    pub fn repel(&mut self, target: &Target, strength: f32, epsilon: f32) {
        let d = self.position.truncate() - target.position().truncate();
        let dist_sq = d.length_squared() + epsilon;
        let push = d / dist_sq * strength;
        self.velocity.x += push.x;
        self.velocity.y += push.y;
    }

    // Explicit Euler step followed by damping
    pub fn integrate(&mut self, friction: f32) {
        self.position += self.velocity;
        self.velocity *= friction;
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// A point the particles are drawn to or pushed from, in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Target {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Target {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn position(&self) -> Vec3 {
        vec3(self.x, self.y, self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Vec3> for Target {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Direction of the target force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Attract,
    Repel,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Attract => Mode::Repel,
            Mode::Repel => Mode::Attract,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Attract => f.write_str("attract"),
            Mode::Repel => f.write_str("repel"),
        }
    }
}
