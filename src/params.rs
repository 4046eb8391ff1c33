/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that holds every tunable
 * constant of the particle simulation: population size, force strengths,
 * the Portal overlay constants and the draw size. Some of them can be
 * modified through the UI. It also provides change detection so the host
 * knows when the particle store has to be rebuilt.
 */

use crate::error::{Result, SimulationError};

// Parameters for the simulation, some of which can be adjusted via UI
#[derive(Debug, Clone)]
pub struct SimulationParams {
    pub num_particles: usize,
    // Force model
    pub friction: f32,
    pub attract_strength: f32,
    pub repel_strength: f32,
    pub repel_epsilon: f32,
    pub jitter: f32,
    // Portal overlay
    pub portal_gravity: f32,
    pub portal_rise: f32,
    pub portal_sway: f32,
    // Rendering
    pub base_size: f32,
    pub trail_fade: f32,
    // Fixed seed for reproducible runs, entropy when None
    pub seed: Option<u64>,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone)]
struct ParamSnapshot {
    num_particles: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_particles: crate::DEFAULT_PARTICLE_COUNT,
            friction: 0.90,
            attract_strength: 0.05,
            repel_strength: 2.0,
            repel_epsilon: 0.1,
            jitter: 0.5,
            portal_gravity: 0.5,
            portal_rise: 0.1,
            portal_sway: 0.05,
            base_size: 1.5,
            trail_fade: 0.2,
            seed: None,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_particles(mut self, num_particles: usize) -> Self {
        self.num_particles = num_particles;
        self
    }

    // Reject constants that would corrupt particle state
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("friction", self.friction),
            ("attract_strength", self.attract_strength),
            ("repel_strength", self.repel_strength),
            ("repel_epsilon", self.repel_epsilon),
            ("jitter", self.jitter),
            ("portal_gravity", self.portal_gravity),
            ("portal_rise", self.portal_rise),
            ("portal_sway", self.portal_sway),
            ("base_size", self.base_size),
            ("trail_fade", self.trail_fade),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimulationError::InvalidParameter {
                    name,
                    reason: format!("{} is not finite", value),
                });
            }
        }

        if !(0.0..=1.0).contains(&self.friction) {
            return Err(SimulationError::InvalidParameter {
                name: "friction",
                reason: format!("{} is outside 0..=1", self.friction),
            });
        }
        if self.repel_epsilon <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "repel_epsilon",
                reason: "must be positive".to_string(),
            });
        }
        if self.jitter < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "jitter",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot { num_particles: self.num_particles });
    }

    // Whether the population size moved since the last snapshot,
    // which means the particle store has to be rebuilt
    pub fn detect_changes(&self) -> bool {
        match &self.previous_values {
            Some(prev) => self.num_particles != prev.num_particles,
            None => false,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_particles_range() -> std::ops::RangeInclusive<usize> {
        100..=50000
    }
}
