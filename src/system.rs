/*
 * Particle System Module
 *
 * This module owns the particle store and advances it one frame at a time.
 * Each update:
 * 1. Pairs particle i with target i % K (no target when the list is empty)
 * 2. Applies the mode force (attract, repel or ambient jitter)
 * 3. Applies the Portal overlay when that theme is active
 * 4. Integrates position with a unit timestep
 * 5. Damps velocity by friction
 *
 * Inputs are checked before anything is mutated, so a rejected frame leaves
 * the store untouched.
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{check_viewport, Result, SimulationError};
use crate::params::SimulationParams;
use crate::particle::{Mode, Particle, Target};
use crate::theme::Theme;

pub struct ParticleSystem {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    params: SimulationParams,
    rng: StdRng,
}

/// The target particle `index` is paired with this frame, if any.
pub fn target_for(index: usize, targets: &[Target]) -> Option<&Target> {
    if targets.is_empty() {
        None
    } else {
        targets.get(index % targets.len())
    }
}

impl ParticleSystem {
    /// Creates `count` particles scattered uniformly over a `width` x `height` canvas.
    pub fn new(count: usize, width: f32, height: f32) -> Result<Self> {
        Self::with_params(SimulationParams::default().with_particles(count), width, height)
    }

    /// Like [`ParticleSystem::new`] but with a fixed random seed.
    pub fn with_seed(count: usize, width: f32, height: f32, seed: u64) -> Result<Self> {
        let params = SimulationParams::default().with_particles(count).with_seed(seed);
        Self::with_params(params, width, height)
    }

    pub fn with_params(params: SimulationParams, width: f32, height: f32) -> Result<Self> {
        check_viewport(width, height)?;
        params.validate()?;

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let particles = (0..params.num_particles)
            .map(|_| {
                let x = rng.gen_range(0.0..width);
                let y = rng.gen_range(0.0..height);
                Particle::new(x, y, rng.gen::<f32>())
            })
            .collect();

        log::info!(
            "Spawned {} particles on a {}x{} canvas (seed: {:?})",
            params.num_particles,
            width,
            height,
            params.seed
        );

        Ok(Self { particles, width, height, params, rng })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Updates the viewport used for spawning and wrapping. Particles stay where they are.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        check_viewport(width, height)?;
        log::info!("Viewport resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Advances the simulation by one frame.
    pub fn update(&mut self, targets: &[Target], mode: Mode, theme: Theme) -> Result<()> {
        if let Some((index, target)) = targets.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            log::warn!("Rejecting frame: target {} is not finite", index);
            return Err(SimulationError::NonFiniteTarget {
                index,
                x: target.x,
                y: target.y,
                z: target.z,
            });
        }

        let half_width = self.width / 2.0;
        let params = &self.params;

        for (i, particle) in self.particles.iter_mut().enumerate() {
            match (mode, target_for(i, targets)) {
                (Mode::Attract, Some(target)) => particle.attract(target, params.attract_strength),
                (Mode::Repel, Some(target)) => {
                    particle.repel(target, params.repel_strength, params.repel_epsilon)
                }
                (Mode::Repel, None) => {
                    particle.velocity.x += (self.rng.gen::<f32>() - 0.5) * params.jitter;
                    particle.velocity.y += (self.rng.gen::<f32>() - 0.5) * params.jitter;
                }
                (Mode::Attract, None) => {}
            }

            if theme == Theme::Portal {
                if particle.position.x < half_width {
                    // Left half falls and respawns at the top
                    particle.velocity.y += params.portal_gravity;
                    if particle.position.y > self.height {
                        particle.position.y = 0.0;
                        particle.position.x = self.rng.gen_range(0.0..half_width);
                    }
                } else {
                    // Right half sways and rises, respawning at the bottom
                    let phase = i as f32 + particle.position.y * 0.01;
                    particle.velocity.x += phase.sin() * params.portal_sway;
                    particle.velocity.y -= params.portal_rise;
                    if particle.position.y < 0.0 {
                        particle.position.y = self.height;
                        particle.position.x = self.rng.gen_range(half_width..self.width);
                    }
                }
            }

            particle.integrate(params.friction);
        }

        log::debug!(
            "Updated {} particles against {} targets ({}, {})",
            self.particles.len(),
            targets.len(),
            mode,
            theme
        );
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
