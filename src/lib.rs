/*
 * Particle Mirror - Module Definitions
 *
 * This file defines the module structure for the particle simulation.
 * The core is the particle store (system) and the renderer with its color
 * model (theme); the rest is the nannou host around them.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use error::SimulationError;
pub use params::SimulationParams;
pub use particle::{Mode, Particle, Target};
pub use perception::{Gesture, Perception, PointerTargets, TargetSource};
pub use renderer::{draw_particles, DrawSurface, FrameRecorder};
pub use system::ParticleSystem;
pub use theme::{ParticleColor, Theme, ThemeSelector};

// Define modules
pub mod app;
pub mod debug;
pub mod error;
pub mod input;
pub mod params;
pub mod particle;
pub mod perception;
pub mod renderer;
pub mod system;
pub mod theme;
pub mod ui;

// Constants
pub const DEFAULT_PARTICLE_COUNT: usize = 10000;
pub const POINTER_CLUSTER_SIZE: usize = 400;
pub const POINTER_SPREAD: f32 = 30.0;
