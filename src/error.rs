/*
 * Error Module
 *
 * Errors raised at the boundary of the particle store. The numeric core has
 * no recoverable failures of its own; everything here is a rejected input,
 * caught before any particle state is touched so that a NaN can never leak
 * into a position or velocity.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid viewport {width}x{height}: dimensions must be finite and positive")]
    InvalidViewport { width: f32, height: f32 },

    #[error("target {index} has a non-finite coordinate ({x}, {y}, {z})")]
    NonFiniteTarget { index: usize, x: f32, y: f32, z: f32 },

    #[error("invalid simulation parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SimulationError>;

// Shared viewport check for construction and resize
pub(crate) fn check_viewport(width: f32, height: f32) -> Result<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidViewport { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_check() {
        assert!(check_viewport(800.0, 600.0).is_ok());
        assert!(check_viewport(0.0, 600.0).is_err());
        assert!(check_viewport(800.0, -1.0).is_err());
        assert!(check_viewport(f32::NAN, 600.0).is_err());
        assert!(check_viewport(800.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SimulationError::NonFiniteTarget { index: 3, x: f32::NAN, y: 1.0, z: 0.0 };
        assert!(err.to_string().starts_with("target 3 has a non-finite coordinate"));

        let err = SimulationError::InvalidViewport { width: 0.0, height: 10.0 };
        assert_eq!(err.to_string(), "invalid viewport 0x10: dimensions must be finite and positive");
    }
}
