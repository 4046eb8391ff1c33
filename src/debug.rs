/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * to be displayed in the UI and the on-screen overlay.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Number of visible (non-culled) particles
 * - Number of targets fed into the last update
 */

use std::cell::Cell;
use std::time::Duration;

// Debug information to display
#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    // Written from the view, which only sees the model by reference
    pub visible_particles: Cell<usize>,
    pub target_count: usize,
}

impl DebugInfo {
    // Share of the population that made it past culling, in percent
    pub fn visible_ratio(&self, total: usize) -> f32 {
        if total == 0 {
            return 0.0;
        }
        self.visible_particles.get() as f32 / total as f32 * 100.0
    }

    pub fn lines(&self, total: usize) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Total Particles: {}", total),
            format!(
                "Visible Particles: {} ({:.0}%)",
                self.visible_particles.get(),
                self.visible_ratio(total)
            ),
            format!("Targets: {}", self.target_count),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_ratio() {
        let info = DebugInfo::default();
        assert_eq!(info.visible_ratio(0), 0.0);
        info.visible_particles.set(250);
        assert_eq!(info.visible_ratio(1000), 25.0);
    }

    #[test]
    fn test_lines() {
        let info = DebugInfo { target_count: 3, ..Default::default() };
        info.visible_particles.set(10);
        let lines = info.lines(20);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "Visible Particles: 10 (50%)");
        assert_eq!(lines[4], "Targets: 3");
    }
}
