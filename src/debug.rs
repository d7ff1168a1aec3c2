/*
 * Debug Information Module
 *
 * Per-frame metrics shown in the controls panel.
 */

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub boid_count: usize,
    pub frames_simulated: u64,
}

impl DebugInfo {
    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}
