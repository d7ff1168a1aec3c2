/*
 * Simulation Parameters Module
 *
 * This module defines the parameter records for the simulation: the flocking
 * rule weights adjusted through the sliders, the per-boid tunables, and the
 * SimulationParams struct holding everything the UI can change. It also keeps
 * a snapshot of the last frame's values so weight edits can be detected.
 */

use std::ops::RangeInclusive;

/// Weights applied to the three flocking rules when they are combined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockWeights {
    pub separation: f32,
    pub alignment: f32,
    pub cohesion: f32,
}

impl Default for FlockWeights {
    fn default() -> Self {
        Self {
            separation: 1.5,
            alignment: 1.0,
            cohesion: 1.0,
        }
    }
}

/// Per-boid kinematic limits. Every boid carries its own copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidTuning {
    pub max_speed: f32,
    pub max_force: f32,
    pub perception_radius: f32,
}

impl Default for BoidTuning {
    fn default() -> Self {
        Self {
            max_speed: 4.0,
            max_force: 0.1,
            perception_radius: 100.0,
        }
    }
}

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub weights: FlockWeights,
    pub tuning: BoidTuning,
    pub show_controls: bool,
    pub pause_simulation: bool,
    pub seed: Option<u64>,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    weights: FlockWeights,
    pause_simulation: bool,
}

/// What changed between the last snapshot and now.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParamChanges {
    pub weights_changed: bool,
    pub pause_toggled: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            weights: FlockWeights::default(),
            tuning: BoidTuning::default(),
            // The controls panel starts hidden
            show_controls: false,
            pause_simulation: false,
            seed: None,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            weights: self.weights,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot
    pub fn detect_changes(&self) -> ParamChanges {
        // If we don't have previous values, nothing has changed
        match &self.previous_values {
            Some(prev) => ParamChanges {
                weights_changed: self.weights != prev.weights,
                pause_toggled: self.pause_simulation != prev.pause_simulation,
            },
            None => ParamChanges::default(),
        }
    }

    pub fn get_weight_range() -> RangeInclusive<f32> {
        0.0..=3.0
    }
}

/// Read the flock seed from `DEPTHFLOCK_SEED`, if set and valid.
pub fn seed_from_env() -> Option<u64> {
    let raw = std::env::var("DEPTHFLOCK_SEED").ok()?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("Ignoring DEPTHFLOCK_SEED={raw:?}: {e}");
            None
        }
    }
}
