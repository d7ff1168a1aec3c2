/*
 * Simulation Module
 *
 * The Simulation is the explicit context the app owns: the flock, the current
 * weights and attraction point, and a queue of pending requests from input
 * and UI. Requests are only applied at the start of `step`, so nothing can
 * change the population while a frame update is running.
 */

use std::collections::VecDeque;

use nannou::prelude::*;

use crate::boid::Bounds;
use crate::flock::Flock;
use crate::params::{BoidTuning, FlockWeights};
use crate::sink::RenderSink;

/// A request from outside the core, applied before the next frame update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    AddBoid(Vec2),
    SetAttraction(Vec2),
    ClearAttraction,
    SetWeights(FlockWeights),
    Reset,
}

pub struct Simulation {
    flock: Flock,
    weights: FlockWeights,
    attraction: Option<Vec2>,
    pending: VecDeque<SimCommand>,
    frame: u64,
}

impl Simulation {
    // A simulation with a single boid at the center of `bounds`
    pub fn new(weights: FlockWeights, tuning: BoidTuning, seed: Option<u64>, bounds: Bounds) -> Self {
        let mut flock = Flock::new(tuning, seed);
        flock.reset(bounds.center());
        Self {
            flock,
            weights,
            attraction: None,
            pending: VecDeque::new(),
            frame: 0,
        }
    }

    pub fn submit(&mut self, command: SimCommand) {
        self.pending.push_back(command);
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn weights(&self) -> FlockWeights {
        self.weights
    }

    pub fn attraction(&self) -> Option<Vec2> {
        self.attraction
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    #[cfg(test)]
    fn pending_count(&self) -> usize {
        self.pending.len()
    }

    // Apply every queued request in submission order
    pub fn apply_pending(&mut self, bounds: Bounds) {
        while let Some(command) = self.pending.pop_front() {
            self.apply(command, bounds);
        }
    }

    fn apply(&mut self, command: SimCommand, bounds: Bounds) {
        match command {
            SimCommand::AddBoid(position) => {
                let boid = self.flock.add_boid(position);
                log::debug!(
                    "Added boid {} at ({:.1}, {:.1}), depth {:.2}",
                    boid.id,
                    position.x,
                    position.y,
                    boid.depth
                );
                log::debug!("Population: {}", self.flock.len());
            }
            SimCommand::SetAttraction(point) => {
                if self.attraction.is_none() {
                    log::debug!("Attraction point set at ({:.1}, {:.1})", point.x, point.y);
                }
                self.attraction = Some(point);
            }
            SimCommand::ClearAttraction => {
                if self.attraction.take().is_some() {
                    log::debug!("Attraction point cleared");
                }
            }
            SimCommand::SetWeights(weights) => {
                self.weights = weights;
            }
            SimCommand::Reset => {
                self.flock.reset(bounds.center());
                log::info!("Flock reset to a single boid");
            }
        }
    }

    // Run one frame: apply requests, update the flock, emit draw commands
    pub fn step<S: RenderSink>(&mut self, bounds: Bounds, sink: &mut S) {
        self.apply_pending(bounds);
        self.flock.update(&self.weights, self.attraction, bounds, sink);
        if let Some(point) = self.attraction {
            sink.attraction_ring(point);
        }
        self.frame += 1;
    }
}
