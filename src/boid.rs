/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid follows three main rules plus an optional attraction:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * 4. Attraction: Steer towards a point held by the user
 *
 * Positions live in canvas space: origin at the top-left, y grows downward.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::{BoidTuning, FlockWeights};
use crate::sink::BoidSprite;
use crate::vector::{distance, limit, set_mag};

// Attraction is capped at this multiple of max_force
const ATTRACTION_FORCE_FACTOR: f32 = 2.0;
// and weighted by this factor against the flocking rules.
const ATTRACTION_WEIGHT: f32 = 3.0;

pub const BOID_BASE_SIZE: f32 = 8.0;
pub const MIN_DEPTH: f32 = 0.4;
pub const MAX_DEPTH: f32 = 1.0;

/// Canvas extent used for edge wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub depth: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub perception_radius: f32,
}

impl Boid {
    pub fn new(id: u64, position: Vec2, velocity: Vec2, depth: f32, tuning: BoidTuning) -> Self {
        Self {
            id,
            position,
            velocity,
            acceleration: Vec2::ZERO,
            depth,
            max_speed: tuning.max_speed,
            max_force: tuning.max_force,
            perception_radius: tuning.perception_radius,
        }
    }

    // New boid at `position` with a random velocity and depth
    pub fn spawn<R: Rng>(id: u64, position: Vec2, tuning: BoidTuning, rng: &mut R) -> Self {
        let velocity = vec2(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let depth = rng.gen_range(MIN_DEPTH..=MAX_DEPTH);
        Self::new(id, position, velocity, depth, tuning)
    }

    // Wrap the boid around the canvas edges
    pub fn edges(&mut self, bounds: Bounds) {
        self.position.x = wrap_axis(self.position.x, bounds.width);
        self.position.y = wrap_axis(self.position.y, bounds.height);
    }

    // Reynolds: Steering = Desired - Velocity, capped at `max_force`
    fn steer(&self, desired: Vec2, max_force: f32) -> Vec2 {
        limit(set_mag(desired, self.max_speed) - self.velocity, max_force)
    }

    // Other boids strictly within `radius`, with their distance
    fn neighbors<'a>(&'a self, boids: &'a [Boid], radius: f32) -> impl Iterator<Item = (&'a Boid, f32)> + 'a {
        boids
            .iter()
            .filter(move |other| other.id != self.id)
            .map(move |other| (other, distance(self.position, other.position)))
            .filter(move |&(_, d)| d < radius)
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    pub fn alignment(&self, boids: &[Boid]) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for (other, _) in self.neighbors(boids, self.perception_radius) {
            sum += other.velocity;
            count += 1;
        }

        if count == 0 {
            return Vec2::ZERO;
        }
        self.steer(sum / count as f32, self.max_force)
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    pub fn cohesion(&self, boids: &[Boid]) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for (other, _) in self.neighbors(boids, self.perception_radius) {
            sum += other.position;
            count += 1;
        }

        if count == 0 {
            return Vec2::ZERO;
        }
        let center = sum / count as f32;
        self.steer(center - self.position, self.max_force)
    }

    // Calculate separation force (avoid crowding neighbors)
    pub fn separation(&self, boids: &[Boid]) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for (other, d) in self.neighbors(boids, self.perception_radius / 2.0) {
            // Unit vector away from the neighbor
            if d > 0.0 {
                sum += (self.position - other.position) / d;
            }
            count += 1;
        }

        if count == 0 {
            return Vec2::ZERO;
        }
        self.steer(sum / count as f32, self.max_force)
    }

    // Steer towards the attraction point, if there is one
    pub fn attract(&self, point: Option<Vec2>) -> Vec2 {
        match point {
            Some(target) => self.steer(target - self.position, self.max_force * ATTRACTION_FORCE_FACTOR),
            None => Vec2::ZERO,
        }
    }

    // Combine all steering behaviors into this frame's acceleration
    pub fn flock(&mut self, boids: &[Boid], weights: &FlockWeights, attraction: Option<Vec2>) {
        self.acceleration = self.alignment(boids) * weights.alignment
            + self.cohesion(boids) * weights.cohesion
            + self.separation(boids) * weights.separation
            + self.attract(attraction) * ATTRACTION_WEIGHT;
    }

    // Integrate acceleration into velocity, then velocity into position
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.velocity = limit(self.velocity, self.max_speed);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    // Draw parameters for this boid; nearer boids are larger and brighter
    pub fn sprite(&self) -> BoidSprite {
        BoidSprite {
            position: self.position,
            heading: self.velocity.y.atan2(self.velocity.x),
            size: BOID_BASE_SIZE * self.depth,
            brightness: (180.0 + self.depth * 75.0).floor().clamp(0.0, 255.0) as u8,
            opacity: 0.5 + self.depth * 0.5,
        }
    }
}

// Toroidal wrap of one coordinate into [0, extent)
fn wrap_axis(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    if value >= extent {
        0.0
    } else if value < 0.0 {
        let wrapped = value.rem_euclid(extent);
        // rem_euclid rounds up to `extent` for tiny negative values
        if wrapped < extent {
            wrapped
        } else {
            f32::from_bits(extent.to_bits() - 1)
        }
    } else {
        value
    }
}
