/*
 * Flock Module
 *
 * The Flock owns every boid and runs the per-frame update:
 * sort by depth, wrap edges, snapshot, then flock + integrate + wrap + emit
 * for each boid in draw order.
 *
 * Neighbor rules read the snapshot, so the outcome does not depend on the
 * order boids are visited in. The neighbor scan is brute force, O(n^2).
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boid::{Boid, Bounds};
use crate::params::{BoidTuning, FlockWeights};
use crate::sink::RenderSink;

pub struct Flock {
    boids: Vec<Boid>,
    // Reused every frame
    snapshot: Vec<Boid>,
    tuning: BoidTuning,
    seed: Option<u64>,
    rng: StdRng,
    next_id: u64,
}

impl Flock {
    pub fn new(tuning: BoidTuning, seed: Option<u64>) -> Self {
        Self {
            boids: Vec::new(),
            snapshot: Vec::new(),
            tuning,
            seed,
            rng: make_rng(seed),
            next_id: 0,
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    // Append a boid at `position` with a random velocity and depth
    pub fn add_boid(&mut self, position: Vec2) -> &Boid {
        let boid = Boid::spawn(self.next_id, position, self.tuning, &mut self.rng);
        self.next_id += 1;
        self.boids.push(boid);
        &self.boids[self.boids.len() - 1]
    }

    // Append a fully specified boid, keeping ids unique
    pub fn insert(&mut self, mut boid: Boid) {
        boid.id = self.next_id;
        self.next_id += 1;
        self.boids.push(boid);
    }

    // Drop every boid and start over with a single one at `center`.
    // With a fixed seed the random source restarts too, so resets repeat exactly.
    pub fn reset(&mut self, center: Vec2) {
        self.boids.clear();
        self.snapshot.clear();
        self.next_id = 0;
        self.rng = make_rng(self.seed);
        self.add_boid(center);
    }

    // Back to front
    pub fn sort_by_depth(&mut self) {
        self.boids.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    }

    // Advance every boid by one frame and emit its sprite
    pub fn update<S: RenderSink>(
        &mut self,
        weights: &FlockWeights,
        attraction: Option<Vec2>,
        bounds: Bounds,
        sink: &mut S,
    ) {
        self.sort_by_depth();

        for boid in &mut self.boids {
            boid.edges(bounds);
        }

        self.snapshot.clear();
        self.snapshot.extend_from_slice(&self.boids);

        for boid in &mut self.boids {
            boid.flock(&self.snapshot, weights, attraction);
            boid.update();
            boid.edges(bounds);
            sink.boid(boid.sprite());
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
