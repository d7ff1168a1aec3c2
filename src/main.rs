/*
 * Depth Flock
 *
 * An interactive flocking simulation. Boids follow separation, alignment and
 * cohesion, and are drawn with a depth illusion: nearer boids are larger,
 * brighter and drawn last.
 *
 * Tap or click to add a boid. Hold for 300 ms to turn the pointer into an
 * attraction point; release to let the flock go. The controls panel adjusts
 * the rule weights and resets the flock.
 *
 * Set RUST_LOG=debug for per-event logging, DEPTHFLOCK_SEED=<u64> for a
 * repeatable flock.
 */

use depthflock::app::{model, update};

fn main() {
    env_logger::init();
    log::info!("Depth Flock starting up");

    nannou::app(model)
        .update(update)
        .run();
}
