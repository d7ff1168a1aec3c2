/*
 * Depth Flock - Module Definitions
 *
 * The simulation core (vector, boid, flock, simulation, sink, params) has no
 * window dependency beyond nannou's math types. The app, input, ui and
 * renderer modules are the nannou front end driving it.
 */

// Re-export key components for easier access
pub use boid::{Boid, Bounds};
pub use flock::Flock;
pub use params::{BoidTuning, FlockWeights, SimulationParams};
pub use simulation::{SimCommand, Simulation};
pub use sink::{BoidSprite, FrameRecording, RenderSink};
pub use app::Model;

// Define modules
pub mod vector;
pub mod boid;
pub mod flock;
pub mod params;
pub mod simulation;
pub mod sink;
pub mod debug;
pub mod app;
pub mod ui;
pub mod input;
pub mod renderer;
