use nannou::prelude::*;

use depthflock::{
    Boid, BoidSprite, BoidTuning, Bounds, Flock, FlockWeights, FrameRecording, RenderSink, SimCommand,
    Simulation,
};

const EPS: f32 = 1e-4;

fn bounds() -> Bounds {
    Bounds::new(800.0, 600.0)
}

fn seeded(seed: u64) -> Simulation {
    Simulation::new(FlockWeights::default(), BoidTuning::default(), Some(seed), bounds())
}

#[test]
fn lone_boid_glides_in_a_straight_line() {
    let tuning = BoidTuning::default();
    let mut flock = Flock::new(tuning, Some(3));
    flock.insert(Boid::new(0, vec2(400.0, 300.0), vec2(1.0, 0.0), 0.8, tuning));

    let mut frame = FrameRecording::default();
    flock.update(&FlockWeights::default(), None, bounds(), &mut frame);

    let boid = &flock.boids()[0];
    assert_eq!(boid.acceleration, Vec2::ZERO);
    assert_eq!(boid.velocity, vec2(1.0, 0.0));
    assert_eq!(boid.position, vec2(401.0, 300.0));
    assert_eq!(frame.sprites.len(), 1);
    assert_eq!(frame.sprites[0].heading, 0.0);
}

#[test]
fn tapped_boids_join_and_stay_bounded() {
    let mut sim = seeded(11);
    for i in 0..40 {
        let x = 200.0 + (i % 8) as f32 * 20.0;
        let y = 200.0 + (i / 8) as f32 * 20.0;
        sim.submit(SimCommand::AddBoid(vec2(x, y)));
    }

    let mut frame = FrameRecording::default();
    for _ in 0..300 {
        frame.clear();
        sim.step(bounds(), &mut frame);
        for boid in sim.flock().boids() {
            assert!(boid.velocity.length() <= boid.max_speed + EPS);
            assert!(boid.position.x >= 0.0 && boid.position.x < 800.0);
            assert!(boid.position.y >= 0.0 && boid.position.y < 600.0);
        }
    }

    assert_eq!(sim.flock().len(), 41);
    assert_eq!(frame.sprites.len(), 41);
}

#[test]
fn holding_attraction_pulls_flock_closer() {
    let mut sim = seeded(5);
    for i in 0..10 {
        sim.submit(SimCommand::AddBoid(vec2(100.0 + i as f32 * 15.0, 100.0)));
    }
    let target = vec2(600.0, 450.0);
    sim.submit(SimCommand::SetAttraction(target));

    let mean_distance = |sim: &Simulation| {
        let boids = sim.flock().boids();
        boids.iter().map(|b| b.position.distance(target)).sum::<f32>() / boids.len() as f32
    };

    let mut frame = FrameRecording::default();
    sim.step(bounds(), &mut frame);
    let before = mean_distance(&sim);
    for _ in 0..60 {
        frame.clear();
        sim.step(bounds(), &mut frame);
    }
    let after = mean_distance(&sim);

    assert!(after < before, "before {before}, after {after}");
    assert_eq!(frame.attraction, Some(target));

    sim.submit(SimCommand::ClearAttraction);
    frame.clear();
    sim.step(bounds(), &mut frame);
    assert_eq!(frame.attraction, None);
}

#[test]
fn resize_rewraps_against_new_extent() {
    let mut sim = seeded(8);
    sim.submit(SimCommand::AddBoid(vec2(700.0, 500.0)));

    let small = Bounds::new(400.0, 300.0);
    let mut frame = FrameRecording::default();
    sim.step(small, &mut frame);

    for boid in sim.flock().boids() {
        assert!(boid.position.x >= 0.0 && boid.position.x < 400.0);
        assert!(boid.position.y >= 0.0 && boid.position.y < 300.0);
    }
}

#[test]
fn reset_is_repeatable_with_a_seed() {
    let mut sim = seeded(21);
    let mut frame = FrameRecording::default();
    for _ in 0..5 {
        sim.submit(SimCommand::AddBoid(vec2(10.0, 10.0)));
    }
    sim.step(bounds(), &mut frame);

    sim.submit(SimCommand::Reset);
    sim.apply_pending(bounds());
    let first = sim.flock().boids().to_vec();

    sim.submit(SimCommand::Reset);
    sim.apply_pending(bounds());
    let second = sim.flock().boids().to_vec();

    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
    assert_eq!(first[0].position, bounds().center());
}

#[derive(Default)]
struct CountingSink {
    boids: usize,
    rings: usize,
}

impl RenderSink for CountingSink {
    fn boid(&mut self, _sprite: BoidSprite) {
        self.boids += 1;
    }

    fn attraction_ring(&mut self, _center: Vec2) {
        self.rings += 1;
    }
}

#[test]
fn one_draw_command_per_boid_per_frame() {
    let mut sim = seeded(2);
    sim.submit(SimCommand::AddBoid(vec2(50.0, 50.0)));
    sim.submit(SimCommand::AddBoid(vec2(60.0, 50.0)));
    sim.submit(SimCommand::SetAttraction(vec2(0.0, 0.0)));

    let mut sink = CountingSink::default();
    sim.step(bounds(), &mut sink);
    sim.step(bounds(), &mut sink);

    assert_eq!(sink.boids, 6);
    assert_eq!(sink.rings, 2);
}
