/*
 * Render Sink Module
 *
 * The simulation never draws. It emits one BoidSprite per boid per frame into
 * a RenderSink, plus the attraction ring when one is active. The app records
 * a frame into a FrameRecording during update and replays it in view.
 */

use nannou::prelude::*;

/// Everything needed to draw one boid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidSprite {
    pub position: Vec2,
    /// Heading in radians, `atan2(vy, vx)` in simulation space.
    pub heading: f32,
    pub size: f32,
    /// Grey level, 180..=255.
    pub brightness: u8,
    /// 0.5..=1.0
    pub opacity: f32,
}

pub trait RenderSink {
    fn boid(&mut self, sprite: BoidSprite);
    fn attraction_ring(&mut self, center: Vec2);
}

#[derive(Debug, Default, Clone)]
pub struct FrameRecording {
    pub sprites: Vec<BoidSprite>,
    pub attraction: Option<Vec2>,
}

impl FrameRecording {
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.attraction = None;
    }
}

impl RenderSink for FrameRecording {
    fn boid(&mut self, sprite: BoidSprite) {
        self.sprites.push(sprite);
    }

    fn attraction_ring(&mut self, center: Vec2) {
        self.attraction = Some(center);
    }
}
