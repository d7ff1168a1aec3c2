/*
 * Renderer Module
 *
 * Replays the frame recorded by the simulation onto the window.
 * The canvas is overpainted with a translucent background instead of being
 * cleared, which leaves short trails behind moving boids.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::sink::BoidSprite;

const TRAIL_ALPHA: f32 = 0.15;
const RING_RADIUS: f32 = 20.0;
const RING_CORE_RADIUS: f32 = 10.0;

fn background() -> Rgb {
    rgb(20.0 / 255.0, 24.0 / 255.0, 35.0 / 255.0)
}

// Canvas point to window point
pub fn to_window(point: Vec2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + point.x, window_rect.top() - point.y)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();
    let bg = background();

    if frame.nth() == 0 {
        draw.background().color(bg);
    } else {
        draw.rect()
            .xy(window_rect.xy())
            .wh(window_rect.wh())
            .color(rgba(bg.red, bg.green, bg.blue, TRAIL_ALPHA));
    }

    // Sprites arrive sorted back to front
    for sprite in &model.frame.sprites {
        draw_boid(&draw, sprite, window_rect);
    }

    if let Some(point) = model.frame.attraction {
        draw_attraction(&draw, to_window(point, window_rect));
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::warn!("Failed to draw frame {}: {e:?}", frame.nth());
    }

    // Draw the egui UI
    if let Err(e) = model.egui.draw_to_frame(&frame) {
        log::warn!("Failed to draw controls: {e:?}");
    }
}

fn draw_boid(draw: &Draw, sprite: &BoidSprite, window_rect: Rect) {
    let size = sprite.size;
    let points = [
        pt2(size, 0.0),
        pt2(-size / 2.0, size / 2.0),
        pt2(-size / 2.0, -size / 2.0),
    ];
    let b = sprite.brightness as f32 / 255.0;
    let position = to_window(sprite.position, window_rect);
    // The y flip mirrors the heading too
    let angle = -sprite.heading;

    draw.polygon()
        .color(rgba(b, b, b, sprite.opacity))
        .points(points)
        .xy(position)
        .rotate(angle);

    draw.polyline()
        .weight(1.0)
        .points_closed(points)
        .color(rgba(b, b, b, sprite.opacity * 0.6))
        .xy(position)
        .rotate(angle);
}

fn draw_attraction(draw: &Draw, center: Point2) {
    draw.ellipse()
        .xy(center)
        .radius(RING_RADIUS)
        .no_fill()
        .stroke(rgba(1.0, 1.0, 1.0, 0.5))
        .stroke_weight(2.0);

    draw.ellipse()
        .xy(center)
        .radius(RING_CORE_RADIUS)
        .color(rgba(1.0, 1.0, 1.0, 0.3));
}
