/*
 * Vector Module
 *
 * Steering primitives shared by every flocking rule. All of them are pure
 * and never divide by a zero length.
 */

use nannou::prelude::*;

// Rescale `v` to magnitude `mag`, keeping its direction.
// A zero vector has no direction and is returned unchanged.
#[inline]
pub fn set_mag(v: Vec2, mag: f32) -> Vec2 {
    let len = v.length();
    if len > 0.0 {
        v * (mag / len)
    } else {
        v
    }
}

// Clamp the magnitude of `v` to at most `max`
#[inline]
pub fn limit(v: Vec2, max: f32) -> Vec2 {
    let len = v.length();
    if len > max {
        v * (max / len)
    } else {
        v
    }
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn set_mag_keeps_direction() {
        let v = vec2(3.0, -4.0);
        let scaled = set_mag(v, 2.0);

        assert!((scaled.length() - 2.0).abs() < EPS);
        let cross = v.normalize().perp_dot(scaled.normalize());
        assert!(cross.abs() < EPS);
        assert!(v.dot(scaled) > 0.0);
    }

    #[test]
    fn set_mag_leaves_zero_vector_alone() {
        assert_eq!(set_mag(Vec2::ZERO, 4.0), Vec2::ZERO);
    }

    #[test]
    fn limit_is_noop_below_max() {
        let v = vec2(0.05, 0.05);
        assert_eq!(limit(v, 0.1), v);
        assert_eq!(limit(Vec2::ZERO, 0.0), Vec2::ZERO);
    }

    #[test]
    fn limit_clamps_to_max() {
        let v = vec2(30.0, 40.0);
        let clamped = limit(v, 5.0);
        assert!((clamped.length() - 5.0).abs() < EPS);
        assert!((clamped.x - 3.0).abs() < EPS);
        assert!((clamped.y - 4.0).abs() < EPS);
    }

    #[test]
    fn distance_is_euclidean() {
        assert!((distance(vec2(1.0, 1.0), vec2(4.0, 5.0)) - 5.0).abs() < EPS);
        assert_eq!(distance(vec2(2.0, 2.0), vec2(2.0, 2.0)), 0.0);
    }
}
