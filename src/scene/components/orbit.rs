//! Orbital motion and orbit paths.
//!
//! Orbits are ellipses flattened vertically by [`ORBIT_SQUASH`] to suggest a tilted viewing
//! plane. Angles advance linearly with the frame.

use crate::foundation::core::{Point, Rgba8, Vec2};
use crate::scene::model::{DisplayList, Shape};

pub const ORBIT_SQUASH: f64 = 0.6;

const ORBIT_COLOR: Rgba8 = Rgba8::rgb(100, 150, 255);

/// Base angular speed divided by orbital rank, so outer bodies move slower.
pub fn orbital_speed(base: f64, index: usize) -> f64 {
    base / (index as f64 + 1.0)
}

/// Offset from the orbit center at `frame`.
pub fn orbit_offset(frame: f64, radius: f64, speed: f64, start_angle: f64) -> Vec2 {
    let angle = frame * speed + start_angle;
    Vec2::new(radius * angle.cos(), radius * angle.sin() * ORBIT_SQUASH)
}

pub fn orbit_position(
    center: Point,
    frame: f64,
    radius: f64,
    speed: f64,
    start_angle: f64,
) -> Point {
    center + orbit_offset(frame, radius, speed, start_angle)
}

/// Thin orbit outline with a soft wider halo at half strength.
pub fn draw_orbit(dl: &mut DisplayList, center: Point, radius: f64, opacity: f64) {
    let ry = radius * ORBIT_SQUASH;
    dl.fill(
        "orbit.glow",
        Shape::Ring {
            center,
            rx: radius,
            ry,
            width: 6.0,
        },
        ORBIT_COLOR,
        opacity * 0.5 * 0.3,
    );
    dl.fill(
        "orbit",
        Shape::Ring {
            center,
            rx: radius,
            ry,
            width: 1.0,
        },
        ORBIT_COLOR,
        opacity,
    );
}

/// White glow trailing an inner planet.
pub fn draw_trail(dl: &mut DisplayList, at: Point, diameter: f64, opacity: f64) {
    dl.glow("trail", at, diameter / 2.0, Rgba8::WHITE, opacity);
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/orbit.rs"]
mod tests;
