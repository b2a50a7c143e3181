//! Shaded planet discs.
//!
//! A planet is an atmosphere halo, an outer box-glow, a shaded sphere made of stacked discs
//! offset toward the upper-left light source, and per-body surface detail. Everything except
//! the halo turns with the planet's rotation.

use crate::animation::interp::remap_sine;
use crate::data::bodies::{BodyKind, body};
use crate::foundation::core::{Affine, Point, Rgba8, Vec2};
use crate::scene::model::{DisplayList, Shape};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetStyle {
    pub kind: BodyKind,
    /// Disc diameter in design pixels.
    pub size: f64,
    pub rotation_deg: f64,
}

struct Palette {
    light: Rgba8,
    mid: Rgba8,
    dark: Rgba8,
    halo: Rgba8,
    /// Halo diameter as a multiple of the disc size.
    halo_extent: f64,
    halo_opacity: f64,
}

fn palette(kind: BodyKind) -> Palette {
    fn p(
        light: u32,
        mid: u32,
        dark: u32,
        halo: Rgba8,
        halo_extent: f64,
        halo_opacity: f64,
    ) -> Palette {
        Palette {
            light: Rgba8::rgb_hex(light),
            mid: Rgba8::rgb_hex(mid),
            dark: Rgba8::rgb_hex(dark),
            halo,
            halo_extent,
            halo_opacity,
        }
    }
    match kind {
        BodyKind::Mercury => p(
            0xD7CCC8,
            0xBCAAA4,
            0x8D6E63,
            Rgba8::rgb(161, 136, 127),
            1.5,
            0.3,
        ),
        BodyKind::Venus => p(
            0xFFF59D,
            0xFFF176,
            0xFFEE58,
            Rgba8::rgb(255, 213, 79),
            1.6,
            0.4,
        ),
        BodyKind::Earth => p(
            0x1976D2,
            0x1565C0,
            0x0D47A1,
            Rgba8::rgb(135, 206, 235),
            1.8,
            0.4,
        ),
        BodyKind::Mars => p(
            0xFF8A80,
            0xFF5252,
            0xD32F2F,
            Rgba8::rgb(239, 83, 80),
            1.5,
            0.3,
        ),
        BodyKind::Jupiter => p(
            0xFFB74D,
            0xFF9800,
            0xE65100,
            Rgba8::rgb(255, 152, 0),
            1.8,
            0.2,
        ),
        BodyKind::Saturn => p(
            0xFFE0B2,
            0xFFCC80,
            0xFFB74D,
            Rgba8::rgb(255, 224, 130),
            1.7,
            0.2,
        ),
        BodyKind::Uranus => p(
            0xB2EBF2,
            0x80DEEA,
            0x4DD0E1,
            Rgba8::rgb(178, 235, 242),
            1.6,
            0.3,
        ),
        BodyKind::Neptune => p(
            0x7986CB,
            0x5C6BC0,
            0x3F51B5,
            Rgba8::rgb(92, 107, 192),
            1.6,
            0.3,
        ),
        BodyKind::Sun => {
            let c = body(BodyKind::Sun).color;
            Palette {
                light: c,
                mid: c,
                dark: c.darken(30.0),
                halo: c,
                halo_extent: 1.5,
                halo_opacity: 0.3,
            }
        }
    }
}

pub fn draw_planet(dl: &mut DisplayList, frame: f64, center: Point, style: PlanetStyle) {
    let pal = palette(style.kind);
    let r = style.size / 2.0;

    let mut halo_opacity = pal.halo_opacity;
    match style.kind {
        BodyKind::Earth => halo_opacity *= remap_sine(frame * 0.05, 0.7, 1.0) * 0.8,
        BodyKind::Jupiter => halo_opacity *= remap_sine(frame * 0.03, 0.6, 1.0),
        _ => {}
    }
    dl.glow(
        "planet.halo",
        center,
        r * pal.halo_extent,
        pal.halo,
        halo_opacity,
    );

    // Rings are drawn behind the disc.
    if style.kind == BodyKind::Saturn {
        draw_saturn_rings(dl, center, style);
    } else if body(style.kind).has_ring {
        draw_ring(dl, center, style.size);
    }

    let spin = Affine::translate(center.to_vec2())
        * Affine::rotate(style.rotation_deg.to_radians())
        * Affine::translate(-center.to_vec2());
    dl.group(spin, 1.0, |dl| {
        dl.glow("planet.glow", center, r * 1.6, pal.mid, 0.35);
        draw_sphere(dl, center, r, &pal);
        match style.kind {
            BodyKind::Earth => draw_earth_surface(dl, frame, center, style.size),
            BodyKind::Jupiter => draw_jupiter_bands(dl, frame, center, style.size),
            _ => {}
        }
        dl.fill(
            "planet.highlight",
            Shape::Circle {
                center: center + Vec2::new(-0.35 * r, -0.35 * r),
                radius: 0.22 * r,
            },
            Rgba8::WHITE,
            0.35,
        );
    });
}

/// Generic body in a flat color, used where no per-body palette applies.
pub fn draw_plain_body(
    dl: &mut DisplayList,
    center: Point,
    diameter: f64,
    color: Rgba8,
    opacity: f64,
) {
    let r = diameter / 2.0;
    dl.glow("body.halo", center, r * 1.6, color, 0.3 * opacity);
    dl.fill(
        "body",
        Shape::Circle { center, radius: r },
        color.darken(30.0),
        opacity,
    );
    dl.fill(
        "body",
        Shape::Circle {
            center: center + Vec2::new(-0.2 * r, -0.2 * r),
            radius: 0.7 * r,
        },
        color,
        0.8 * opacity,
    );
}

fn draw_sphere(dl: &mut DisplayList, center: Point, r: f64, pal: &Palette) {
    dl.fill(
        "planet",
        Shape::Circle { center, radius: r },
        pal.dark,
        1.0,
    );
    dl.fill(
        "planet",
        Shape::Circle {
            center: center + Vec2::new(-0.12 * r, -0.12 * r),
            radius: 0.82 * r,
        },
        pal.mid,
        1.0,
    );
    dl.fill(
        "planet",
        Shape::Circle {
            center: center + Vec2::new(-0.25 * r, -0.25 * r),
            radius: 0.5 * r,
        },
        pal.light,
        0.9,
    );
    // Rim shading toward the lower right.
    dl.fill(
        "planet.rim",
        Shape::Ring {
            center,
            rx: r * 0.95,
            ry: r * 0.95,
            width: r * 0.1,
        },
        pal.dark.darken(30.0),
        0.5,
    );
}

/// Point at `(px, py)` percent of the planet's bounding box.
fn at(center: Point, size: f64, px: f64, py: f64) -> Point {
    center + Vec2::new((px / 100.0 - 0.5) * size, (py / 100.0 - 0.5) * size)
}

fn draw_earth_surface(dl: &mut DisplayList, frame: f64, center: Point, size: f64) {
    let continents = [
        (55.0, 60.0, 0.14, 0x2E8B57),
        (25.0, 55.0, 0.12, 0x3CB371),
        (70.0, 40.0, 0.15, 0x20B2AA),
        (80.0, 68.0, 0.08, 0x98FB98),
        (50.0, 88.0, 0.07, 0xAFEEEE),
    ];
    for (px, py, k, hex) in continents {
        dl.fill(
            "planet.earth.land",
            Shape::Ellipse {
                center: at(center, size, px, py),
                rx: size * k,
                ry: size * k * 0.7,
            },
            Rgba8::rgb_hex(hex),
            0.85,
        );
    }

    let clouds = [
        (15.0 + (frame * 0.01).sin() * 5.0, 50.0, 0.08, 0.7),
        (40.0 + (frame * 0.015).cos() * 8.0, 45.0, 0.07, 0.65),
        (75.0 + (frame * 0.02).sin() * 6.0, 65.0, 0.07, 0.6),
        (50.0, 15.0 + (frame * 0.01).cos() * 4.0, 0.06, 0.55),
    ];
    for (px, py, k, o) in clouds {
        dl.fill(
            "planet.earth.cloud",
            Shape::Ellipse {
                center: at(center, size, px, py),
                rx: size * k,
                ry: size * k * 0.6,
            },
            Rgba8::WHITE,
            o,
        );
    }
}

fn draw_jupiter_bands(dl: &mut DisplayList, frame: f64, center: Point, size: f64) {
    let shift = (frame * 0.02).sin() * 5.0;
    let r = size / 2.0;
    let bands = [
        (10.0 + shift, Rgba8::rgb(230, 81, 0), 0.8),
        (20.0 + shift, Rgba8::rgb(255, 152, 0), 0.6),
        (35.0 + shift, Rgba8::rgb(245, 124, 0), 0.7),
        (55.0, Rgba8::rgb(230, 81, 0), 0.8),
        (65.0, Rgba8::rgb(255, 152, 0), 0.6),
        (80.0, Rgba8::rgb(245, 124, 0), 0.7),
    ];
    for (py, color, o) in bands {
        let dy = (py / 100.0 - 0.5) * size;
        let half_chord = (r * r - dy * dy).max(0.0).sqrt();
        if half_chord <= 0.0 {
            continue;
        }
        dl.fill(
            "planet.jupiter.band",
            Shape::Ellipse {
                center: center + Vec2::new(0.0, dy),
                rx: half_chord,
                ry: size * 0.04,
            },
            color,
            o * 0.8,
        );
    }

    let spot = at(center, size, 75.0, 47.5);
    let tilt = Affine::translate(spot.to_vec2())
        * Affine::rotate(20f64.to_radians())
        * Affine::translate(-spot.to_vec2());
    dl.group(tilt, 0.9, |dl| {
        dl.fill(
            "planet.jupiter.spot",
            Shape::Ellipse {
                center: spot,
                rx: size * 0.15,
                ry: size * 0.075,
            },
            Rgba8::rgb_hex(0xB71C1C),
            1.0,
        );
    });
}

fn draw_saturn_rings(dl: &mut DisplayList, center: Point, style: PlanetStyle) {
    let size = style.size;
    let tilt = Affine::translate(center.to_vec2())
        * Affine::rotate((style.rotation_deg * 0.02).to_radians())
        * Affine::translate(-center.to_vec2());
    dl.group(tilt, 1.0, |dl| {
        dl.fill(
            "planet.ring.glow",
            Shape::Ring {
                center,
                rx: size * 1.6,
                ry: size * 0.2,
                width: size * 0.3,
            },
            Rgba8::rgb(220, 220, 240),
            0.25,
        );
        dl.fill(
            "planet.ring",
            Shape::Ring {
                center,
                rx: size * 1.6,
                ry: size * 0.2,
                width: size * 0.15,
            },
            Rgba8::rgb(240, 240, 255),
            0.9,
        );
        dl.fill(
            "planet.ring",
            Shape::Ring {
                center,
                rx: size * 1.2,
                ry: size * 0.15,
                width: size * 0.1,
            },
            Rgba8::rgb(200, 200, 220),
            0.4,
        );
    });
}

fn draw_ring(dl: &mut DisplayList, center: Point, size: f64) {
    dl.fill(
        "planet.ring",
        Shape::Ring {
            center,
            rx: size * 1.25,
            ry: size * 0.15,
            width: size * 0.1,
        },
        Rgba8::rgb(200, 200, 220),
        0.7 * 0.8,
    );
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/planet.rs"]
mod tests;
