//! The Sun: a glowing core with radiating flare rays.

use crate::animation::interp::remap_sine;
use crate::animation::rng::Rng64;
use crate::foundation::core::{Affine, Point, Rgba8, Vec2};
use crate::scene::model::{DisplayList, Shape};

const GOLD: Rgba8 = Rgba8::rgb_hex(0xFFD700);
const ORANGE: Rgba8 = Rgba8::rgb_hex(0xFF8C00);
const RED_ORANGE: Rgba8 = Rgba8::rgb_hex(0xFF4500);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunStyle {
    /// Core diameter.
    pub size: f64,
    /// Glow intensity in `[0, 1]`.
    pub glow: f64,
}

/// Scene sun with eight fixed rays of `1.5 * size`.
pub fn draw_sun(dl: &mut DisplayList, center: Point, style: SunStyle) {
    let SunStyle { size, glow } = style;
    dl.glow(
        "sun.corona",
        center,
        size * 1.5,
        Rgba8::rgb(255, 140, 0),
        0.2 * glow * 0.6,
    );
    dl.glow("sun.glow", center, size * 1.25, GOLD, 0.4 * glow);

    for i in 0..8 {
        ray(dl, center, i, size * 1.5, 0.9, true);
    }

    draw_core(dl, center, size, glow);
}

/// Sun with rotating pulsing flares and seeded surface granules.
#[derive(Clone, Debug)]
pub struct AnimatedSun {
    pub size: f64,
    pub glow: f64,
    /// Degrees per frame.
    pub rotation_speed: f64,
    granules: Vec<Granule>,
}

#[derive(Clone, Copy, Debug)]
struct Granule {
    offset: Vec2,
    size: f64,
}

impl AnimatedSun {
    pub const GRANULES: usize = 20;

    pub fn new(seed: u64, size: f64, glow: f64, rotation_speed: f64) -> Self {
        let mut rng = Rng64::new(seed);
        let granules = (0..Self::GRANULES)
            .map(|_| {
                let angle = rng.angle();
                let distance = rng.range(0.0, size * 0.4);
                Granule {
                    offset: Vec2::new(angle.cos() * distance, angle.sin() * distance),
                    size: rng.range(size * 0.02, size * 0.12),
                }
            })
            .collect();
        Self {
            size,
            glow,
            rotation_speed,
            granules,
        }
    }

    pub fn draw(&self, dl: &mut DisplayList, frame: f64, center: Point) {
        let size = self.size;
        let flare_opacity = remap_sine(frame * 0.2, 0.3, 0.7);
        let spin = Affine::translate(center.to_vec2())
            * Affine::rotate((frame * self.rotation_speed).to_radians())
            * Affine::translate(-center.to_vec2());

        dl.group(spin, 1.0, |dl| {
            draw_core(dl, center, size, self.glow);
            for i in 0..8 {
                let len = size * 0.8 + (frame * 0.1 + i as f64).sin() * size * 0.1;
                ray(dl, center, i, len, flare_opacity, false);
            }
            for (i, g) in self.granules.iter().enumerate() {
                dl.fill(
                    "sun.granule",
                    Shape::Circle {
                        center: center + g.offset,
                        radius: g.size / 2.0,
                    },
                    RED_ORANGE,
                    0.6 + (frame * 0.2 + i as f64).sin() * 0.2,
                );
            }
        });
    }
}

fn draw_core(dl: &mut DisplayList, center: Point, size: f64, glow: f64) {
    let r = size / 2.0;
    // Box-shadow halos, outermost first.
    dl.glow(
        "sun.halo",
        center,
        r + size * 1.5 * 0.5 + size * 0.6,
        RED_ORANGE,
        glow * 0.4,
    );
    dl.glow(
        "sun.halo",
        center,
        r + size * 0.5 + size * 0.4,
        ORANGE,
        glow * 0.6,
    );
    dl.glow(
        "sun.halo",
        center,
        r + size * 0.25 + size * 0.2,
        GOLD,
        glow * 0.8,
    );

    dl.fill("sun", Shape::Circle { center, radius: r }, ORANGE, 1.0);
    dl.fill(
        "sun",
        Shape::Circle {
            center: center + Vec2::new(-0.15 * r, -0.15 * r),
            radius: 0.75 * r,
        },
        Rgba8::rgb(255, 180, 0),
        1.0,
    );
    dl.fill(
        "sun",
        Shape::Circle {
            center: center + Vec2::new(-0.3 * r, -0.3 * r),
            radius: 0.45 * r,
        },
        GOLD,
        1.0,
    );
}

/// Ray `i` of eight, 4 px thick. Centered rays straddle the core; otherwise they start at it.
fn ray(dl: &mut DisplayList, center: Point, i: usize, len: f64, opacity: f64, centered: bool) {
    let angle = (i as f64 / 8.0) * std::f64::consts::TAU;
    let dir = Vec2::new(angle.cos(), angle.sin());
    let (from, to) = if centered {
        (center - dir * (len / 2.0), center + dir * (len / 2.0))
    } else {
        (center, center + dir * len)
    };
    dl.fill(
        "sun.ray",
        Shape::Line {
            from,
            to,
            width: 4.0,
        },
        GOLD,
        opacity,
    );
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/sun.rs"]
mod tests;
