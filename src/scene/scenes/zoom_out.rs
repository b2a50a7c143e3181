//! Scene 5: pull back from the Sun to the Kuiper belt and close on the title.

use std::f64::consts::PI;

use crate::animation::interp::{InterpolateOpts, interpolate, remap_sine};
use crate::animation::rng::Rng64;
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::OrreryResult;
use crate::scene::components::CENTER;
use crate::scene::components::backdrop::{
    draw_nebula, draw_progress_bar, draw_space_gradient, draw_vignette,
};
use crate::scene::components::camera::Camera;
use crate::scene::components::dust::SpaceDust;
use crate::scene::components::lens_flare::LensFlares;
use crate::scene::components::orbit::{draw_orbit, draw_trail, orbit_position, orbital_speed};
use crate::scene::components::planet::draw_plain_body;
use crate::scene::components::starfield::{StarMotion, Starfield, StarfieldSpec};
use crate::scene::components::sun::{SunStyle, draw_sun};
use crate::scene::model::{DisplayList, Shape, TextAnchor};
use crate::scene::scenes::GRAND_TOUR;
use crate::scene::scenes::overview::TOUR_DUST;

const TOTAL: f64 = 400.0;
const ORBIT_SPEED: f64 = 0.004;

struct Dwarf {
    orbit_radius: f64,
    start_angle: f64,
    color: u32,
}

const DWARF_SIZE: f64 = 8.0;

const DWARFS: [Dwarf; 3] = [
    Dwarf {
        orbit_radius: 1150.0,
        start_angle: PI / 5.0,
        color: 0x888888,
    },
    Dwarf {
        orbit_radius: 1250.0,
        start_angle: 2.0 * PI / 5.0,
        color: 0xAAAAAA,
    },
    Dwarf {
        orbit_radius: 1350.0,
        start_angle: 3.0 * PI / 5.0,
        color: 0xCCCCCC,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
struct BeltParticle {
    orbit_radius: f64,
    start_angle: f64,
    size: f64,
    speed: f64,
}

#[derive(Clone, Debug)]
pub struct ZoomOut {
    stars: Starfield,
    flares: LensFlares,
    dust: SpaceDust,
    belt: Vec<BeltParticle>,
}

/// Visibility factors driven by the current zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomFades {
    pub orbits: f64,
    pub belt: f64,
    pub dwarfs: f64,
    pub trails: f64,
    pub title: f64,
    pub subtitle: f64,
}

impl ZoomOut {
    pub const BELT_PARTICLES: usize = 150;

    pub fn new() -> Self {
        let mut rng = Rng64::new(0x5EED_0504);
        let belt = (0..Self::BELT_PARTICLES)
            .map(|_| BeltParticle {
                orbit_radius: rng.range(1050.0, 1450.0),
                start_angle: rng.angle(),
                size: rng.range(0.8, 2.8),
                speed: rng.range(0.0001, 0.0003),
            })
            .collect();
        Self {
            stars: Starfield::generate(
                0x5EED_0501,
                StarfieldSpec::new(1000, StarMotion::WideParallax)
                    .position(-50.0, 150.0)
                    .size(0.5, 4.5)
                    .opacity(0.2, 1.0)
                    .twinkle(0.005, 0.025)
                    .depth(0.5, 3.5),
            ),
            flares: LensFlares::generate(0x5EED_0502, 8),
            dust: SpaceDust::new(0x5EED_0503, TOUR_DUST),
            belt,
        }
    }

    pub fn zoom(frame: f64) -> OrreryResult<f64> {
        interpolate(
            frame,
            &[0.0, TOTAL],
            &[3.0, 0.15],
            InterpolateOpts::CLAMP_RIGHT,
        )
    }

    pub fn fades(zoom: f64) -> OrreryResult<ZoomFades> {
        let by_zoom = |input: &[f64], output: &[f64]| {
            interpolate(zoom, input, output, InterpolateOpts::default())
        };
        Ok(ZoomFades {
            orbits: by_zoom(&[0.15, 1.0, 3.0], &[1.0, 0.5, 0.0])?,
            belt: by_zoom(&[0.15, 0.5, 3.0], &[1.0, 0.3, 0.0])?,
            dwarfs: by_zoom(&[0.15, 0.8], &[1.0, 0.0])?,
            trails: by_zoom(&[0.15, 1.5], &[0.3, 1.0])?,
            title: by_zoom(&[0.15, 1.0, 2.0], &[1.0, 0.5, 0.0])?,
            subtitle: by_zoom(&[0.15, 0.8, 1.5], &[0.0, 1.0, 0.0])?,
        })
    }

    pub fn draw(&self, frame: f64) -> OrreryResult<DisplayList> {
        let canvas = Canvas::DESIGN;
        let w = f64::from(canvas.width);
        let mut dl = DisplayList::new(Rgba8::BLACK);
        draw_space_gradient(&mut dl, canvas, Rgba8::rgb_hex(0x0A0A2A), 1.0);
        self.stars.draw(&mut dl, frame, canvas)?;
        draw_nebula(&mut dl, canvas, 0.2);
        self.flares.draw(&mut dl, frame, canvas);

        let zoom = Self::zoom(frame)?;
        let fade = Self::fades(zoom)?;
        let glow = remap_sine(frame * 0.02, 0.7, 1.0);

        dl.group(Camera::zoom(zoom).affine(CENTER), 1.0, |dl| {
            for (i, p) in GRAND_TOUR.iter().enumerate() {
                let line = remap_sine(frame * 0.01 + i as f64, 0.05, 0.15);
                draw_orbit(dl, CENTER, p.orbit_radius, line * fade.orbits);
            }
            for p in &self.belt {
                let at = orbit_position(CENTER, frame, p.orbit_radius, p.speed, p.start_angle);
                dl.fill(
                    "kuiper",
                    Shape::Circle {
                        center: at,
                        radius: p.size / 2.0,
                    },
                    Rgba8::rgba(200, 200, 255, 77),
                    0.2 * fade.belt,
                );
            }
            draw_sun(dl, CENTER, SunStyle { size: 100.0, glow });
            for (i, p) in GRAND_TOUR.iter().enumerate() {
                let at = p.position(CENTER, frame, i, ORBIT_SPEED);
                p.draw(dl, frame, at, frame * p.rotation_speed);
            }
            if fade.dwarfs > 0.01 {
                for (i, d) in DWARFS.iter().enumerate() {
                    let at = orbit_position(
                        CENTER,
                        frame,
                        d.orbit_radius,
                        orbital_speed(0.001, i),
                        d.start_angle,
                    );
                    draw_plain_body(dl, at, DWARF_SIZE, Rgba8::rgb_hex(d.color), fade.dwarfs);
                }
            }
            for (i, p) in GRAND_TOUR.iter().take(4).enumerate() {
                let at = p.position(CENTER, frame, i, ORBIT_SPEED);
                draw_trail(dl, at, p.size * 3.0, 0.3 * fade.trails);
            }
            self.dust.draw(dl, frame, CENTER);
        });

        draw_vignette(&mut dl, canvas, 0.8);

        dl.fill(
            "caption.title",
            Shape::Text {
                text: "Our Solar System".into(),
                origin: Point::new(w / 2.0, 80.0 + 48.0 * 0.9),
                size: 48.0,
                bold: true,
                anchor: TextAnchor::Middle,
            },
            Rgba8::rgb_hex(0xFFD700),
            fade.title,
        );
        dl.fill(
            "caption.subtitle",
            Shape::Text {
                text: "A journey from the Sun to the outer reaches".into(),
                origin: Point::new(w / 2.0, 140.0 + 24.0 * 1.1),
                size: 24.0,
                bold: false,
                anchor: TextAnchor::Middle,
            },
            Rgba8::rgb_hex(0xAAAAAA),
            fade.subtitle,
        );
        draw_progress_bar(
            &mut dl,
            canvas,
            frame / TOTAL,
            3.0,
            Rgba8::rgb_hex(0xFFD700),
            0.3,
        );
        Ok(dl)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/scenes/zoom_out.rs"]
mod tests;
