//! Scene 2: the camera pushes in on the Sun while a call-out introduces it.

use std::f64::consts::PI;

use crate::animation::interp::{InterpolateOpts, interpolate, remap_sine};
use crate::data::bodies::BodyKind;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::OrreryResult;
use crate::scene::components::CENTER;
use crate::scene::components::annotation::draw_sun_annotation;
use crate::scene::components::backdrop::{draw_nebula, draw_space_gradient, draw_vignette};
use crate::scene::components::camera::Camera;
use crate::scene::components::dust::{DustSpec, MoteSize, SpaceDust};
use crate::scene::components::orbit::{draw_orbit, draw_trail};
use crate::scene::components::starfield::{StarMotion, Starfield, StarfieldSpec};
use crate::scene::components::sun::{SunStyle, draw_sun};
use crate::scene::model::DisplayList;
use crate::scene::scenes::{PlanetSlot, slot};

/// Frames over which the push-in runs; the scene holds the final zoom afterwards.
const MOTION_FRAMES: f64 = 360.0;
const ORBIT_SPEED: f64 = 0.005;

const PLANETS: [PlanetSlot; 8] = [
    slot(BodyKind::Mercury, 20.0, 120.0, 0.0, 0.4),
    slot(BodyKind::Venus, 28.0, 180.0, PI / 2.5, 0.3),
    slot(BodyKind::Earth, 30.0, 240.0, PI / 1.8, 1.0),
    slot(BodyKind::Mars, 24.0, 300.0, PI, 0.7),
    slot(BodyKind::Jupiter, 80.0, 400.0, PI / 3.0, 0.6),
    slot(BodyKind::Saturn, 65.0, 520.0, 2.0 * PI / 3.0, 0.5),
    slot(BodyKind::Uranus, 45.0, 650.0, PI / 4.0, 0.4),
    slot(BodyKind::Neptune, 43.0, 780.0, 3.0 * PI / 4.0, 0.4),
];

#[derive(Clone, Debug)]
pub struct SunFocus {
    stars: Starfield,
    dust: SpaceDust,
}

impl SunFocus {
    pub fn new() -> Self {
        Self {
            stars: Starfield::generate(
                0x5EED_0201,
                StarfieldSpec::new(400, StarMotion::Twinkle)
                    .size(0.5, 3.5)
                    .opacity(0.2, 1.0)
                    .twinkle(0.005, 0.02),
            ),
            dust: SpaceDust::new(
                0x5EED_0202,
                DustSpec {
                    count: 25,
                    base_radius: 60.0,
                    ring_spacing: 80.0,
                    rings: 6,
                    drift: 0.001,
                    drift_step: 0.0005,
                    pulse_speed: 0.02,
                    pulse_phase: 0.3,
                    opacity: (0.03, 0.12),
                    size: MoteSize::Seeded(1.0, 2.5),
                },
            ),
        }
    }

    pub fn zoom(frame: f64) -> OrreryResult<f64> {
        interpolate(
            frame,
            &[0.0, MOTION_FRAMES],
            &[1.5, 2.2],
            InterpolateOpts::CLAMP_RIGHT,
        )
    }

    pub fn draw(&self, frame: f64) -> OrreryResult<DisplayList> {
        let canvas = Canvas::DESIGN;
        let mut dl = DisplayList::new(Rgba8::BLACK);
        draw_space_gradient(&mut dl, canvas, Rgba8::rgb_hex(0x0A0A2A), 1.0);
        self.stars.draw(&mut dl, frame, canvas)?;
        draw_nebula(&mut dl, canvas, 0.15);

        let zoom = Self::zoom(frame)?;
        let glow = remap_sine(frame * 0.008, 0.7, 1.0);
        dl.group(Camera::zoom(zoom).affine(CENTER), 1.0, |dl| {
            for (i, p) in PLANETS.iter().enumerate() {
                let line = remap_sine(frame * 0.01 + i as f64, 0.08, 0.18);
                draw_orbit(dl, CENTER, p.orbit_radius, line);
            }
            draw_sun(dl, CENTER, SunStyle { size: 100.0, glow });
            for (i, p) in PLANETS.iter().enumerate() {
                let at = p.position(CENTER, frame, i, ORBIT_SPEED);
                p.draw(dl, frame, at, frame * p.rotation_speed);
            }
            self.dust.draw(dl, frame, CENTER);
            for (i, p) in PLANETS.iter().take(4).enumerate() {
                let at = p.position(CENTER, frame, i, ORBIT_SPEED);
                let opacity = remap_sine(frame * 0.05 + i as f64, 0.1, 0.3);
                draw_trail(dl, at, p.size * 2.5, opacity);
            }
        });

        draw_vignette(&mut dl, canvas, 0.6);
        // Screen space, outside the zoom group.
        draw_sun_annotation(&mut dl, frame, CENTER, zoom)?;
        Ok(dl)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/scenes/sun_focus.rs"]
mod tests;
