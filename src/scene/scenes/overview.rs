//! Scene 1: the grand tour. A slow cinematic camera drifts over the whole system.

use crate::animation::interp::{interpolate_clamped, remap_sine};
use crate::foundation::core::{Canvas, Rgba8, Vec2};
use crate::foundation::error::OrreryResult;
use crate::scene::components::CENTER;
use crate::scene::components::backdrop::{
    draw_nebula, draw_space_gradient, draw_vignette, nebula_envelope,
};
use crate::scene::components::camera::Camera;
use crate::scene::components::dust::{DustSpec, MoteSize, SpaceDust};
use crate::scene::components::lens_flare::LensFlares;
use crate::scene::components::orbit::{draw_orbit, draw_trail};
use crate::scene::components::starfield::{StarMotion, Starfield, StarfieldSpec};
use crate::scene::components::sun::{SunStyle, draw_sun};
use crate::scene::model::DisplayList;
use crate::scene::scenes::GRAND_TOUR;

const TOTAL: f64 = 560.0;
const ORBIT_SPEED: f64 = 0.004;

pub(crate) const TOUR_DUST: DustSpec = DustSpec {
    count: 30,
    base_radius: 80.0,
    ring_spacing: 100.0,
    rings: 8,
    drift: 0.0015,
    drift_step: 0.0,
    pulse_speed: 0.02,
    pulse_phase: 0.3,
    opacity: (0.02, 0.1),
    size: MoteSize::Breathing,
};

#[derive(Clone, Debug)]
pub struct Overview {
    stars: Starfield,
    flares: LensFlares,
    dust: SpaceDust,
}

impl Overview {
    pub fn new() -> Self {
        Self {
            stars: Starfield::generate(
                0x5EED_0101,
                StarfieldSpec::new(500, StarMotion::Parallax)
                    .size(0.5, 4.5)
                    .opacity(0.2, 1.0)
                    .twinkle(0.005, 0.025)
                    .depth(0.5, 2.5),
            ),
            flares: LensFlares::generate(0x5EED_0102, 8),
            dust: SpaceDust::new(0x5EED_0103, TOUR_DUST),
        }
    }

    pub fn camera(frame: f64) -> OrreryResult<Camera> {
        let keys = [0.0, TOTAL / 2.0, TOTAL];
        Ok(Camera {
            zoom: interpolate_clamped(frame, &keys, &[0.7, 1.0, 1.1])?,
            pan: Vec2::new(
                interpolate_clamped(frame, &keys, &[0.0, 15.0, 0.0])?,
                interpolate_clamped(frame, &keys, &[0.0, -10.0, 5.0])?,
            ),
            rotation_deg: interpolate_clamped(frame, &[0.0, TOTAL], &[0.0, 10.0])?,
        })
    }

    pub fn draw(&self, frame: f64) -> OrreryResult<DisplayList> {
        let canvas = Canvas::DESIGN;
        let mut dl = DisplayList::new(Rgba8::BLACK);
        draw_space_gradient(&mut dl, canvas, Rgba8::rgb_hex(0x0A0A2A), 1.0);
        self.stars.draw(&mut dl, frame, canvas)?;
        draw_nebula(&mut dl, canvas, nebula_envelope(frame, TOTAL)?);
        self.flares.draw(&mut dl, frame, canvas);

        let camera = Self::camera(frame)?;
        let glow = remap_sine(frame * 0.02, 0.7, 1.0);
        dl.group(camera.affine(CENTER), 1.0, |dl| {
            for (i, p) in GRAND_TOUR.iter().enumerate() {
                let line = remap_sine(frame * 0.01 + i as f64, 0.05, 0.15);
                draw_orbit(dl, CENTER, p.orbit_radius, line);
            }
            draw_sun(dl, CENTER, SunStyle { size: 100.0, glow });
            for (i, p) in GRAND_TOUR.iter().enumerate() {
                let at = p.position(CENTER, frame, i, ORBIT_SPEED);
                p.draw(dl, frame, at, frame * p.rotation_speed);
            }
            for (i, p) in GRAND_TOUR.iter().take(4).enumerate() {
                let at = p.position(CENTER, frame, i, ORBIT_SPEED);
                draw_trail(dl, at, p.size * 3.0, 0.3);
            }
            self.dust.draw(dl, frame, CENTER);
        });

        draw_vignette(&mut dl, canvas, 0.8);
        Ok(dl)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/scenes/overview.rs"]
mod tests;
