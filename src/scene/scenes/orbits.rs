//! Scene 3: a near-static view of every orbit with staggered name tags.

use std::f64::consts::PI;

use crate::animation::interp::{InterpolateOpts, interpolate, remap_sine};
use crate::data::bodies::{BodyKind, body};
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::OrreryResult;
use crate::scene::components::CENTER;
use crate::scene::components::backdrop::{draw_nebula, draw_space_gradient, draw_vignette};
use crate::scene::components::camera::Camera;
use crate::scene::components::dust::{DustSpec, MoteSize, SpaceDust};
use crate::scene::components::label::PlanetLabel;
use crate::scene::components::orbit::draw_orbit;
use crate::scene::components::starfield::{StarMotion, Starfield, StarfieldSpec};
use crate::scene::components::sun::{SunStyle, draw_sun};
use crate::scene::model::DisplayList;
use crate::scene::scenes::{PlanetSlot, slot};

const ORBIT_SPEED: f64 = 0.004;

const PLANETS: [PlanetSlot; 8] = [
    slot(BodyKind::Mercury, 12.0, 120.0, 0.0, 0.5),
    slot(BodyKind::Venus, 18.0, 180.0, PI / 3.0, 0.5),
    slot(BodyKind::Earth, 20.0, 240.0, PI / 2.0, 0.5),
    slot(BodyKind::Mars, 16.0, 300.0, PI, 0.5),
    slot(BodyKind::Jupiter, 55.0, 400.0, PI / 4.0, 0.3),
    slot(BodyKind::Saturn, 45.0, 520.0, 3.0 * PI / 4.0, 0.3),
    slot(BodyKind::Uranus, 30.0, 650.0, PI / 6.0, 0.3),
    slot(BodyKind::Neptune, 29.0, 780.0, 5.0 * PI / 6.0, 0.3),
];

#[derive(Clone, Debug)]
pub struct Orbits {
    distant: Starfield,
    twinkling: Starfield,
    dust: SpaceDust,
}

impl Orbits {
    pub fn new() -> Self {
        Self {
            distant: Starfield::generate(
                0x5EED_0301,
                StarfieldSpec::new(300, StarMotion::Still)
                    .size(0.1, 0.9)
                    .opacity(0.05, 0.15),
            ),
            twinkling: Starfield::generate(
                0x5EED_0302,
                StarfieldSpec::new(400, StarMotion::Twinkle)
                    .size(0.3, 2.3)
                    .opacity(0.2, 0.7)
                    .twinkle(0.001, 0.004),
            ),
            dust: SpaceDust::new(
                0x5EED_0303,
                DustSpec {
                    count: 12,
                    base_radius: 60.0,
                    ring_spacing: 50.0,
                    rings: 4,
                    drift: 0.0008,
                    drift_step: 0.0,
                    pulse_speed: 0.015,
                    pulse_phase: 0.8,
                    opacity: (0.03, 0.15),
                    size: MoteSize::Fixed(1.2),
                },
            ),
        }
    }

    pub fn zoom(frame: f64) -> OrreryResult<f64> {
        interpolate(
            frame,
            &[0.0, 400.0],
            &[1.0, 1.05],
            InterpolateOpts::CLAMP_RIGHT,
        )
    }

    pub fn draw(&self, frame: f64) -> OrreryResult<DisplayList> {
        let canvas = Canvas::DESIGN;
        let mut dl = DisplayList::new(Rgba8::rgb_hex(0x000814));
        let zoom = Self::zoom(frame)?;
        let glow = remap_sine(frame * 0.005, 0.7, 1.0);

        // The whole frame scales, background included.
        dl.group(Camera::zoom(zoom).affine(CENTER), 1.0, |dl| -> OrreryResult<()> {
            draw_space_gradient(dl, canvas, Rgba8::rgb_hex(0x000A14), 1.0);
            self.distant.draw(dl, frame, canvas)?;
            self.twinkling.draw(dl, frame, canvas)?;
            draw_nebula(dl, canvas, 0.02);

            for p in &PLANETS {
                draw_orbit(dl, CENTER, p.orbit_radius, 0.15);
            }
            draw_sun(dl, CENTER, SunStyle { size: 85.0, glow });
            for (i, p) in PLANETS.iter().enumerate() {
                let at = p.position(CENTER, frame, i, ORBIT_SPEED);
                p.draw(dl, frame, at, frame * p.rotation_speed);
                PlanetLabel {
                    name: body(p.kind).name,
                    at,
                    size: p.size,
                    index: i,
                }
                .draw(dl, frame)?;
            }
            self.dust.draw(dl, frame, CENTER);
            draw_vignette(dl, canvas, 0.15);
            Ok(())
        })?;
        Ok(dl)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/scenes/orbits.rs"]
mod tests;
