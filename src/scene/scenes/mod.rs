//! The five story scenes plus the audio check card.
//!
//! Each scene owns its seeded layouts (star fields, flares, particles) built once in
//! [`SceneBook::new`]; evaluating a frame is a pure function of the scene-local frame.

use std::f64::consts::PI;

use crate::data::bodies::BodyKind;
use crate::foundation::core::Point;
use crate::foundation::error::OrreryResult;
use crate::scene::components::orbit::{orbit_position, orbital_speed};
use crate::scene::components::planet::{PlanetStyle, draw_planet};
use crate::scene::model::DisplayList;
use crate::timeline::sequence::SceneId;

pub(crate) mod audio_check;
pub(crate) mod orbits;
pub(crate) mod overview;
pub(crate) mod size_comparison;
pub(crate) mod sun_focus;
pub(crate) mod zoom_out;

/// A planet placed on an orbit for one scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetSlot {
    pub kind: BodyKind,
    pub size: f64,
    pub orbit_radius: f64,
    pub start_angle: f64,
    /// Degrees per frame.
    pub rotation_speed: f64,
}

const fn slot(
    kind: BodyKind,
    size: f64,
    orbit_radius: f64,
    start_angle: f64,
    rotation_speed: f64,
) -> PlanetSlot {
    PlanetSlot {
        kind,
        size,
        orbit_radius,
        start_angle,
        rotation_speed,
    }
}

/// Layout shared by the opening and closing scenes.
pub(crate) const GRAND_TOUR: [PlanetSlot; 8] = [
    slot(BodyKind::Mercury, 15.0, 130.0, 0.0, 0.5),
    slot(BodyKind::Venus, 22.0, 190.0, PI / 2.5, 0.4),
    slot(BodyKind::Earth, 25.0, 260.0, PI / 1.8, 1.2),
    slot(BodyKind::Mars, 18.0, 330.0, PI, 0.8),
    slot(BodyKind::Jupiter, 65.0, 450.0, PI / 3.0, 0.7),
    slot(BodyKind::Saturn, 55.0, 580.0, 2.0 * PI / 3.0, 0.6),
    slot(BodyKind::Uranus, 35.0, 700.0, PI / 4.0, 0.5),
    slot(BodyKind::Neptune, 34.0, 820.0, 3.0 * PI / 4.0, 0.5),
];

impl PlanetSlot {
    /// Position on the orbit for the `index`-th planet when the innermost one moves at `base`.
    pub fn position(&self, center: Point, frame: f64, index: usize, base: f64) -> Point {
        orbit_position(
            center,
            frame,
            self.orbit_radius,
            orbital_speed(base, index),
            self.start_angle,
        )
    }

    pub fn draw(&self, dl: &mut DisplayList, frame: f64, at: Point, rotation_deg: f64) {
        draw_planet(
            dl,
            frame,
            at,
            PlanetStyle {
                kind: self.kind,
                size: self.size,
                rotation_deg,
            },
        );
    }
}

/// Prepared scenes, built once per composition and shared read-only across render workers.
#[derive(Clone, Debug)]
pub struct SceneBook {
    overview: overview::Overview,
    sun_focus: sun_focus::SunFocus,
    orbits: orbits::Orbits,
    sizes: size_comparison::SizeComparison,
    zoom_out: zoom_out::ZoomOut,
    audio_check: audio_check::AudioCheck,
}

impl Default for SceneBook {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBook {
    pub fn new() -> Self {
        Self {
            overview: overview::Overview::new(),
            sun_focus: sun_focus::SunFocus::new(),
            orbits: orbits::Orbits::new(),
            sizes: size_comparison::SizeComparison::new(),
            zoom_out: zoom_out::ZoomOut::new(),
            audio_check: audio_check::AudioCheck::new(),
        }
    }

    /// Display list of `scene` at scene-local frame `local`.
    pub fn evaluate(&self, scene: SceneId, local: u64, fps: f64) -> OrreryResult<DisplayList> {
        let frame = local as f64;
        let dl = match scene {
            SceneId::Scene1 => self.overview.draw(frame)?,
            SceneId::Scene2 => self.sun_focus.draw(frame)?,
            SceneId::Scene3 => self.orbits.draw(frame)?,
            SceneId::Scene4 => self.sizes.draw(frame, fps)?,
            SceneId::Scene5 => self.zoom_out.draw(frame)?,
            SceneId::AudioCheck => self.audio_check.draw(frame, fps)?,
        };
        dl.validate()?;
        Ok(dl)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/scenes/mod.rs"]
mod tests;
