//! Scene 4: the eight planets side by side at relative scale.

use crate::animation::interp::{InterpolateOpts, interpolate};
use crate::animation::spring::{SpringConfig, SpringOpts, spring};
use crate::data::bodies::{BodyKind, body};
use crate::foundation::core::{Affine, Canvas, Point, Rgba8};
use crate::foundation::error::OrreryResult;
use crate::scene::components::backdrop::draw_space_gradient;
use crate::scene::components::planet::{PlanetStyle, draw_planet};
use crate::scene::components::starfield::{StarMotion, Starfield, StarfieldSpec};
use crate::scene::model::{DisplayList, Shape, TextAnchor};

/// Display diameters, not to true scale.
const LINEUP: [(BodyKind, f64); 8] = [
    (BodyKind::Mercury, 30.0),
    (BodyKind::Venus, 70.0),
    (BodyKind::Earth, 75.0),
    (BodyKind::Mars, 40.0),
    (BodyKind::Jupiter, 200.0),
    (BodyKind::Saturn, 170.0),
    (BodyKind::Uranus, 90.0),
    (BodyKind::Neptune, 85.0),
];

const GAP: f64 = 25.0;
const ROW_HEIGHT: f64 = 500.0;
const NAME_BAND: f64 = 50.0;

const ENTRANCE: SpringConfig = SpringConfig {
    damping: 20.0,
    mass: 0.8,
    stiffness: 100.0,
    overshoot_clamping: false,
};

#[derive(Clone, Debug)]
pub struct SizeComparison {
    stars: Starfield,
}

impl SizeComparison {
    pub fn new() -> Self {
        Self {
            stars: Starfield::generate(
                0x5EED_0401,
                StarfieldSpec::new(200, StarMotion::Still)
                    .size(0.5, 2.5)
                    .opacity(0.3, 1.0),
            ),
        }
    }

    /// Spring progress of lineup entry `index`, entering five frames after its predecessor.
    pub fn entrance(frame: f64, index: usize, fps: f64) -> OrreryResult<f64> {
        spring(SpringOpts {
            config: ENTRANCE,
            ..SpringOpts::new((frame - index as f64 * 5.0).max(0.0), fps)
        })
    }

    /// Column centers across 95 % of the canvas with 20 px padding and fixed gaps.
    pub fn column_centers(canvas: Canvas) -> [f64; 8] {
        let w = f64::from(canvas.width);
        let row = w * 0.95;
        let left = (w - row) / 2.0 + 20.0;
        let inner = row - 40.0;
        let col = (inner - GAP * 7.0) / 8.0;
        std::array::from_fn(|i| left + i as f64 * (col + GAP) + col / 2.0)
    }

    pub fn draw(&self, frame: f64, fps: f64) -> OrreryResult<DisplayList> {
        let canvas = Canvas::DESIGN;
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let mut dl = DisplayList::new(Rgba8::rgb_hex(0x000814));
        self.stars.draw(&mut dl, frame, canvas)?;
        draw_space_gradient(&mut dl, canvas, Rgba8::rgb(0, 40, 80), 0.1);

        let title_opacity = interpolate(
            frame,
            &[0.0, 40.0],
            &[0.0, 1.0],
            InterpolateOpts::default(),
        )?;
        dl.fill(
            "title",
            Shape::Text {
                text: "Planet Size Comparison".into(),
                origin: Point::new(w / 2.0, 60.0 + 56.0 * 0.9),
                size: 56.0,
                bold: true,
                anchor: TextAnchor::Middle,
            },
            Rgba8::rgb_hex(0xFFD700),
            title_opacity,
        );

        let top = (h - ROW_HEIGHT) / 2.0;
        let planet_y = top + (ROW_HEIGHT - NAME_BAND) / 2.0;
        let name_y = top + ROW_HEIGHT - 30.0 + 22.0;
        let item_center_y = top + ROW_HEIGHT / 2.0;
        let rotation = frame * 0.2;

        for (i, (&(kind, size), x)) in LINEUP
            .iter()
            .zip(Self::column_centers(canvas))
            .enumerate()
        {
            let e = Self::entrance(frame, i, fps)?;
            let pivot = Point::new(x, item_center_y).to_vec2();
            let scale =
                Affine::translate(pivot) * Affine::scale(e.max(0.0)) * Affine::translate(-pivot);
            dl.group(scale, e, |dl| {
                draw_planet(
                    dl,
                    frame,
                    Point::new(x, planet_y),
                    PlanetStyle {
                        kind,
                        size,
                        rotation_deg: rotation,
                    },
                );
                dl.fill(
                    "planet.name",
                    Shape::Text {
                        text: body(kind).name.to_string(),
                        origin: Point::new(x, name_y),
                        size: 22.0,
                        bold: false,
                        anchor: TextAnchor::Middle,
                    },
                    Rgba8::WHITE,
                    0.95,
                );
            });
        }

        let indicator = interpolate(
            frame,
            &[40.0, 70.0],
            &[0.0, 0.7],
            InterpolateOpts::default(),
        )?;
        let cols = Self::column_centers(canvas);
        dl.fill(
            "scale",
            Shape::Line {
                from: Point::new(cols[0], h - 100.0),
                to: Point::new(cols[7], h - 100.0),
                width: 1.0,
            },
            Rgba8::rgb_hex(0xAAAAAA),
            indicator.min(0.7),
        );
        Ok(dl)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/scenes/size_comparison.rs"]
mod tests;
