use crate::animation::interp::{InterpolateOpts, interpolate};
use crate::foundation::core::{Affine, Point, Rect, Rgba8};
use crate::foundation::error::OrreryResult;
use crate::scene::model::{DisplayList, Shape, TextAnchor};

const FONT_SIZE: f64 = 18.0;

/// Name tag under a planet; label `index` enters 25 frames after the previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetLabel<'a> {
    pub name: &'a str,
    /// Planet center.
    pub at: Point,
    /// Planet diameter.
    pub size: f64,
    pub index: usize,
}

impl PlanetLabel<'_> {
    pub fn start(&self) -> f64 {
        50.0 + self.index as f64 * 25.0
    }

    /// `(opacity, slide)` at `frame`.
    pub fn style(&self, frame: f64) -> OrreryResult<(f64, f64)> {
        let s = self.start();
        let opacity = interpolate(
            frame,
            &[s, s + 30.0, s + 150.0, s + 180.0],
            &[0.0, 1.0, 1.0, 0.0],
            InterpolateOpts::CLAMP_RIGHT,
        )?;
        let slide = interpolate(
            frame,
            &[s, s + 30.0],
            &[10.0, 0.0],
            InterpolateOpts::CLAMP_RIGHT,
        )?;
        Ok((opacity, slide))
    }

    pub fn draw(&self, dl: &mut DisplayList, frame: f64) -> OrreryResult<()> {
        let (opacity, slide) = self.style(frame)?;
        let top = self.at.y + self.size / 2.0 + 25.0;
        // Bold sans glyphs average a little over half an em.
        let text_w = self.name.chars().count() as f64 * FONT_SIZE * 0.62;
        let (w, h) = (text_w + 24.0, FONT_SIZE * 1.15 + 12.0);

        dl.group(Affine::translate((0.0, slide)), opacity, |dl| {
            dl.fill(
                "label.box",
                Shape::Rect {
                    rect: Rect::new(self.at.x - w / 2.0, top, self.at.x + w / 2.0, top + h),
                    corner_radius: 8.0,
                },
                Rgba8::BLACK,
                0.7,
            );
            dl.fill(
                "label",
                Shape::Text {
                    text: self.name.to_string(),
                    origin: Point::new(self.at.x, top + 6.0 + FONT_SIZE * 0.95),
                    size: FONT_SIZE,
                    bold: true,
                    anchor: TextAnchor::Middle,
                },
                Rgba8::WHITE,
                1.0,
            );
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/label.rs"]
mod tests;
