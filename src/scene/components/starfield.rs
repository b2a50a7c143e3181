//! Seeded star fields.
//!
//! Stars are generated once per scene from a fixed seed and positioned in percent of the
//! canvas. [`StarMotion`] selects how a field twinkles and drifts.

use crate::animation::interp::{interpolate_clamped, oscillate};
use crate::animation::rng::Rng64;
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::OrreryResult;
use crate::scene::model::{DisplayList, Shape};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Percent of canvas width.
    pub x: f64,
    /// Percent of canvas height.
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub twinkle_speed: f64,
    pub twinkle_phase: f64,
    pub depth: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarMotion {
    /// No animation.
    Still,
    /// `opacity * oscillate(frame, speed, phase)`.
    Twinkle,
    /// Twinkle plus drift `(frame * 0.01 * depth) mod 100` horizontally and
    /// `(frame * 0.005 * depth) mod 100` vertically, wrapping at the edges.
    Parallax,
    /// Field spanning `[-50, 150)` percent; nearer stars drift faster and shine brighter.
    WideParallax,
    /// Opacity `[0.3, 1]` from `sin(frame * 0.05 + index)`.
    Pulse,
}

/// Ranges a field is sampled from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldSpec {
    pub count: usize,
    pub position: (f64, f64),
    pub size: (f64, f64),
    pub opacity: (f64, f64),
    pub twinkle_speed: (f64, f64),
    pub depth: (f64, f64),
    pub motion: StarMotion,
}

impl StarfieldSpec {
    pub const fn new(count: usize, motion: StarMotion) -> Self {
        Self {
            count,
            position: (0.0, 100.0),
            size: (0.5, 2.5),
            opacity: (0.3, 1.0),
            twinkle_speed: (0.0, 0.0),
            depth: (1.0, 1.0),
            motion,
        }
    }

    pub const fn size(mut self, lo: f64, hi: f64) -> Self {
        self.size = (lo, hi);
        self
    }

    pub const fn opacity(mut self, lo: f64, hi: f64) -> Self {
        self.opacity = (lo, hi);
        self
    }

    pub const fn twinkle(mut self, lo: f64, hi: f64) -> Self {
        self.twinkle_speed = (lo, hi);
        self
    }

    pub const fn depth(mut self, lo: f64, hi: f64) -> Self {
        self.depth = (lo, hi);
        self
    }

    pub const fn position(mut self, lo: f64, hi: f64) -> Self {
        self.position = (lo, hi);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Starfield {
    spec: StarfieldSpec,
    stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(seed: u64, spec: StarfieldSpec) -> Self {
        let mut rng = Rng64::new(seed);
        let stars = (0..spec.count)
            .map(|_| Star {
                x: rng.range(spec.position.0, spec.position.1),
                y: rng.range(spec.position.0, spec.position.1),
                size: rng.range(spec.size.0, spec.size.1),
                opacity: rng.range(spec.opacity.0, spec.opacity.1),
                twinkle_speed: rng.range(spec.twinkle_speed.0, spec.twinkle_speed.1),
                twinkle_phase: rng.angle(),
                depth: rng.range(spec.depth.0, spec.depth.1),
            })
            .collect();
        Self { spec, stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Percent position and opacity of star `i` at `frame`.
    pub fn sample(&self, i: usize, frame: f64) -> OrreryResult<Option<(f64, f64, f64)>> {
        let Some(s) = self.stars.get(i) else {
            return Ok(None);
        };
        let twinkle = oscillate(frame, s.twinkle_speed, s.twinkle_phase);
        let sampled = match self.spec.motion {
            StarMotion::Still => (s.x, s.y, s.opacity),
            StarMotion::Twinkle => (s.x, s.y, s.opacity * twinkle),
            StarMotion::Parallax => {
                let px = (frame * 0.01 * s.depth) % 100.0;
                let py = (frame * 0.005 * s.depth) % 100.0;
                ((s.x + px) % 100.0, (s.y + py) % 100.0, s.opacity * twinkle)
            }
            StarMotion::WideParallax => {
                let near = 1.0 / s.depth;
                let px = (frame * 0.01 * near) % 200.0;
                let py = (frame * 0.005 * near) % 200.0;
                (
                    ((s.x + px + 50.0) % 200.0) / 2.0,
                    ((s.y + py + 50.0) % 200.0) / 2.0,
                    s.opacity * twinkle * (0.5 + 0.5 * near),
                )
            }
            StarMotion::Pulse => {
                let pulse = (frame * 0.05 + i as f64).sin() * 0.5 + 0.5;
                (s.x, s.y, interpolate_clamped(pulse, &[0.0, 1.0], &[0.3, 1.0])?)
            }
        };
        Ok(Some(sampled))
    }

    pub fn draw(&self, dl: &mut DisplayList, frame: f64, canvas: Canvas) -> OrreryResult<()> {
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        for (i, star) in self.stars.iter().enumerate() {
            let Some((x, y, opacity)) = self.sample(i, frame)? else {
                continue;
            };
            dl.fill(
                "star",
                Shape::Circle {
                    center: Point::new(x / 100.0 * w, y / 100.0 * h),
                    radius: star.size / 2.0,
                },
                Rgba8::WHITE,
                opacity,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/starfield.rs"]
mod tests;
