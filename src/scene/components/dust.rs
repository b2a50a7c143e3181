//! Faint dust motes circling the Sun on concentric orbit-plane rings.

use crate::animation::interp::remap_sine;
use crate::animation::rng::Rng64;
use crate::foundation::core::{Point, Rgba8, Vec2};
use crate::scene::components::orbit::ORBIT_SQUASH;
use crate::scene::model::{DisplayList, Shape};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoteSize {
    Fixed(f64),
    /// `1 + sin(frame * 0.03 + i) * 0.5`.
    Breathing,
    /// Seeded per mote in the given range.
    Seeded(f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DustSpec {
    pub count: usize,
    pub base_radius: f64,
    pub ring_spacing: f64,
    pub rings: usize,
    /// Angular drift per frame; mote `i` adds `(i % 3) * drift_step`.
    pub drift: f64,
    pub drift_step: f64,
    pub pulse_speed: f64,
    pub pulse_phase: f64,
    pub opacity: (f64, f64),
    pub size: MoteSize,
}

#[derive(Clone, Debug)]
pub struct SpaceDust {
    spec: DustSpec,
    sizes: Vec<f64>,
}

impl SpaceDust {
    pub fn new(seed: u64, spec: DustSpec) -> Self {
        let mut rng = Rng64::new(seed);
        let sizes = (0..spec.count)
            .map(|_| match spec.size {
                MoteSize::Seeded(lo, hi) => rng.range(lo, hi),
                MoteSize::Fixed(s) => s,
                MoteSize::Breathing => 1.0,
            })
            .collect();
        Self { spec, sizes }
    }

    /// Offset from the center, diameter and opacity of mote `i`.
    pub fn mote(&self, i: usize, frame: f64) -> (Vec2, f64, f64) {
        let s = &self.spec;
        let fi = i as f64;
        let speed = s.drift + (i % 3) as f64 * s.drift_step;
        let angle = fi / s.count as f64 * std::f64::consts::TAU + frame * speed;
        let radius = s.base_radius + (i % s.rings.max(1)) as f64 * s.ring_spacing;
        let size = match s.size {
            MoteSize::Breathing => 1.0 + (frame * 0.03 + fi).sin() * 0.5,
            _ => self.sizes.get(i).copied().unwrap_or(1.0),
        };
        let opacity = remap_sine(
            frame * s.pulse_speed + fi * s.pulse_phase,
            s.opacity.0,
            s.opacity.1,
        );
        (
            Vec2::new(angle.cos() * radius, angle.sin() * radius * ORBIT_SQUASH),
            size,
            opacity,
        )
    }

    pub fn draw(&self, dl: &mut DisplayList, frame: f64, center: Point) {
        for i in 0..self.spec.count {
            let (offset, size, opacity) = self.mote(i, frame);
            dl.fill(
                "dust",
                Shape::Circle {
                    center: center + offset,
                    radius: size / 2.0,
                },
                Rgba8::WHITE,
                opacity,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/dust.rs"]
mod tests;
