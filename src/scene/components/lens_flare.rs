use crate::animation::interp::remap_sine;
use crate::animation::rng::Rng64;
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::scene::model::DisplayList;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flare {
    pub size: f64,
    pub opacity: f64,
    /// Percent of canvas width.
    pub x: f64,
    /// Percent of canvas height.
    pub y: f64,
}

/// Soft white light blooms drifting in opacity.
#[derive(Clone, Debug)]
pub struct LensFlares {
    flares: Vec<Flare>,
}

impl LensFlares {
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = Rng64::new(seed);
        let flares = (0..count)
            .map(|_| Flare {
                size: rng.range(100.0, 400.0),
                opacity: rng.range(0.05, 0.15),
                x: rng.range(30.0, 70.0),
                y: rng.range(20.0, 80.0),
            })
            .collect();
        Self { flares }
    }

    pub fn flares(&self) -> &[Flare] {
        &self.flares
    }

    /// Opacity of flare `i`: `remap_sine(frame * 0.01 + i, o * 0.5, o * 1.5)`.
    pub fn opacity(&self, i: usize, frame: f64) -> f64 {
        self.flares
            .get(i)
            .map(|f| remap_sine(frame * 0.01 + i as f64, f.opacity * 0.5, f.opacity * 1.5))
            .unwrap_or(0.0)
    }

    pub fn draw(&self, dl: &mut DisplayList, frame: f64, canvas: Canvas) {
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        for (i, f) in self.flares.iter().enumerate() {
            dl.glow(
                "lens_flare",
                Point::new(f.x / 100.0 * w, f.y / 100.0 * h),
                f.size / 2.0,
                Rgba8::WHITE,
                self.opacity(i, frame) * 0.3,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/lens_flare.rs"]
mod tests;
