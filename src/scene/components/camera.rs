use crate::foundation::core::{Affine, Point, Vec2};

/// Whole-scene camera: zoom and rotation about an origin, followed by a pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub zoom: f64,
    pub pan: Vec2,
    pub rotation_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            rotation_deg: 0.0,
        }
    }
}

impl Camera {
    pub fn zoom(zoom: f64) -> Self {
        Self {
            zoom,
            ..Self::default()
        }
    }

    /// `scale(zoom) translate(pan) rotate(rotation)` applied about `origin`.
    pub fn affine(&self, origin: Point) -> Affine {
        let o = origin.to_vec2();
        Affine::translate(o)
            * Affine::scale(self.zoom)
            * Affine::translate(self.pan)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::translate(-o)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/camera.rs"]
mod tests;
