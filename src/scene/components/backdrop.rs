//! Full-frame background layers: deep-space gradient, nebula clouds and vignette.

use crate::animation::interp::interpolate_clamped;
use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::foundation::error::OrreryResult;
use crate::scene::model::{DisplayList, Shape};

/// Nebula opacity over a scene of `total` frames: fades in over 100 frames, holds at 0.4 and
/// fades out over the last 100.
pub fn nebula_envelope(frame: f64, total: f64) -> OrreryResult<f64> {
    interpolate_clamped(
        frame,
        &[0.0, 100.0, total - 100.0, total],
        &[0.0, 0.4, 0.4, 0.0],
    )
}

const NEBULA: [(f64, f64, Rgba8, f64, f64); 3] = [
    (20.0, 30.0, Rgba8::rgb(100, 0, 200), 0.3, 0.5),
    (80.0, 70.0, Rgba8::rgb(0, 100, 200), 0.2, 0.5),
    (50.0, 50.0, Rgba8::rgb(200, 100, 0), 0.15, 0.6),
];

pub fn draw_nebula(dl: &mut DisplayList, canvas: Canvas, opacity: f64) {
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    for (px, py, color, strength, extent) in NEBULA {
        dl.glow(
            "nebula",
            Point::new(px / 100.0 * w, py / 100.0 * h),
            w * extent * 0.5,
            color,
            strength * opacity,
        );
    }
}

/// Radial gradient from `inner` at the center fading into the background.
pub fn draw_space_gradient(dl: &mut DisplayList, canvas: Canvas, inner: Rgba8, opacity: f64) {
    dl.glow(
        "backdrop",
        canvas.center(),
        f64::from(canvas.width.max(canvas.height)) * 0.6,
        inner,
        opacity,
    );
}

/// Darkened edges: black rings thickening toward the frame border.
pub fn draw_vignette(dl: &mut DisplayList, canvas: Canvas, strength: f64) {
    let c = canvas.center();
    let half_diag = c.to_vec2().hypot();
    const RINGS: usize = 4;
    for i in 0..RINGS {
        let t = (i + 1) as f64 / RINGS as f64;
        let r = half_diag * (0.6 + 0.4 * t);
        let width = half_diag * 0.4 / RINGS as f64 * 2.0;
        dl.fill(
            "vignette",
            Shape::Ring {
                center: c,
                rx: r,
                ry: r,
                width,
            },
            Rgba8::BLACK,
            strength * t,
        );
    }
}

/// Full-width strip from the left edge, `progress` of the canvas wide.
pub fn draw_progress_bar(
    dl: &mut DisplayList,
    canvas: Canvas,
    progress: f64,
    height: f64,
    color: Rgba8,
    opacity: f64,
) {
    let w = f64::from(canvas.width) * progress.clamp(0.0, 1.0);
    let bottom = f64::from(canvas.height);
    if w <= 0.0 {
        return;
    }
    dl.fill(
        "progress",
        Shape::Rect {
            rect: Rect::new(0.0, bottom - height, w, bottom),
            corner_radius: 0.0,
        },
        color,
        opacity,
    );
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/backdrop.rs"]
mod tests;
