//! Call-out box and arrow pointing at the Sun.
//!
//! Drawn in screen space on top of a zoomed scene, so every length is divided by the current
//! zoom to keep the box anchored next to the Sun as the camera pushes in.

use crate::animation::interp::{InterpolateOpts, interpolate, remap_sine};
use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::OrreryResult;
use crate::scene::model::{DisplayList, Shape, TextAnchor};

const GOLD: Rgba8 = Rgba8::rgb_hex(0xFFD700);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationStyle {
    pub text_opacity: f64,
    pub text_slide: f64,
    /// Arrow opacity with the pulse applied.
    pub arrow_opacity: f64,
}

pub fn annotation_style(frame: f64) -> OrreryResult<AnnotationStyle> {
    let envelope = |a: f64| {
        interpolate(
            frame,
            &[a, a + 30.0, 350.0, 380.0],
            &[0.0, 1.0, 1.0, 0.0],
            InterpolateOpts::CLAMP_RIGHT,
        )
    };
    let text_opacity = envelope(20.0)?;
    let text_slide = interpolate(
        frame,
        &[20.0, 50.0],
        &[50.0, 0.0],
        InterpolateOpts::CLAMP_RIGHT,
    )?;
    let pulse = remap_sine(frame * 0.1, 0.7, 1.0);
    Ok(AnnotationStyle {
        text_opacity,
        text_slide,
        arrow_opacity: envelope(30.0)? * pulse,
    })
}

pub fn draw_sun_annotation(
    dl: &mut DisplayList,
    frame: f64,
    center: Point,
    zoom: f64,
) -> OrreryResult<()> {
    let style = annotation_style(frame)?;
    let z = zoom.max(1e-3);

    // Arrow
    let start = center + Vec2::new(200.0 / z, -100.0 / z);
    let dir = Vec2::from_angle(45f64.to_radians());
    let tip = start + dir * (150.0 / z);
    dl.fill(
        "annotation.arrow",
        Shape::Line {
            from: start,
            to: tip,
            width: 2.0 / z,
        },
        GOLD,
        style.arrow_opacity * 0.8,
    );
    let normal = Vec2::new(-dir.y, dir.x);
    dl.fill(
        "annotation.arrow",
        Shape::Polygon {
            points: vec![
                tip + normal * (8.0 / z),
                tip + dir * (15.0 / z),
                tip - normal * (8.0 / z),
            ],
        },
        GOLD,
        style.arrow_opacity * 0.8,
    );

    // Text box
    let origin = center + Vec2::new(380.0 / z, -200.0 / z);
    let (w, h, pad) = (400.0 / z, 186.0 / z, 25.0 / z);
    let glow = remap_sine(frame * 0.05, 0.3, 0.6);
    dl.glow(
        "annotation.glow",
        origin + Vec2::new(w / 2.0, 110.0 / z),
        w * 0.6,
        GOLD,
        0.1 * glow * style.arrow_opacity,
    );

    dl.group(
        Affine::translate((0.0, style.text_slide)),
        style.text_opacity,
        |dl| {
            let rect = Rect::from_origin_size(origin, (w, h));
            dl.fill(
                "annotation.box",
                Shape::Rect {
                    rect,
                    corner_radius: 15.0 / z,
                },
                Rgba8::BLACK,
                0.6,
            );
            let x = origin.x + pad;
            let mut baseline = origin.y + pad + 33.0 / z;
            dl.fill(
                "annotation.text",
                Shape::Text {
                    text: "The Sun".into(),
                    origin: Point::new(x, baseline),
                    size: 36.0 / z,
                    bold: true,
                    anchor: TextAnchor::Start,
                },
                GOLD,
                1.0,
            );
            baseline += (8.0 + 15.0 + 25.0) / z;
            for line in ["Type: G-type Main Sequence Star", "Age: 4.6 billion years"] {
                dl.fill(
                    "annotation.text",
                    Shape::Text {
                        text: line.into(),
                        origin: Point::new(x, baseline),
                        size: 20.0 / z,
                        bold: false,
                        anchor: TextAnchor::Start,
                    },
                    Rgba8::WHITE,
                    0.9,
                );
                baseline += 40.0 / z;
            }
        },
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/annotation.rs"]
mod tests;
