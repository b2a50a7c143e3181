use crate::animation::interp::{InterpolateOpts, interpolate};
use crate::animation::spring::{SpringConfig, SpringOpts, spring};
use crate::foundation::core::{Affine, Canvas, Point, Rgba8};
use crate::foundation::error::OrreryResult;
use crate::scene::model::{DisplayList, Shape, TextAnchor};

/// Lower-left title card that springs in at `start` and out at `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleCard {
    pub text: String,
    pub subtitle: Option<String>,
    pub start: f64,
    pub end: f64,
}

/// Opacity and slide offsets of a title card at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleStyle {
    pub opacity: f64,
    pub text_slide: f64,
    pub subtitle_slide: f64,
}

fn fade(frame: f64, fps: f64) -> OrreryResult<f64> {
    spring(SpringOpts {
        config: SpringConfig {
            damping: 100.0,
            ..SpringConfig::default()
        },
        duration_in_frames: Some(30.0),
        ..SpringOpts::new(frame, fps)
    })
}

impl TitleCard {
    pub fn style(&self, frame: f64, fps: f64) -> OrreryResult<TitleStyle> {
        let fade_in = fade(frame - self.start, fps)?;
        let fade_out = fade(self.end - frame, fps)?;
        let text_slide = interpolate(
            frame,
            &[self.start, self.start + 20.0],
            &[-100.0, 0.0],
            InterpolateOpts::CLAMP_RIGHT,
        )?;
        let subtitle_slide = interpolate(
            frame,
            &[self.start + 10.0, self.start + 30.0],
            &[-100.0, 0.0],
            InterpolateOpts::CLAMP_RIGHT,
        )?;
        Ok(TitleStyle {
            opacity: fade_in.min(fade_out),
            text_slide,
            subtitle_slide,
        })
    }

    pub fn draw(
        &self,
        dl: &mut DisplayList,
        frame: f64,
        fps: f64,
        canvas: Canvas,
    ) -> OrreryResult<()> {
        let style = self.style(frame, fps)?;
        let bottom = f64::from(canvas.height) - 100.0;
        let heading_baseline = if self.subtitle.is_some() {
            bottom - 70.0
        } else {
            bottom - 14.0
        };

        dl.group(
            Affine::translate((0.0, style.text_slide * 0.5)),
            style.opacity,
            |dl| {
                dl.fill(
                    "title",
                    Shape::Text {
                        text: self.text.clone(),
                        origin: Point::new(100.0, heading_baseline + style.text_slide),
                        size: 60.0,
                        bold: true,
                        anchor: TextAnchor::Start,
                    },
                    Rgba8::WHITE,
                    1.0,
                );
                if let Some(sub) = &self.subtitle {
                    dl.fill(
                        "title.subtitle",
                        Shape::Text {
                            text: sub.clone(),
                            origin: Point::new(100.0, bottom - 6.0 + style.subtitle_slide),
                            size: 28.0,
                            bold: false,
                            anchor: TextAnchor::Start,
                        },
                        Rgba8::WHITE,
                        0.9,
                    );
                }
            },
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/title.rs"]
mod tests;
