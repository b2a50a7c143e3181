//! Audio check card played over the first narration recording.

use crate::animation::ease::Ease;
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::OrreryResult;
use crate::scene::components::starfield::{StarMotion, Starfield, StarfieldSpec};
use crate::scene::components::sun::AnimatedSun;
use crate::scene::components::title::TitleCard;
use crate::scene::components::transition::{Transition, TransitionKind};
use crate::scene::model::{DisplayList, Shape, TextAnchor};

const CHECKS: [&str; 3] = [
    "1. File exists at: public/scene1-narration.m4a",
    "2. Audio is not muted in the render config",
    "3. Volume is turned up",
];

const FIRST_CHECK: f64 = 40.0;
const CHECK_FRAMES: f64 = 160.0;

#[derive(Clone, Debug)]
pub struct AudioCheck {
    stars: Starfield,
    sun: AnimatedSun,
    title: TitleCard,
}

impl AudioCheck {
    pub fn new() -> Self {
        Self {
            stars: Starfield::generate(
                0x5EED_0601,
                StarfieldSpec::new(300, StarMotion::Pulse).size(0.5, 2.5),
            ),
            sun: AnimatedSun::new(0x5EED_0602, 120.0, 0.8, 0.2),
            title: TitleCard {
                text: "Audio check".into(),
                subtitle: Some("Scene 1 narration".into()),
                start: 0.0,
                end: 560.0,
            },
        }
    }

    /// Checklist line on screen at `frame` with its frame relative to when it appeared.
    pub fn active_check(frame: f64) -> Option<(usize, f64)> {
        if frame < FIRST_CHECK {
            return None;
        }
        let since = frame - FIRST_CHECK;
        let idx = (since / CHECK_FRAMES).floor() as usize;
        (idx < CHECKS.len()).then(|| (idx, since - idx as f64 * CHECK_FRAMES))
    }

    pub fn draw(&self, frame: f64, fps: f64) -> OrreryResult<DisplayList> {
        let canvas = Canvas::DESIGN;
        let cx = f64::from(canvas.width) / 2.0;
        let mut dl = DisplayList::new(Rgba8::BLACK);
        self.stars.draw(&mut dl, frame, canvas)?;
        self.sun.draw(&mut dl, frame, Point::new(cx, 330.0));

        let text = |dl: &mut DisplayList, tag, s: &str, y, size, color| {
            dl.fill(
                tag,
                Shape::Text {
                    text: s.to_string(),
                    origin: Point::new(cx, y),
                    size,
                    bold: false,
                    anchor: TextAnchor::Middle,
                },
                color,
                1.0,
            );
        };
        text(
            &mut dl,
            "check.heading",
            "Audio should be playing...",
            540.0,
            30.0,
            Rgba8::WHITE,
        );
        text(
            &mut dl,
            "check.subtitle",
            "If you can't hear it, check:",
            590.0,
            20.0,
            Rgba8::rgb_hex(0xFFD700),
        );

        if let Some((idx, local)) = Self::active_check(frame) {
            let slide =
                Transition::new(TransitionKind::Slide, CHECK_FRAMES).with_ease(Ease::CSS);
            slide.apply(&mut dl, local, Point::new(cx, 640.0), |dl| {
                text(dl, "check.item", CHECKS[idx], 640.0, 16.0, Rgba8::WHITE);
            })?;
        }

        self.title.draw(&mut dl, frame, fps, canvas)?;
        Ok(dl)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/scenes/audio_check.rs"]
mod tests;
