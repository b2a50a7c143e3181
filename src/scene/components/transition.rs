use crate::animation::ease::Ease;
use crate::animation::interp::{InterpolateOpts, interpolate};
use crate::foundation::core::{Affine, Point};
use crate::foundation::error::OrreryResult;
use crate::scene::model::DisplayList;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    #[default]
    Fade,
    Zoom,
    Slide,
}

/// Wrapper that fades content in over `duration` frames and out over the last fifth of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub duration: f64,
    pub ease: Ease,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            kind: TransitionKind::Fade,
            duration: 30.0,
            ease: Ease::Linear,
        }
    }
}

impl Transition {
    pub fn new(kind: TransitionKind, duration: f64) -> Self {
        Self {
            kind,
            duration,
            ease: Ease::Linear,
        }
    }

    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Group transform (about `origin`) and opacity at `frame`.
    pub fn style(&self, frame: f64, origin: Point) -> OrreryResult<(Affine, f64)> {
        let d = self.duration;
        let opts = InterpolateOpts::CLAMP_RIGHT.with_ease(self.ease);
        let fade_in = interpolate(frame, &[0.0, d], &[0.0, 1.0], opts)?;
        let fade_out = interpolate(frame, &[d * 0.8, d], &[1.0, 0.0], opts)?;
        let opacity = fade_in.min(fade_out);

        let transform = match self.kind {
            TransitionKind::Fade => Affine::IDENTITY,
            TransitionKind::Zoom => {
                let s = interpolate(frame, &[0.0, d], &[0.8, 1.0], opts)?;
                let o = origin.to_vec2();
                Affine::translate(o) * Affine::scale(s) * Affine::translate(-o)
            }
            TransitionKind::Slide => {
                let dy = interpolate(frame, &[0.0, d], &[50.0, 0.0], opts)?;
                Affine::translate((0.0, dy))
            }
        };
        Ok((transform, opacity))
    }

    /// Draw `content` inside the transition group.
    pub fn apply<T>(
        &self,
        dl: &mut DisplayList,
        frame: f64,
        origin: Point,
        content: impl FnOnce(&mut DisplayList) -> T,
    ) -> OrreryResult<T> {
        let (transform, opacity) = self.style(frame, origin)?;
        Ok(dl.group(transform, opacity, content))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/components/transition.rs"]
mod tests;
