use crate::foundation::core::FrameIndex;
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::scene::model::DisplayList;
use crate::scene::scenes::SceneBook;
use crate::timeline::registry::CompositionSpec;
use crate::timeline::sequence::{SceneCursor, Timeline};

#[derive(Clone, Debug, serde::Serialize)]
/// One evaluated frame: where it sits on the timeline and what it draws.
pub struct EvaluatedFrame {
    /// Global frame index.
    pub frame: FrameIndex,
    /// Active scene and scene-local frame.
    pub cursor: SceneCursor,
    /// Nodes in painter's order, in the 1920x1080 design space.
    pub display_list: DisplayList,
}

/// Stateless frame evaluator for one composition.
///
/// Scene layouts are prepared once; [`Evaluator::eval_frame`] only takes `&self`, so a single
/// evaluator is shared by all render workers.
#[derive(Clone, Debug)]
pub struct Evaluator {
    timeline: Timeline,
    book: SceneBook,
}

impl Evaluator {
    pub fn new(spec: &CompositionSpec) -> Self {
        Self {
            timeline: spec.timeline.clone(),
            book: SceneBook::new(),
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Map `frame` to its scene and evaluate that scene at the local frame.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn eval_frame(&self, frame: FrameIndex) -> OrreryResult<EvaluatedFrame> {
        let cursor = self.timeline.locate(frame).ok_or_else(|| {
            OrreryError::evaluation(format!(
                "frame {} is outside the timeline (duration {})",
                frame.0,
                self.timeline.duration()
            ))
        })?;
        let display_list =
            self.book
                .evaluate(cursor.scene, cursor.local, self.timeline.fps().as_f64())?;
        Ok(EvaluatedFrame {
            frame,
            cursor,
            display_list,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
