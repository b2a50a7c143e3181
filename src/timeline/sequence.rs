//! Global frame to scene-local frame mapping.
//!
//! A [`Timeline`] is an ordered list of scenes laid end to end. Scene `k` occupies the half-open
//! range `[start_k, start_k + duration_k)` where `start_k` is the sum of all earlier durations,
//! and sees `local = global - start_k`.

use std::fmt;

use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{OrreryError, OrreryResult};

/// Scenes known to the renderer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SceneId {
    Scene1,
    Scene2,
    Scene3,
    Scene4,
    Scene5,
    /// Narration check card playing the first narration track.
    AudioCheck,
}

impl SceneId {
    /// The five scenes of the full video, in play order.
    pub const STORY: [SceneId; 5] = [
        SceneId::Scene1,
        SceneId::Scene2,
        SceneId::Scene3,
        SceneId::Scene4,
        SceneId::Scene5,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scene1 => "Scene1",
            Self::Scene2 => "Scene2",
            Self::Scene3 => "Scene3",
            Self::Scene4 => "Scene4",
            Self::Scene5 => "Scene5",
            Self::AudioCheck => "AudioCheck",
        }
    }

    pub fn parse(s: &str) -> OrreryResult<Self> {
        [Self::AudioCheck]
            .into_iter()
            .chain(Self::STORY)
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OrreryError::validation(format!("unknown scene '{s}'")))
    }

    /// Scene length in seconds.
    pub fn seconds(self) -> u64 {
        match self {
            Self::Scene1 | Self::AudioCheck => 14,
            Self::Scene2 | Self::Scene3 | Self::Scene4 | Self::Scene5 => 10,
        }
    }

    /// Index (1-based) of the narration recording that plays under this scene.
    pub fn narration_number(self) -> u32 {
        match self {
            Self::Scene1 | Self::AudioCheck => 1,
            Self::Scene2 => 2,
            Self::Scene3 => 3,
            Self::Scene4 => 4,
            Self::Scene5 => 5,
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scene placed on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneSlot {
    pub scene: SceneId,
    pub range: FrameRange,
}

/// Result of locating a global frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneCursor {
    /// Position of the scene in the timeline.
    pub index: usize,
    pub scene: SceneId,
    pub range: FrameRange,
    /// Frame relative to the scene start.
    pub local: u64,
}

impl SceneCursor {
    pub fn duration(&self) -> u64 {
        self.range.len_frames()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timeline {
    fps: Fps,
    slots: Vec<SceneSlot>,
}

impl Timeline {
    /// Concatenate `(scene, frames)` pairs in order.
    ///
    /// Zero-length scenes and repeated scene ids are rejected.
    pub fn from_durations(
        fps: Fps,
        scenes: impl IntoIterator<Item = (SceneId, u64)>,
    ) -> OrreryResult<Self> {
        let scenes = scenes.into_iter().collect::<Vec<_>>();
        if scenes.is_empty() {
            return Err(OrreryError::validation("timeline needs at least one scene"));
        }
        for (i, (scene, frames)) in scenes.iter().enumerate() {
            if *frames == 0 {
                return Err(OrreryError::validation(format!(
                    "scene '{scene}' has zero duration"
                )));
            }
            if scenes[..i].iter().any(|(other, _)| other == scene) {
                return Err(OrreryError::validation(format!(
                    "scene '{scene}' appears twice in the timeline"
                )));
            }
        }
        Ok(Self::concat(fps, scenes))
    }

    /// Concatenate scenes sized by [`SceneId::seconds`].
    pub fn from_scenes(fps: Fps, scenes: &[SceneId]) -> OrreryResult<Self> {
        Self::from_durations(
            fps,
            scenes
                .iter()
                .map(|&s| (s, fps.secs_to_frames_floor(s.seconds() as f64))),
        )
    }

    fn concat(fps: Fps, scenes: Vec<(SceneId, u64)>) -> Self {
        let mut start = 0u64;
        let slots = scenes
            .into_iter()
            .map(|(scene, frames)| {
                let range = FrameRange {
                    start: FrameIndex(start),
                    end: FrameIndex(start + frames),
                };
                start += frames;
                SceneSlot { scene, range }
            })
            .collect();
        Self { fps, slots }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn slots(&self) -> &[SceneSlot] {
        &self.slots
    }

    /// Total frames: the sum of every scene duration.
    pub fn duration(&self) -> u64 {
        self.slots.last().map(|s| s.range.end.0).unwrap_or(0)
    }

    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration())
    }

    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration()),
        }
    }

    /// Find the scene active at `frame`; `None` past the end.
    pub fn locate(&self, frame: FrameIndex) -> Option<SceneCursor> {
        let index = self.slots.partition_point(|s| s.range.end.0 <= frame.0);
        let slot = self.slots.get(index)?;
        Some(SceneCursor {
            index,
            scene: slot.scene,
            range: slot.range,
            local: frame.0 - slot.range.start.0,
        })
    }

    pub fn range_of(&self, scene: SceneId) -> Option<FrameRange> {
        self.slots
            .iter()
            .find(|s| s.scene == scene)
            .map(|s| s.range)
    }

    pub fn start_of(&self, scene: SceneId) -> Option<FrameIndex> {
        self.range_of(scene).map(|r| r.start)
    }

    /// `global - start(scene)`; negative before the scene starts.
    pub fn scene_frame(&self, global: FrameIndex, scene: SceneId) -> Option<i64> {
        self.start_of(scene)
            .map(|start| global.0 as i64 - start.0 as i64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
