//! Narration segments aligned to the scene timeline.
//!
//! Each scene carries one spoken narration recording starting at the scene's first frame. The
//! segment occupies exactly the scene range, so audio is cut at the scene boundary.

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::timeline::sequence::{SceneId, Timeline};

const NARRATION_TEXT: [&str; 5] = [
    "Welcome to our solar system. At the center, the Sun radiates powerful energy, holding all \
     planets in its gravitational embrace. This fusion-powered star has illuminated our cosmic \
     neighborhood for over four and a half billion years.",
    "Our Sun is a magnificent star. These powerful solar flares and coronal mass ejections \
     release immense energy into space, creating the solar wind that shapes the entire \
     heliosphere.",
    "The inner planets - Mercury, Venus, Earth, and Mars - are rocky worlds close to the Sun. \
     Earth, our home, stands out with its abundant water and life-sustaining atmosphere. Mars, \
     the red planet, shows evidence of ancient rivers and lakes.",
    "Beyond the asteroid belt lie the gas giants. Jupiter, the largest planet, features its \
     Great Red Spot - a storm larger than Earth itself. Saturn's spectacular rings, made of ice \
     and rock, stretch over 280,000 kilometers in diameter.",
    "As we zoom out, we see the full scale of our cosmic neighborhood. The Sun's gravitational \
     influence extends far beyond Neptune to the Kuiper Belt and Oort Cloud. This is our tiny \
     oasis in the vast expanse of space - a pale blue dot in an infinite cosmos.",
];

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NarrationSegment {
    pub id: String,
    pub scene_id: SceneId,
    pub text: &'static str,
    /// Audio file name relative to the assets directory.
    pub audio: String,
    pub range: FrameRange,
}

impl NarrationSegment {
    pub fn start(&self) -> FrameIndex {
        self.range.start
    }

    pub fn end(&self) -> FrameIndex {
        self.range.end
    }

    pub fn duration(&self) -> u64 {
        self.range.len_frames()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct NarrationTrack {
    segments: Vec<NarrationSegment>,
}

impl NarrationTrack {
    /// One segment per scene of `timeline`, spanning the scene range.
    pub fn for_timeline(timeline: &Timeline) -> Self {
        let segments = timeline
            .slots()
            .iter()
            .map(|slot| {
                let n = slot.scene.narration_number();
                NarrationSegment {
                    id: format!("scene{n}-narration"),
                    scene_id: slot.scene,
                    text: NARRATION_TEXT[(n - 1) as usize],
                    audio: format!("scene{n}-narration.m4a"),
                    range: slot.range,
                }
            })
            .collect();
        Self { segments }
    }

    /// Build from explicit segments (checked with [`NarrationTrack::validate`]).
    pub fn from_segments(segments: Vec<NarrationSegment>) -> OrreryResult<Self> {
        let track = Self { segments };
        track.validate()?;
        Ok(track)
    }

    pub fn segments(&self) -> &[NarrationSegment] {
        &self.segments
    }

    pub fn segment_for_scene(&self, scene: SceneId) -> Option<&NarrationSegment> {
        self.segments.iter().find(|s| s.scene_id == scene)
    }

    /// Start frame of the scene's narration, `0` when the scene has none.
    pub fn segment_start(&self, scene: SceneId) -> FrameIndex {
        self.segment_for_scene(scene)
            .map(|s| s.start())
            .unwrap_or(FrameIndex(0))
    }

    /// Global frame relative to the scene's narration start.
    pub fn scene_frame(&self, global: FrameIndex, scene: SceneId) -> i64 {
        global.0 as i64 - self.segment_start(scene).0 as i64
    }

    pub fn segment_at(&self, frame: FrameIndex) -> Option<&NarrationSegment> {
        self.segments.iter().find(|s| s.range.contains(frame))
    }

    /// Sum of all segment durations.
    pub fn total_duration(&self) -> u64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Segments must be non-empty, ordered by start and must not overlap.
    pub fn validate(&self) -> OrreryResult<()> {
        for seg in &self.segments {
            if seg.range.is_empty() {
                return Err(OrreryError::validation(format!(
                    "narration segment '{}' is empty",
                    seg.id
                )));
            }
        }
        for pair in self.segments.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if b.start() < a.start() {
                return Err(OrreryError::validation(format!(
                    "narration segment '{}' starts before '{}'",
                    b.id, a.id
                )));
            }
            if b.start() < a.end() {
                return Err(OrreryError::validation(format!(
                    "narration segments '{}' and '{}' overlap",
                    a.id, b.id
                )));
            }
        }
        Ok(())
    }

    /// [`NarrationTrack::validate`], plus every segment names a scene of `timeline` and fits
    /// inside that scene's range.
    pub fn validate_against(&self, timeline: &Timeline) -> OrreryResult<()> {
        self.validate()?;
        for seg in &self.segments {
            let scene_range = timeline.range_of(seg.scene_id).ok_or_else(|| {
                OrreryError::validation(format!(
                    "narration segment '{}' refers to scene '{}' which is not on the timeline",
                    seg.id, seg.scene_id
                ))
            })?;
            if seg.start() < scene_range.start || seg.end() > scene_range.end {
                return Err(OrreryError::validation(format!(
                    "narration segment '{}' ({}..{}) exceeds scene '{}' ({}..{})",
                    seg.id,
                    seg.start().0,
                    seg.end().0,
                    seg.scene_id,
                    scene_range.start.0,
                    scene_range.end.0
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/narration.rs"]
mod tests;
