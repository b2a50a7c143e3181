use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::audio::media::{AudioPcm, MIX_SAMPLE_RATE, decode_audio_f32_stereo};
use crate::audio::mix::frame_to_sample;
use crate::data::narration::{NarrationSegment, NarrationTrack};
use crate::foundation::core::{Fps, FrameRange};
use crate::foundation::error::{OrreryError, OrreryResult};

/// A narration segment paired with the file that holds its recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrationAsset {
    pub segment_id: String,
    pub path: PathBuf,
}

/// Decoded recording for one narration segment.
#[derive(Clone, Debug)]
pub struct NarrationSource {
    pub segment_id: String,
    pub pcm: Arc<AudioPcm>,
}

/// Playback levels applied to every narration segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NarrationLevels {
    pub volume: f32,
    pub fade_in_sec: f64,
    pub fade_out_sec: f64,
}

impl Default for NarrationLevels {
    fn default() -> Self {
        Self {
            volume: 1.0,
            fade_in_sec: 0.0,
            fade_out_sec: 0.0,
        }
    }
}

/// One scheduled contribution in the sample space of the render range.
#[derive(Clone, Debug)]
pub struct AudioSegment {
    pub segment_id: String,
    pub timeline_start_sample: u64,
    pub timeline_end_sample: u64,
    /// Offset into the recording where playback starts.
    pub source_start_sec: f64,
    /// Playback stops here even if the recording is longer.
    pub source_end_sec: Option<f64>,
    /// Length of the whole narration segment; fade-out ends here.
    pub segment_len_sec: f64,
    pub volume: f32,
    pub fade_in_sec: f64,
    pub fade_out_sec: f64,
    pub source: Arc<AudioPcm>,
}

/// Audio plan for a frame range, sample 0 being the first frame of the range.
#[derive(Clone, Debug)]
pub struct AudioManifest {
    pub sample_rate: u32,
    pub channels: u16,
    pub total_samples: u64,
    pub segments: Vec<AudioSegment>,
}

/// Map every segment to `<assets_dir>/<audio>`; a missing file is an asset error.
pub fn resolve_narration_assets(
    track: &NarrationTrack,
    assets_dir: &Path,
) -> OrreryResult<Vec<NarrationAsset>> {
    track
        .segments()
        .iter()
        .map(|seg| {
            let path = assets_dir.join(&seg.audio);
            if !path.is_file() {
                return Err(OrreryError::missing_asset(path));
            }
            Ok(NarrationAsset {
                segment_id: seg.id.clone(),
                path,
            })
        })
        .collect()
}

/// Resolve and decode every narration recording of `track` at [`MIX_SAMPLE_RATE`].
#[tracing::instrument(skip(track))]
pub fn load_narration(
    track: &NarrationTrack,
    assets_dir: &Path,
) -> OrreryResult<Vec<NarrationSource>> {
    resolve_narration_assets(track, assets_dir)?
        .into_iter()
        .map(|asset| {
            let pcm = decode_audio_f32_stereo(&asset.path, MIX_SAMPLE_RATE)?;
            tracing::debug!(
                segment = %asset.segment_id,
                secs = pcm.duration_secs(),
                "decoded narration"
            );
            Ok(NarrationSource {
                segment_id: asset.segment_id,
                pcm: Arc::new(pcm),
            })
        })
        .collect()
}

/// Schedule the narration segments that intersect `range`.
///
/// A segment entered mid-way starts its recording at the matching offset; playback is cut at the
/// segment end so narration never bleeds into the next scene.
pub fn build_audio_manifest(
    fps: Fps,
    track: &NarrationTrack,
    sources: &[NarrationSource],
    range: FrameRange,
    levels: NarrationLevels,
) -> OrreryResult<AudioManifest> {
    if range.is_empty() {
        return Err(OrreryError::validation(
            "audio manifest range must be non-empty",
        ));
    }

    let sample_rate = MIX_SAMPLE_RATE;
    let mut segments = Vec::new();
    for seg in track.segments() {
        let Some(active) = seg.range.intersect(range) else {
            continue;
        };
        let source = source_for(sources, seg)?;
        let to_sample = |f: u64| frame_to_sample(f - range.start.0, fps, sample_rate);
        segments.push(AudioSegment {
            segment_id: seg.id.clone(),
            timeline_start_sample: to_sample(active.start.0),
            timeline_end_sample: to_sample(active.end.0),
            source_start_sec: fps.frames_to_secs(active.start.0 - seg.start().0),
            source_end_sec: Some(fps.frames_to_secs(seg.duration())),
            segment_len_sec: fps.frames_to_secs(seg.duration()),
            volume: levels.volume,
            fade_in_sec: levels.fade_in_sec,
            fade_out_sec: levels.fade_out_sec,
            source,
        });
    }

    Ok(AudioManifest {
        sample_rate,
        channels: 2,
        total_samples: frame_to_sample(range.len_frames(), fps, sample_rate),
        segments,
    })
}

fn source_for(
    sources: &[NarrationSource],
    seg: &NarrationSegment,
) -> OrreryResult<Arc<AudioPcm>> {
    sources
        .iter()
        .find(|s| s.segment_id == seg.id)
        .map(|s| s.pcm.clone())
        .ok_or_else(|| {
            OrreryError::validation(format!(
                "no decoded audio for narration segment '{}'",
                seg.id
            ))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/manifest.rs"]
mod tests;
