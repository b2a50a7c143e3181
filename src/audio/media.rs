use std::path::Path;

use crate::foundation::error::{OrreryError, OrreryResult};

/// Sample rate of the mixed narration track.
pub const MIX_SAMPLE_RATE: u32 = 48_000;

/// Decoded interleaved `f32` PCM.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioPcm {
    pub sample_rate: u32,
    pub channels: u16,
    pub interleaved_f32: Vec<f32>,
}

impl AudioPcm {
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.interleaved_f32.len() / usize::from(self.channels)
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / f64::from(self.sample_rate)
    }
}

/// Decode any audio file the system `ffmpeg` understands to stereo `f32` at `sample_rate`.
pub fn decode_audio_f32_stereo(path: &Path, sample_rate: u32) -> OrreryResult<AudioPcm> {
    if !path.exists() {
        return Err(OrreryError::missing_asset(path));
    }
    let out = std::process::Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(path)
        .args([
            "-vn",
            "-f",
            "f32le",
            "-acodec",
            "pcm_f32le",
            "-ac",
            "2",
            "-ar",
            &sample_rate.to_string(),
            "pipe:1",
        ])
        .output()
        .map_err(|e| {
            OrreryError::evaluation(format!("failed to run ffmpeg for audio decode: {e}"))
        })?;

    if !out.status.success() {
        let msg = String::from_utf8_lossy(&out.stderr);
        return Err(OrreryError::evaluation(format!(
            "ffmpeg audio decode failed for '{}': {}",
            path.display(),
            msg.trim()
        )));
    }

    Ok(AudioPcm {
        sample_rate,
        channels: 2,
        interleaved_f32: pcm_from_f32le(&out.stdout)?,
    })
}

pub(crate) fn pcm_from_f32le(bytes: &[u8]) -> OrreryResult<Vec<f32>> {
    if !bytes.len().is_multiple_of(4) {
        return Err(OrreryError::evaluation(
            "decoded audio byte length is not aligned to f32 samples",
        ));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

// decode_audio_f32_stereo shells out to ffmpeg; only the pure helpers are unit tested.
#[cfg(test)]
#[path = "../../tests/unit/audio/media.rs"]
mod tests;
