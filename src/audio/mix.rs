use std::path::Path;

use anyhow::Context as _;

use crate::audio::manifest::{AudioManifest, AudioSegment};
use crate::foundation::core::Fps;
use crate::foundation::error::OrreryResult;

/// Sum every segment into one interleaved buffer of `manifest.total_samples` frames.
///
/// Sources are resampled linearly, scaled by volume and fades, and the sum is clamped to
/// `[-1, 1]`.
pub fn mix_manifest(manifest: &AudioManifest) -> Vec<f32> {
    let channels = usize::from(manifest.channels);
    let mut out = vec![0.0f32; manifest.total_samples as usize * channels];

    for seg in &manifest.segments {
        mix_segment(&mut out, manifest, seg);
    }

    for s in &mut out {
        *s = s.clamp(-1.0, 1.0);
    }
    out
}

fn mix_segment(out: &mut [f32], manifest: &AudioManifest, seg: &AudioSegment) {
    let len = seg
        .timeline_end_sample
        .saturating_sub(seg.timeline_start_sample);
    let src = &seg.source;
    let src_channels = usize::from(src.channels);
    let src_frames = src.frames();
    if len == 0 || src_frames == 0 || src.sample_rate == 0 {
        return;
    }
    let out_channels = usize::from(manifest.channels);
    let end = seg.timeline_end_sample.min(manifest.total_samples);

    for dst in seg.timeline_start_sample..end {
        let rel_sec = (dst - seg.timeline_start_sample) as f64 / f64::from(manifest.sample_rate);
        let src_sec = seg.source_start_sec + rel_sec;
        if seg.source_end_sec.is_some_and(|e| src_sec >= e) {
            break;
        }

        let pos = src_sec * f64::from(src.sample_rate);
        if !pos.is_finite() || pos < 0.0 {
            break;
        }
        let f0 = pos.floor() as usize;
        if f0 >= src_frames {
            break;
        }
        let f1 = (f0 + 1).min(src_frames - 1);
        let frac = (pos - f0 as f64) as f32;
        let lerp = |ch: usize| {
            let a = src.interleaved_f32[f0 * src_channels + ch];
            let b = src.interleaved_f32[f1 * src_channels + ch];
            a + (b - a) * frac
        };
        let (l, r) = if src_channels == 1 {
            let v = lerp(0);
            (v, v)
        } else {
            (lerp(0), lerp(1))
        };

        let gain = fade_gain(seg, src_sec) * seg.volume;
        let i = dst as usize * out_channels;
        out[i] += l * gain;
        if out_channels > 1 {
            out[i + 1] += r * gain;
        }
    }
}

/// Fades are anchored to the whole narration segment, not to the scheduled slice of it.
fn fade_gain(seg: &AudioSegment, src_sec: f64) -> f32 {
    let mut gain = 1.0f32;
    if seg.fade_in_sec > 0.0 {
        gain *= (src_sec / seg.fade_in_sec).clamp(0.0, 1.0) as f32;
    }
    if seg.fade_out_sec > 0.0 {
        let rem = (seg.segment_len_sec - src_sec).max(0.0);
        gain *= (rem / seg.fade_out_sec).clamp(0.0, 1.0) as f32;
    }
    gain
}

/// Write interleaved samples as raw little-endian `f32`.
pub fn write_mix_to_f32le_file(samples: &[f32], out_path: &Path) -> OrreryResult<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!(
                "failed to create audio mix directory '{}'",
                parent.display()
            )
        })?;
    }
    let bytes = samples
        .iter()
        .flat_map(|s| s.to_le_bytes())
        .collect::<Vec<u8>>();
    std::fs::write(out_path, bytes)
        .with_context(|| format!("failed to write mixed audio '{}'", out_path.display()))?;
    Ok(())
}

/// Nearest sample index for a frame offset at `sample_rate`.
pub fn frame_to_sample(frame_delta: u64, fps: Fps, sample_rate: u32) -> u64 {
    let num = u128::from(frame_delta) * u128::from(sample_rate) * u128::from(fps.den);
    let den = u128::from(fps.num);
    ((num + den / 2) / den) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/audio/mix.rs"]
mod tests;
