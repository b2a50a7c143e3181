use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::backend::FrameRGBA;

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
    /// Mixed narration, when the range has any.
    pub audio: Option<AudioInputConfig>,
}

/// Raw interleaved `f32le` PCM file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioInputConfig {
    pub path: PathBuf,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called in strictly increasing [`FrameIndex`] order within the rendered range.
pub trait FrameSink: Send {
    /// Called once before any frame is pushed.
    fn begin(&mut self, cfg: SinkConfig) -> OrreryResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> OrreryResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> OrreryResult<()>;
}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<FrameRGBA> {
        self.frames.into_iter().map(|(_, f)| f).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> OrreryResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> OrreryResult<()> {
        check_order(self.frames.last().map(|(i, _)| *i), idx)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> OrreryResult<()> {
        self.finished = true;
        Ok(())
    }
}

pub(crate) fn check_order(last: Option<FrameIndex>, idx: FrameIndex) -> OrreryResult<()> {
    match last {
        Some(last) if idx.0 <= last.0 => Err(OrreryError::evaluation(format!(
            "sink received frame {} after frame {}",
            idx.0, last.0
        ))),
        _ => Ok(()),
    }
}

/// Composite premultiplied RGBA8 over an opaque background color.
pub(crate) fn flatten_premul_over_bg_to_opaque_rgba8(
    dst: &mut [u8],
    src_premul: &[u8],
    bg_rgba: [u8; 4],
) -> OrreryResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(OrreryError::validation(
            "flatten expects equal-length rgba8 buffers",
        ));
    }
    let bg = [bg_rgba[0], bg_rgba[1], bg_rgba[2]].map(u16::from);

    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let inv = 255 - u16::from(s[3]);
        for c in 0..3 {
            d[c] = (u16::from(s[c]) + mul_div255_u16(bg[c], inv)).min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> OrreryResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
