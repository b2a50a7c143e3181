//! Render settings loaded from JSON.
//!
//! Every field has a default, so `{}` is a valid file; unknown keys are rejected.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::audio::manifest::NarrationLevels;
use crate::encode::ffmpeg::FfmpegSinkOpts;
use crate::encode::png::StillFormat;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::render::pipeline::RenderSessionOpts;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Format of stills and image sequences.
    pub image_format: StillFormat,
    pub overwrite: bool,
    pub video_codec: String,
    pub audio_codec: String,
    /// Skip narration entirely.
    pub muted: bool,
    /// Render worker threads; `1` renders on the calling thread.
    pub concurrency: usize,
    pub chunk_size: usize,
    /// Directory holding the narration recordings.
    pub assets_dir: PathBuf,
    /// `#RRGGBB` used to flatten frames for encoding.
    pub background: String,
    pub narration_volume: f32,
    pub narration_fade_secs: f64,
    /// Output resolution; `None` keeps 1920x1080.
    pub canvas: Option<Canvas>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_format: StillFormat::Jpeg,
            overwrite: true,
            video_codec: "libx264".to_owned(),
            audio_codec: "aac".to_owned(),
            muted: false,
            concurrency: 4,
            chunk_size: 64,
            assets_dir: PathBuf::from("public"),
            background: "#000000".to_owned(),
            narration_volume: 1.0,
            narration_fade_secs: 0.0,
            canvas: None,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(s: &str) -> OrreryResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| OrreryError::serde(format!("invalid render config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> OrreryResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> OrreryResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| OrreryError::serde(e.to_string()))
    }

    pub fn validate(&self) -> OrreryResult<()> {
        if self.concurrency == 0 {
            return Err(OrreryError::validation("concurrency must be >= 1"));
        }
        if self.chunk_size == 0 {
            return Err(OrreryError::validation("chunk_size must be >= 1"));
        }
        if self.video_codec.trim().is_empty() || self.audio_codec.trim().is_empty() {
            return Err(OrreryError::validation("codecs must be non-empty"));
        }
        if !self.narration_volume.is_finite() || self.narration_volume < 0.0 {
            return Err(OrreryError::validation(
                "narration_volume must be finite and >= 0",
            ));
        }
        if !self.narration_fade_secs.is_finite() || self.narration_fade_secs < 0.0 {
            return Err(OrreryError::validation(
                "narration_fade_secs must be finite and >= 0",
            ));
        }
        self.background_rgba()?;
        Ok(())
    }

    pub fn background_rgba(&self) -> OrreryResult<Rgba8> {
        Rgba8::from_hex(&self.background)
    }

    pub fn narration_levels(&self) -> NarrationLevels {
        NarrationLevels {
            volume: self.narration_volume,
            fade_in_sec: self.narration_fade_secs,
            fade_out_sec: self.narration_fade_secs,
        }
    }

    pub fn session_opts(&self) -> RenderSessionOpts {
        RenderSessionOpts {
            parallel: self.concurrency > 1,
            chunk_size: self.chunk_size,
            threads: Some(self.concurrency),
            enable_audio: !self.muted,
            narration: self.narration_levels(),
            ..RenderSessionOpts::default()
        }
    }

    pub fn ffmpeg_opts(&self, out_path: impl Into<PathBuf>) -> OrreryResult<FfmpegSinkOpts> {
        Ok(FfmpegSinkOpts {
            out_path: out_path.into(),
            overwrite: self.overwrite,
            bg_rgba: self.background_rgba()?.to_array(),
            video_codec: self.video_codec.clone(),
            audio_codec: self.audio_codec.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
