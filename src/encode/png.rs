use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{
    FrameSink, SinkConfig, check_order, flatten_premul_over_bg_to_opaque_rgba8,
};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::foundation::math::premultiply_rgba8;
use crate::render::backend::FrameRGBA;

/// Encoding of still frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StillFormat {
    #[default]
    Png,
    Jpeg,
}

impl StillFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    /// Format implied by a file extension (`png`, `jpg`, `jpeg`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// Flatten `frame` over `bg_rgba` and write it as one still image.
pub fn write_still(
    frame: &FrameRGBA,
    path: &Path,
    format: StillFormat,
    bg_rgba: [u8; 4],
) -> OrreryResult<()> {
    let mut opaque = vec![0u8; frame.data.len()];
    if frame.premultiplied {
        flatten_premul_over_bg_to_opaque_rgba8(&mut opaque, &frame.data, bg_rgba)?;
    } else {
        let premul = premultiply_rgba8(&frame.data);
        flatten_premul_over_bg_to_opaque_rgba8(&mut opaque, &premul, bg_rgba)?;
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, opaque)
        .ok_or_else(|| OrreryError::validation("frame data does not match width*height*4"))?;
    match format {
        StillFormat::Png => img.save_with_format(path, image::ImageFormat::Png),
        StillFormat::Jpeg => image::DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .save_with_format(path, image::ImageFormat::Jpeg),
    }
    .with_context(|| format!("failed to write still '{}'", path.display()))?;
    Ok(())
}

/// One image file per frame: `<dir>/<prefix>-<frame:05>.<ext>`.
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    format: StillFormat,
    overwrite: bool,
    bg_rgba: [u8; 4],
    last_idx: Option<FrameIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>, format: StillFormat) -> Self {
        Self {
            dir: dir.into(),
            prefix: "frame".to_owned(),
            format,
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
            last_idx: None,
            written: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_background(mut self, bg_rgba: [u8; 4]) -> Self {
        self.bg_rgba = bg_rgba;
        self
    }

    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!(
            "{}-{:05}.{}",
            self.prefix,
            idx.0,
            self.format.extension()
        ))
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> OrreryResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create '{}'", self.dir.display()))?;
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> OrreryResult<()> {
        check_order(self.last_idx, idx)?;
        self.last_idx = Some(idx);
        let path = self.path_for(idx);
        if !self.overwrite && path.exists() {
            return Err(OrreryError::validation(format!(
                "output file '{}' already exists",
                path.display()
            )));
        }
        write_still(frame, &path, self.format, self.bg_rgba)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> OrreryResult<()> {
        tracing::debug!(frames = self.written.len(), dir = %self.dir.display(), "wrote stills");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
