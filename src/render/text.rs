//! Single-line text sprites rasterized through `usvg`/`resvg` with the system font database.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::Context as _;
use vello_cpu::peniko::color::PremulRgba8;

use crate::foundation::core::{Rgba8, Vec2};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::scene::model::TextAnchor;

const FONT_FAMILY: &str = "Arial, Helvetica, 'DejaVu Sans', sans-serif";
const MAX_CACHED: usize = 512;
const MAX_SPRITE_DIM: u32 = 8_192;

/// What a sprite shows, independent of where it is drawn.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TextKey {
    pub text: String,
    /// Font size in 1/64 px.
    pub size_q: u32,
    pub bold: bool,
    pub anchor: TextAnchor,
    pub color: Rgba8,
    /// Raster scale in 1/8 steps.
    pub scale_q: u32,
}

impl TextKey {
    pub fn new(
        text: &str,
        size: f64,
        bold: bool,
        anchor: TextAnchor,
        color: Rgba8,
        scale: f64,
    ) -> Self {
        Self {
            text: text.to_owned(),
            size_q: (size.max(0.0) * 64.0).round() as u32,
            bold,
            anchor,
            color,
            scale_q: (scale.clamp(0.125, 8.0) * 8.0).round() as u32,
        }
    }

    pub fn size(&self) -> f64 {
        f64::from(self.size_q) / 64.0
    }

    pub fn scale(&self) -> f64 {
        f64::from(self.scale_q) / 8.0
    }
}

/// Rasterized text plus the offset of its top-left corner from the text origin, in text units
/// before raster scaling.
#[derive(Clone)]
pub(crate) struct TextSprite {
    pub width: u32,
    pub height: u32,
    pub image: vello_cpu::Image,
    pub offset: Vec2,
}

/// Box layout: the baseline sits at `1.2 * size`, the anchor point is padded half a size from
/// the box edge for `Start`/`End`.
pub(crate) fn sprite_box(key: &TextKey) -> (f64, f64, Vec2) {
    let size = key.size();
    let chars = key.text.chars().count() as f64;
    let w = size * (0.68 * chars + 1.0);
    let h = size * 1.6;
    let anchor_x = match key.anchor {
        TextAnchor::Start => size * 0.5,
        TextAnchor::Middle => w / 2.0,
        TextAnchor::End => w - size * 0.5,
    };
    (w, h, Vec2::new(anchor_x, size * 1.2))
}

pub(crate) fn sprite_svg(key: &TextKey) -> String {
    let (w, h, anchor) = sprite_box(key);
    let anchor_attr = match key.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.3}" height="{h:.3}" viewBox="0 0 {w:.3} {h:.3}">"#
    );
    let _ = write!(
        svg,
        r##"<text x="{:.3}" y="{:.3}" font-family="{FONT_FAMILY}" font-size="{:.3}" font-weight="{}" text-anchor="{anchor_attr}" fill="#{:02x}{:02x}{:02x}">{}</text></svg>"##,
        anchor.x,
        anchor.y,
        key.size(),
        if key.bold { "bold" } else { "normal" },
        key.color.r,
        key.color.g,
        key.color.b,
        escape_xml(&key.text),
    );
    svg
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Rasterizes and caches text sprites. One per render worker.
pub(crate) struct TextRasterizer {
    opts: usvg::Options<'static>,
    cache: HashMap<TextKey, Arc<TextSprite>>,
}

impl TextRasterizer {
    pub fn new(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self {
            opts: usvg::Options {
                fontdb,
                ..Default::default()
            },
            cache: HashMap::new(),
        }
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn sprite(&mut self, key: &TextKey) -> OrreryResult<Arc<TextSprite>> {
        if let Some(s) = self.cache.get(key) {
            return Ok(s.clone());
        }
        if self.cache.len() >= MAX_CACHED {
            self.cache.clear();
        }
        let sprite = Arc::new(self.rasterize(key)?);
        self.cache.insert(key.clone(), sprite.clone());
        Ok(sprite)
    }

    fn rasterize(&self, key: &TextKey) -> OrreryResult<TextSprite> {
        let (w, h, anchor) = sprite_box(key);
        let scale = key.scale();
        let pw = ((w * scale).ceil() as u32).clamp(1, MAX_SPRITE_DIM);
        let ph = ((h * scale).ceil() as u32).clamp(1, MAX_SPRITE_DIM);

        let tree = usvg::Tree::from_data(sprite_svg(key).as_bytes(), &self.opts)
            .with_context(|| format!("parse text svg for '{}'", key.text))?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(pw, ph)
            .ok_or_else(|| OrreryError::evaluation("failed to allocate text pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(scale as f32, scale as f32),
            &mut pixmap.as_mut(),
        );
        Ok(TextSprite {
            width: pw,
            height: ph,
            image: premul_image(&pixmap.take(), pw, ph)?,
            offset: -anchor,
        })
    }
}

fn premul_image(bytes: &[u8], width: u32, height: u32) -> OrreryResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| OrreryError::evaluation("text sprite width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| OrreryError::evaluation("text sprite height exceeds u16"))?;
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

/// System fonts, loaded once and shared by every rasterizer.
pub(crate) fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: std::sync::OnceLock<Arc<usvg::fontdb::Database>> = std::sync::OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Arc::new(db)
    })
    .clone()
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
