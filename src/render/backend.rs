use crate::foundation::error::OrreryResult;
use crate::scene::model::DisplayList;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by [`crate::CpuBackend`] are premultiplied alpha; the flag makes that explicit
/// at sink boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Byte length of a tightly packed `width` x `height` RGBA8 buffer.
    pub fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 4
    }

    /// Straight-alpha RGBA8 pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px: [u8; 4] = self.data.get(i..i + 4)?.try_into().ok()?;
        if !self.premultiplied || px[3] == 0 || px[3] == 255 {
            return Some(px);
        }
        let a = u16::from(px[3]);
        let un = |c: u8| ((u16::from(c) * 255 + a / 2) / a).min(255) as u8;
        Some([un(px[0]), un(px[1]), un(px[2]), px[3]])
    }
}

/// Something that turns an evaluated display list into pixels.
pub trait RenderBackend {
    fn render(&mut self, list: &DisplayList) -> OrreryResult<FrameRGBA>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
