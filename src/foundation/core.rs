use crate::foundation::error::{OrreryError, OrreryResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> OrreryResult<Self> {
        if start.0 > end.0 {
            return Err(OrreryError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    pub fn intersect(self, other: FrameRange) -> Option<FrameRange> {
        let start = self.start.0.max(other.start.0);
        let end = self.end.0.min(other.end.0);
        if start >= end {
            return None;
        }
        Some(FrameRange {
            start: FrameIndex(start),
            end: FrameIndex(end),
        })
    }

    /// Parse `A..B` (end exclusive).
    pub fn parse(s: &str) -> OrreryResult<Self> {
        let (a, b) = s
            .split_once("..")
            .ok_or_else(|| OrreryError::validation(format!("frame range '{s}' must be 'A..B'")))?;
        let parse = |v: &str| {
            v.trim().parse::<u64>().map_err(|e| {
                OrreryError::validation(format!("invalid frame number '{v}' in '{s}': {e}"))
            })
        };
        Self::new(FrameIndex(parse(a)?), FrameIndex(parse(b)?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> OrreryResult<Self> {
        if den == 0 {
            return Err(OrreryError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(OrreryError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Reference 1080p canvas all scenes are laid out in.
    pub const DESIGN: Canvas = Canvas {
        width: 1920,
        height: 1080,
    };

    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`.
    pub const fn rgb_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> OrreryResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(OrreryError::validation(format!(
                "color '{s}' must be #RRGGBB or #RRGGBBAA"
            )));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| OrreryError::validation(format!("invalid color '{s}': {e}")))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Subtract `round(2.55 * percent)` from every channel, saturating at zero.
    pub fn darken(self, percent: f64) -> Self {
        let amt = (2.55 * percent).round();
        let ch = |c: u8| (f64::from(c) - amt).clamp(0.0, 255.0) as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
            a: self.a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
