//! Style computation per visual element.
//!
//! Each component is a pure function of the scene-local frame and its parameters that appends
//! nodes to a [`DisplayList`](crate::scene::model::DisplayList). Coordinates are in the
//! 1920x1080 design space.

use crate::foundation::core::Point;

pub(crate) mod annotation;
pub(crate) mod backdrop;
pub(crate) mod camera;
pub(crate) mod dust;
pub(crate) mod label;
pub(crate) mod lens_flare;
pub(crate) mod orbit;
pub(crate) mod planet;
pub(crate) mod starfield;
pub(crate) mod sun;
pub(crate) mod title;
pub(crate) mod transition;

/// Center of the design canvas; the Sun sits here in every orbital scene.
pub const CENTER: Point = Point::new(960.0, 540.0);
