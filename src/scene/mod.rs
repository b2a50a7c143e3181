//! Frame-driven visual components and the scenes built from them.

pub(crate) mod components;
pub(crate) mod model;
pub(crate) mod scenes;
