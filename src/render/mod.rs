//! Rasterization of evaluated display lists and range rendering.

pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod pipeline;
pub(crate) mod text;
