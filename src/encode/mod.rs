//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order; see [`crate::RenderSession::render_range`].

/// `ffmpeg`-based MP4 output.
pub(crate) mod ffmpeg;
/// Still image sequences.
pub(crate) mod png;
/// Sink contract and the in-memory sink.
pub(crate) mod sink;
