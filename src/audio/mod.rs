//! Narration audio: asset lookup, decoding and mixing into one PCM track per render range.

pub(crate) mod manifest;
pub(crate) mod media;
pub(crate) mod mix;
