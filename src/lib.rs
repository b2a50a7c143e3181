//! Orrery renders a narrated tour of the solar system, frame by frame.
//!
//! Every pixel is a pure function of the frame index:
//!
//! - a [`CompositionRegistry`] names the renderable compositions (the full story, one preview per
//!   scene and an audio check card)
//! - the [`Timeline`] maps a global frame to a scene and its local frame
//! - the scene evaluates to a [`DisplayList`] which [`CpuBackend`] rasterizes
//! - a [`RenderSession`] streams a frame range, with narration mixed in, into a [`FrameSink`]
#![forbid(unsafe_code)]

pub(crate) mod animation;
pub(crate) mod audio;
pub(crate) mod config;
pub(crate) mod data;
pub(crate) mod encode;
pub(crate) mod eval;
pub(crate) mod foundation;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod timeline;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{OrreryError, OrreryResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interp::{
    Extrapolate, InterpolateOpts, interpolate, interpolate_clamped, oscillate, remap_sine,
};
pub use crate::animation::rng::Rng64;
pub use crate::animation::spring::{SpringConfig, SpringOpts, measure_spring, spring};

pub use crate::timeline::registry::{CompositionKind, CompositionRegistry, CompositionSpec, FPS};
pub use crate::timeline::sequence::{SceneCursor, SceneId, SceneSlot, Timeline};

pub use crate::data::bodies::{BodyKind, CelestialBody, body, body_by_id, planets, solar_system};
pub use crate::data::narration::{NarrationSegment, NarrationTrack};

pub use crate::scene::model::{DisplayList, DrawNode, Shape, TextAnchor};
pub use crate::scene::scenes::SceneBook;

pub use crate::eval::evaluator::{EvaluatedFrame, Evaluator};

pub use crate::render::backend::{FrameRGBA, RenderBackend};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::pipeline::{
    RenderSession, RenderSessionOpts, RenderStats, narration_assets_present, render_frame,
};

pub use crate::audio::manifest::{
    AudioManifest, AudioSegment, NarrationAsset, NarrationLevels, NarrationSource,
    build_audio_manifest, load_narration, resolve_narration_assets,
};
pub use crate::audio::media::{AudioPcm, MIX_SAMPLE_RATE, decode_audio_f32_stereo};
pub use crate::audio::mix::{frame_to_sample, mix_manifest, write_mix_to_f32le_file};

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, StillFormat, write_still};
pub use crate::encode::sink::{
    AudioInputConfig, FrameSink, InMemorySink, SinkConfig, ensure_parent_dir,
};

pub use crate::config::settings::RenderConfig;
