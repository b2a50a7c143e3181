use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};

use rayon::prelude::*;

use crate::audio::manifest::{NarrationLevels, build_audio_manifest, load_narration};
use crate::audio::mix::{mix_manifest, write_mix_to_f32le_file};
use crate::data::narration::NarrationTrack;
use crate::encode::sink::{AudioInputConfig, FrameSink, SinkConfig};
use crate::eval::evaluator::Evaluator;
use crate::foundation::core::{Canvas, FrameIndex, FrameRange};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::cpu::CpuBackend;
use crate::timeline::registry::CompositionSpec;

/// Evaluate and rasterize one frame of `spec`.
pub fn render_frame(spec: &CompositionSpec, frame: FrameIndex) -> OrreryResult<FrameRGBA> {
    let eval = Evaluator::new(spec);
    let mut backend = CpuBackend::new(spec.canvas)?;
    let evaluated = eval.eval_frame(frame)?;
    backend.render(&evaluated.display_list)
}

/// Options controlling [`RenderSession::render_range`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSessionOpts {
    /// Render frames of a chunk on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames per chunk.
    pub chunk_size: usize,
    /// Worker threads; `None` uses the rayon default.
    pub threads: Option<usize>,
    /// Bounded capacity between the render loop and the encoder thread.
    pub channel_capacity: usize,
    /// Mix narration into the sink's audio input.
    pub enable_audio: bool,
    pub narration: NarrationLevels,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            channel_capacity: 4,
            enable_audio: true,
            narration: NarrationLevels::default(),
        }
    }
}

/// Range render counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    pub frames_rendered: u64,
    pub chunks: u64,
    /// Narration segments mixed into the audio track.
    pub audio_segments: u64,
}

/// Renderer for one composition: the scene layouts and narration track are prepared once, then
/// single frames or whole ranges are rendered from them.
pub struct RenderSession {
    spec: CompositionSpec,
    eval: Evaluator,
    narration: NarrationTrack,
    assets_root: PathBuf,
    opts: RenderSessionOpts,
    backend: CpuBackend,
}

impl RenderSession {
    pub fn new(
        spec: &CompositionSpec,
        assets_root: impl Into<PathBuf>,
        opts: RenderSessionOpts,
    ) -> OrreryResult<Self> {
        let narration = NarrationTrack::for_timeline(&spec.timeline);
        narration.validate_against(&spec.timeline)?;
        Ok(Self {
            backend: CpuBackend::new(spec.canvas)?,
            spec: spec.clone(),
            eval: Evaluator::new(spec),
            narration,
            assets_root: assets_root.into(),
            opts,
        })
    }

    pub fn spec(&self) -> &CompositionSpec {
        &self.spec
    }

    pub fn narration(&self) -> &NarrationTrack {
        &self.narration
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.eval
    }

    /// Render one frame, reusing the session backend.
    pub fn render_frame(&mut self, frame: FrameIndex) -> OrreryResult<FrameRGBA> {
        let evaluated = self.eval.eval_frame(frame)?;
        self.backend.render(&evaluated.display_list)
    }

    /// Render `range` and stream the frames into `sink`.
    ///
    /// The sink sees frames in strictly increasing order whether or not rendering is parallel.
    /// Narration intersecting the range is decoded, mixed once and handed to the sink as a raw
    /// PCM input.
    #[tracing::instrument(skip(self, sink), fields(comp = %self.spec.id))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> OrreryResult<RenderStats> {
        if range.is_empty() {
            return Err(OrreryError::validation("render range must be non-empty"));
        }
        if range.end.0 > self.spec.duration() {
            return Err(OrreryError::validation(format!(
                "render range {}..{} exceeds composition '{}' ({} frames)",
                range.start.0,
                range.end.0,
                self.spec.id,
                self.spec.duration()
            )));
        }

        let mut stats = RenderStats {
            frames_total: range.len_frames(),
            ..RenderStats::default()
        };
        let mut audio_tmp = TempFileGuard(None);
        let audio = if self.opts.enable_audio {
            self.mix_narration(range, &mut audio_tmp, &mut stats)?
        } else {
            None
        };
        let cfg = SinkConfig {
            width: self.spec.canvas.width,
            height: self.spec.canvas.height,
            fps: self.spec.fps,
            audio,
        };

        let chunk_size = normalized_chunk_size(self.opts.chunk_size).min(range.len_frames());
        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };
        let cap = self.opts.channel_capacity.max(1);
        let canvas = self.spec.canvas;
        let eval = &self.eval;
        let backend = &mut self.backend;

        let result = std::thread::scope(|scope| -> OrreryResult<()> {
            let (tx, rx) = mpsc::sync_channel::<(FrameIndex, Arc<FrameRGBA>)>(cap);
            let enc = scope.spawn(move || -> OrreryResult<()> {
                sink.begin(cfg)?;
                for (idx, frame) in rx {
                    sink.push_frame(idx, &frame)?;
                }
                sink.end()
            });

            let produced = (|| -> OrreryResult<()> {
                let mut start = range.start.0;
                while start < range.end.0 {
                    let end = (start + chunk_size).min(range.end.0);
                    let frames = match pool.as_ref() {
                        Some(pool) => render_chunk_parallel(pool, eval, canvas, start, end)?,
                        None => render_chunk_sequential(backend, eval, start, end)?,
                    };
                    tracing::debug!(start, end, "rendered chunk");
                    for (idx, frame) in frames {
                        tx.send((idx, frame)).map_err(|_| {
                            OrreryError::evaluation("encoder thread is not accepting frames")
                        })?;
                    }
                    stats.frames_rendered += end - start;
                    stats.chunks += 1;
                    start = end;
                }
                Ok(())
            })();

            drop(tx);
            let encoded = enc
                .join()
                .map_err(|_| OrreryError::evaluation("encoder thread panicked"))?;
            encoded?;
            produced
        });
        drop(audio_tmp);
        result?;

        tracing::info!(
            frames = stats.frames_rendered,
            audio_segments = stats.audio_segments,
            "render complete"
        );
        Ok(stats)
    }

    fn mix_narration(
        &self,
        range: FrameRange,
        tmp: &mut TempFileGuard,
        stats: &mut RenderStats,
    ) -> OrreryResult<Option<AudioInputConfig>> {
        let active = NarrationTrack::from_segments(
            self.narration
                .segments()
                .iter()
                .filter(|s| s.range.intersect(range).is_some())
                .cloned()
                .collect(),
        )?;
        if active.segments().is_empty() {
            return Ok(None);
        }
        let sources = load_narration(&active, &self.assets_root)?;
        let manifest =
            build_audio_manifest(self.spec.fps, &active, &sources, range, self.opts.narration)?;
        stats.audio_segments = manifest.segments.len() as u64;

        let path = temp_mix_path();
        write_mix_to_f32le_file(&mix_manifest(&manifest), &path)?;
        tmp.0 = Some(path.clone());
        Ok(Some(AudioInputConfig {
            path,
            sample_rate: manifest.sample_rate,
            channels: manifest.channels,
        }))
    }
}

fn render_chunk_sequential(
    backend: &mut CpuBackend,
    eval: &Evaluator,
    start: u64,
    end: u64,
) -> OrreryResult<Vec<(FrameIndex, Arc<FrameRGBA>)>> {
    (start..end)
        .map(|f| -> OrreryResult<(FrameIndex, Arc<FrameRGBA>)> {
            let evaluated = eval.eval_frame(FrameIndex(f))?;
            Ok((FrameIndex(f), Arc::new(backend.render(&evaluated.display_list)?)))
        })
        .collect()
}

fn render_chunk_parallel(
    pool: &rayon::ThreadPool,
    eval: &Evaluator,
    canvas: Canvas,
    start: u64,
    end: u64,
) -> OrreryResult<Vec<(FrameIndex, Arc<FrameRGBA>)>> {
    pool.install(|| {
        (start..end)
            .into_par_iter()
            .map_init(
                || CpuBackend::new(canvas),
                |backend, f| -> OrreryResult<(FrameIndex, Arc<FrameRGBA>)> {
                    let backend = backend
                        .as_mut()
                        .map_err(|e| OrreryError::evaluation(e.to_string()))?;
                    let evaluated = eval.eval_frame(FrameIndex(f))?;
                    Ok((FrameIndex(f), Arc::new(backend.render(&evaluated.display_list)?)))
                },
            )
            .collect()
    })
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

fn build_thread_pool(threads: Option<usize>) -> OrreryResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(OrreryError::validation(
            "render 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| OrreryError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn temp_mix_path() -> PathBuf {
    std::env::temp_dir().join(format!(
        "orrery_narration_{}_{}.f32le",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ))
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Whether every narration recording of `spec` is present under `assets_root`.
pub fn narration_assets_present(spec: &CompositionSpec, assets_root: &Path) -> bool {
    crate::audio::manifest::resolve_narration_assets(
        &NarrationTrack::for_timeline(&spec.timeline),
        assets_root,
    )
    .is_ok()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
