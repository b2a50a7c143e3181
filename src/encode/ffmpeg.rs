use std::io::{Read as _, Write as _};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::encode::sink::{
    FrameSink, SinkConfig, check_order, ensure_parent_dir, flatten_premul_over_bg_to_opaque_rgba8,
};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::render::backend::FrameRGBA;

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    pub overwrite: bool,
    /// Straight-alpha background used to flatten premultiplied frames.
    pub bg_rgba: [u8; 4],
    pub video_codec: String,
    pub audio_codec: String,
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
            video_codec: "libx264".to_owned(),
            audio_codec: "aac".to_owned(),
        }
    }
}

/// Streams raw frames into the system `ffmpeg` and muxes the optional narration mix.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }
}

/// Full `ffmpeg` argument list for `cfg`.
pub(crate) fn ffmpeg_args(opts: &FfmpegSinkOpts, cfg: &SinkConfig) -> Vec<String> {
    let mut args = vec![
        if opts.overwrite { "-y" } else { "-n" }.to_owned(),
        "-loglevel".to_owned(),
        "error".to_owned(),
        "-f".to_owned(),
        "rawvideo".to_owned(),
        "-pix_fmt".to_owned(),
        "rgba".to_owned(),
        "-s".to_owned(),
        format!("{}x{}", cfg.width, cfg.height),
        "-r".to_owned(),
        format!("{}/{}", cfg.fps.num, cfg.fps.den),
        "-i".to_owned(),
        "pipe:0".to_owned(),
    ];
    let video = ["-c:v", opts.video_codec.as_str(), "-pix_fmt", "yuv420p"];
    match &cfg.audio {
        Some(audio) => {
            args.extend([
                "-f".to_owned(),
                "f32le".to_owned(),
                "-ar".to_owned(),
                audio.sample_rate.to_string(),
                "-ac".to_owned(),
                audio.channels.to_string(),
                "-i".to_owned(),
                audio.path.to_string_lossy().into_owned(),
            ]);
            args.extend(video.iter().map(|s| s.to_string()));
            args.extend(
                ["-c:a", opts.audio_codec.as_str(), "-shortest"]
                    .iter()
                    .map(|s| s.to_string()),
            );
        }
        None => {
            args.push("-an".to_owned());
            args.extend(video.iter().map(|s| s.to_string()));
        }
    }
    args.extend(["-movflags".to_owned(), "+faststart".to_owned()]);
    args.push(opts.out_path.to_string_lossy().into_owned());
    args
}

fn validate_config(opts: &FfmpegSinkOpts, cfg: &SinkConfig) -> OrreryResult<()> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(OrreryError::validation(
            "ffmpeg sink width/height must be non-zero",
        ));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(OrreryError::validation(
            "ffmpeg sink width/height must be even (required for yuv420p)",
        ));
    }
    if let Some(audio) = &cfg.audio
        && (audio.sample_rate == 0 || audio.channels == 0)
    {
        return Err(OrreryError::validation(
            "audio sample rate and channel count must be non-zero",
        ));
    }
    if !opts.overwrite && opts.out_path.exists() {
        return Err(OrreryError::validation(format!(
            "output file '{}' already exists",
            opts.out_path.display()
        )));
    }
    Ok(())
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> OrreryResult<()> {
        validate_config(&self.opts, &cfg)?;
        ensure_parent_dir(&self.opts.out_path)?;
        if !is_ffmpeg_on_path() {
            return Err(OrreryError::evaluation(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let args = ffmpeg_args(&self.opts, &cfg);
        tracing::debug!(?args, "spawning ffmpeg");
        let mut child = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| OrreryError::evaluation(format!("failed to spawn ffmpeg: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| OrreryError::evaluation("failed to open ffmpeg stdin"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| OrreryError::evaluation("failed to open ffmpeg stderr"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        self.scratch = vec![0u8; FrameRGBA::byte_len(cfg.width, cfg.height)];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> OrreryResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| OrreryError::evaluation("ffmpeg sink not started"))?;
        check_order(self.last_idx, idx)?;
        self.last_idx = Some(idx);

        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(OrreryError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.premultiplied {
            let bg = self.opts.bg_rgba;
            flatten_premul_over_bg_to_opaque_rgba8(&mut self.scratch, &frame.data, bg)?;
        } else if frame.data.len() == self.scratch.len() {
            self.scratch.copy_from_slice(&frame.data);
        } else {
            return Err(OrreryError::validation(
                "frame data does not match width*height*4",
            ));
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(OrreryError::evaluation("ffmpeg sink is already finalized"));
        };
        stdin.write_all(&self.scratch).map_err(|e| {
            OrreryError::evaluation(format!("failed to write frame to ffmpeg stdin: {e}"))
        })
    }

    fn end(&mut self) -> OrreryResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| OrreryError::evaluation("ffmpeg sink not started"))?;
        let status = child
            .wait()
            .map_err(|e| OrreryError::evaluation(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| OrreryError::evaluation("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| OrreryError::evaluation(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };
        self.cfg = None;

        if !status.success() {
            return Err(OrreryError::evaluation(format!(
                "ffmpeg exited with status {status}: {}",
                String::from_utf8_lossy(&stderr).trim()
            )));
        }
        tracing::info!(out = %self.opts.out_path.display(), "encoded video");
        Ok(())
    }
}

/// `true` when `ffmpeg -version` runs.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
