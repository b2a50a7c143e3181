use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use orrery::{
    Canvas, CompositionRegistry, CompositionSpec, Evaluator, FfmpegSink, FrameIndex, FrameRange,
    FrameSink, NarrationTrack, PngSequenceSink, RenderConfig, RenderSession, StillFormat,
};

#[derive(Parser, Debug)]
#[command(name = "orrery", version, about = "Render the narrated solar-system tour")]
struct Cli {
    /// More log output (`-v` debug, `-vv` trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    List,
    /// Validate timelines and narration of every composition.
    Check(CheckArgs),
    /// Print the evaluated display list of one frame as JSON.
    Dump(DumpArgs),
    /// Render a single frame as a still image.
    Frame(FrameArgs),
    /// Render an MP4 (requires `ffmpeg` on PATH) or an image sequence.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct SettingsArgs {
    /// Render config JSON; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the narration recordings.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Output width (requires --height).
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Output height (requires --width).
    #[arg(long, requires = "width")]
    height: Option<u32>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Also require every narration recording to exist.
    #[arg(long)]
    require_audio: bool,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Args, Debug)]
struct DumpArgs {
    /// Composition id, e.g. `SolarSystem`.
    #[arg(long, default_value = "SolarSystem")]
    comp: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[arg(long, default_value = "SolarSystem")]
    comp: String,

    #[arg(long)]
    frame: u64,

    /// Output image; the format follows the extension (`.png`, `.jpg`).
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[arg(long, default_value = "SolarSystem")]
    comp: String,

    /// Output MP4 path.
    #[arg(long, required_unless_present = "png_dir")]
    out: Option<PathBuf>,

    /// Write one image per frame into this directory instead of encoding a video.
    #[arg(long, conflicts_with = "out")]
    png_dir: Option<PathBuf>,

    /// Frame range `A..B` (end exclusive); defaults to the whole composition.
    #[arg(long)]
    frames: Option<String>,

    /// Render without narration.
    #[arg(long)]
    muted: bool,

    /// Worker threads; `1` renders sequentially.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per render chunk.
    #[arg(long)]
    chunk_size: Option<usize>,

    #[command(flatten)]
    settings: SettingsArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Check(args) => cmd_check(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "orrery=info,warn",
        1 => "orrery=debug,info",
        _ => "orrery=trace,debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_settings(args: &SettingsArgs) -> anyhow::Result<RenderConfig> {
    let mut cfg = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(dir) = &args.assets {
        cfg.assets_dir = dir.clone();
    }
    if let (Some(width), Some(height)) = (args.width, args.height) {
        cfg.canvas = Some(Canvas { width, height });
    }
    Ok(cfg)
}

fn composition(id: &str, cfg: Option<&RenderConfig>) -> anyhow::Result<CompositionSpec> {
    let registry = CompositionRegistry::standard()?;
    let spec = registry.get(id)?.clone();
    match cfg.and_then(|c| c.canvas) {
        Some(canvas) => Ok(spec.with_canvas(canvas)?),
        None => Ok(spec),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    let registry = CompositionRegistry::standard()?;
    for spec in registry.iter() {
        let scenes = spec
            .timeline
            .slots()
            .iter()
            .map(|s| s.scene.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<16} {:>5} frames  {:>5.1}s  {}x{}  [{}]",
            spec.id,
            spec.duration(),
            spec.timeline.duration_secs(),
            spec.canvas.width,
            spec.canvas.height,
            scenes
        );
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let cfg = load_settings(&args.settings)?;
    let registry = CompositionRegistry::standard()?;
    for spec in registry.iter() {
        let narration = NarrationTrack::for_timeline(&spec.timeline);
        narration
            .validate_against(&spec.timeline)
            .with_context(|| format!("composition '{}'", spec.id))?;
        if args.require_audio {
            orrery::resolve_narration_assets(&narration, &cfg.assets_dir)
                .with_context(|| format!("narration assets of '{}'", spec.id))?;
        }
        tracing::info!(
            comp = %spec.id,
            frames = spec.duration(),
            segments = narration.segments().len(),
            "ok"
        );
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let spec = composition(&args.comp, None)?;
    let evaluated = Evaluator::new(&spec).eval_frame(FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&evaluated).context("serialize evaluated frame")?;
    match args.out {
        Some(path) => {
            orrery::ensure_parent_dir(&path)?;
            std::fs::write(&path, json)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_settings(&args.settings)?;
    let spec = composition(&args.comp, Some(&cfg))?;
    let frame = orrery::render_frame(&spec, FrameIndex(args.frame))?;

    let format = StillFormat::from_path(&args.out).unwrap_or(cfg.image_format);
    orrery::ensure_parent_dir(&args.out)?;
    orrery::write_still(&frame, &args.out, format, cfg.background_rgba()?.to_array())?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = load_settings(&args.settings)?;
    if args.muted {
        cfg.muted = true;
    }
    if let Some(threads) = args.threads {
        cfg.concurrency = threads;
    }
    if let Some(chunk_size) = args.chunk_size {
        cfg.chunk_size = chunk_size;
    }
    cfg.validate()?;

    let spec = composition(&args.comp, Some(&cfg))?;
    let range = match &args.frames {
        Some(s) => FrameRange::parse(s)?,
        None => spec.timeline.range(),
    };

    let mut opts = cfg.session_opts();
    let (mut sink, target): (Box<dyn FrameSink>, &Path) = match (&args.png_dir, &args.out) {
        (Some(dir), _) => {
            opts.enable_audio = false;
            let sink = PngSequenceSink::new(dir, cfg.image_format)
                .with_overwrite(cfg.overwrite)
                .with_background(cfg.background_rgba()?.to_array());
            (Box::new(sink), dir.as_path())
        }
        (None, Some(out)) => {
            anyhow::ensure!(
                orrery::is_ffmpeg_on_path(),
                "ffmpeg was not found on PATH (use --png-dir for an image sequence)"
            );
            (Box::new(FfmpegSink::new(cfg.ffmpeg_opts(out)?)), out.as_path())
        }
        (None, None) => anyhow::bail!("either --out or --png-dir is required"),
    };

    let mut session = RenderSession::new(&spec, &cfg.assets_dir, opts)?;
    let stats = session
        .render_range(range, sink.as_mut())
        .with_context(|| {
            format!(
                "render '{}' frames {}..{}",
                spec.id, range.start.0, range.end.0
            )
        })?;

    eprintln!(
        "wrote {} ({} frames, {} narration segments)",
        target.display(),
        stats.frames_rendered,
        stats.audio_segments
    );
    Ok(())
}
