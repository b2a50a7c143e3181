use super::*;
use crate::encode::sink::AudioInputConfig;
use crate::foundation::core::Fps;

fn cfg(width: u32, audio: bool) -> SinkConfig {
    SinkConfig {
        width,
        height: 108,
        fps: Fps::new(40, 1).unwrap(),
        audio: audio.then(|| AudioInputConfig {
            path: PathBuf::from("/tmp/mix.f32le"),
            sample_rate: 48_000,
            channels: 2,
        }),
    }
}

fn pos(args: &[String], needle: &str) -> usize {
    args.iter().position(|a| a == needle).unwrap()
}

#[test]
fn silent_render_disables_audio() {
    let args = ffmpeg_args(&FfmpegSinkOpts::new("out/solar.mp4"), &cfg(192, false));
    assert_eq!(args[0], "-y");
    assert!(args.contains(&"-an".to_owned()));
    assert!(!args.contains(&"-shortest".to_owned()));
    assert_eq!(args[pos(&args, "-s") + 1], "192x108");
    assert_eq!(args[pos(&args, "-r") + 1], "40/1");
    assert_eq!(args.last().unwrap(), "out/solar.mp4");
}

#[test]
fn narration_mix_is_a_second_input() {
    let mut opts = FfmpegSinkOpts::new("solar.mp4");
    opts.audio_codec = "libopus".to_owned();
    opts.overwrite = false;
    let args = ffmpeg_args(&opts, &cfg(192, true));
    assert_eq!(args[0], "-n");
    let inputs = args
        .iter()
        .enumerate()
        .filter(|(_, a)| a.as_str() == "-i")
        .map(|(i, _)| args[i + 1].as_str())
        .collect::<Vec<_>>();
    assert_eq!(inputs, vec!["pipe:0", "/tmp/mix.f32le"]);
    assert_eq!(args[pos(&args, "-c:a") + 1], "libopus");
    assert_eq!(args[pos(&args, "-c:v") + 1], "libx264");
    assert!(args.contains(&"-shortest".to_owned()));
}

#[test]
fn odd_sizes_and_bad_audio_are_rejected() {
    let opts = FfmpegSinkOpts::new("solar.mp4");
    assert!(validate_config(&opts, &cfg(191, false)).is_err());
    assert!(validate_config(&opts, &cfg(0, false)).is_err());
    let mut bad = cfg(192, true);
    if let Some(a) = bad.audio.as_mut() {
        a.sample_rate = 0;
    }
    assert!(validate_config(&opts, &bad).is_err());
    assert!(validate_config(&opts, &cfg(192, true)).is_ok());
}

#[test]
fn frames_before_begin_are_rejected() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("solar.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}
