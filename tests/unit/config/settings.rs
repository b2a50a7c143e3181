use super::*;

#[test]
fn empty_object_gives_the_defaults() {
    let cfg = RenderConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, RenderConfig::default());
    assert_eq!(cfg.image_format, StillFormat::Jpeg);
    assert_eq!(cfg.concurrency, 4);
    assert_eq!(cfg.assets_dir, PathBuf::from("public"));
    assert!(!cfg.muted);
}

#[test]
fn fields_override_and_unknown_keys_fail() {
    let cfg = RenderConfig::from_json_str(
        r##"{ "muted": true, "concurrency": 1, "image_format": "png", "background": "#102030",
             "canvas": { "width": 960, "height": 540 } }"##,
    )
    .unwrap();
    assert!(cfg.muted);
    assert_eq!(cfg.image_format, StillFormat::Png);
    assert_eq!(
        cfg.canvas,
        Some(Canvas {
            width: 960,
            height: 540
        })
    );

    let opts = cfg.session_opts();
    assert!(!opts.parallel);
    assert!(!opts.enable_audio);
    assert_eq!(cfg.ffmpeg_opts("a.mp4").unwrap().bg_rgba, [0x10, 0x20, 0x30, 255]);

    let err = RenderConfig::from_json_str(r#"{ "codec": "h264" }"#).unwrap_err();
    assert!(matches!(err, OrreryError::Serde(_)));
}

#[test]
fn invalid_values_are_rejected() {
    for bad in [
        r#"{ "concurrency": 0 }"#,
        r#"{ "chunk_size": 0 }"#,
        r#"{ "background": "black" }"#,
        r#"{ "narration_volume": -1.0 }"#,
        r#"{ "video_codec": " " }"#,
    ] {
        assert!(RenderConfig::from_json_str(bad).is_err(), "{bad}");
    }
}

#[test]
fn defaults_render_in_parallel_with_narration() {
    let opts = RenderConfig::default().session_opts();
    assert!(opts.parallel);
    assert_eq!(opts.threads, Some(4));
    assert!(opts.enable_audio);
    assert_eq!(opts.narration.volume, 1.0);
}

#[test]
fn json_round_trip_preserves_values() {
    let mut cfg = RenderConfig::default();
    cfg.narration_fade_secs = 0.25;
    let back = RenderConfig::from_json_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, cfg);
}
