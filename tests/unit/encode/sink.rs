use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 255],
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::new(40, 1).unwrap(),
        audio: None,
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame()).unwrap();
    sink.push_frame(FrameIndex(4), &frame()).unwrap();
    assert!(sink.push_frame(FrameIndex(4), &frame()).is_err());
    sink.end().unwrap();
    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(&cfg()));
    assert_eq!(
        sink.frames().iter().map(|(i, _)| i.0).collect::<Vec<_>>(),
        vec![3, 4]
    );
}

#[test]
fn flatten_transparent_pixel_returns_background() {
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &[0, 0, 0, 0], [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_opaque_pixel_is_identity() {
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &[1, 2, 3, 255], [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![1, 2, 3, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &[0; 4], [0, 0, 0, 255]).is_err());
}
