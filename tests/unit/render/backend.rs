use super::*;

#[test]
fn pixel_unpremultiplies_partial_alpha() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![255, 0, 0, 255, 64, 32, 0, 128],
        premultiplied: true,
    };
    assert_eq!(frame.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(1, 0), Some([128, 64, 0, 128]));
    assert_eq!(frame.pixel(2, 0), None);
}

#[test]
fn byte_len_does_not_wrap_at_the_largest_canvas() {
    assert_eq!(FrameRGBA::byte_len(1920, 1080), 8_294_400);
    assert_eq!(FrameRGBA::byte_len(65_535, 65_535), 17_179_344_900);
}

#[test]
fn pixel_on_a_short_buffer_is_none() {
    let frame = FrameRGBA {
        width: 65_535,
        height: 65_535,
        data: vec![0; 16],
        premultiplied: false,
    };
    assert_eq!(frame.pixel(3, 0), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(65_534, 65_534), None);
}
