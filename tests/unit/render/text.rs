use super::*;

fn key(text: &str, anchor: TextAnchor) -> TextKey {
    TextKey::new(text, 20.0, false, anchor, Rgba8::WHITE, 1.0)
}

#[test]
fn anchor_moves_the_origin_inside_the_box() {
    let (w, h, start) = sprite_box(&key("Earth", TextAnchor::Start));
    let (_, _, mid) = sprite_box(&key("Earth", TextAnchor::Middle));
    let (_, _, end) = sprite_box(&key("Earth", TextAnchor::End));
    assert!(start.x < mid.x && mid.x < end.x);
    assert_eq!(mid.x, w / 2.0);
    assert!((start.y - 24.0).abs() < 1e-9);
    assert!(h > start.y);
}

#[test]
fn svg_escapes_markup_and_sets_style() {
    let gold = Rgba8::rgb_hex(0xFFD700);
    let k = TextKey::new("A & <B>", 28.0, true, TextAnchor::Start, gold, 2.0);
    let svg = sprite_svg(&k);
    assert!(svg.contains("A &amp; &lt;B&gt;"));
    assert!(svg.contains(r##"fill="#ffd700""##));
    assert!(svg.contains(r#"font-weight="bold""#));
    assert!(svg.contains(r#"text-anchor="start""#));
}

#[test]
fn key_quantizes_size_and_scale() {
    let a = TextKey::new("x", 18.0, false, TextAnchor::Middle, Rgba8::WHITE, 0.5001);
    let b = TextKey::new("x", 18.0, false, TextAnchor::Middle, Rgba8::WHITE, 0.4999);
    assert_eq!(a, b);
    assert_eq!(a.scale(), 0.5);
    assert_eq!(a.size(), 18.0);
}

#[test]
fn sprites_are_sized_by_scale_and_cached() {
    let mut r = TextRasterizer::new(Arc::new(usvg::fontdb::Database::new()));
    let k = TextKey::new("Mars", 20.0, false, TextAnchor::Middle, Rgba8::WHITE, 2.0);
    let (w, h, anchor) = sprite_box(&k);
    let s = r.sprite(&k).unwrap();
    assert_eq!(s.width, (w * 2.0).ceil() as u32);
    assert_eq!(s.height, (h * 2.0).ceil() as u32);
    assert_eq!(s.offset, -anchor);

    r.sprite(&k).unwrap();
    assert_eq!(r.cached(), 1);
}
