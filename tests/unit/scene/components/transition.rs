use super::*;
use crate::foundation::core::Rgba8;
use crate::scene::model::Shape;

#[test]
fn fade_in_then_out_within_duration() {
    let t = Transition::default();
    let o = |f: f64| t.style(f, Point::ORIGIN).unwrap().1;
    assert_eq!(o(0.0), 0.0);
    assert!((o(12.0) - 0.4).abs() < 1e-12);
    // Fade-out over the last 20 % dominates from frame 24 on.
    assert!((o(24.0) - 0.8).abs() < 1e-12);
    assert!((o(27.0) - 0.5).abs() < 1e-12);
    assert_eq!(o(30.0), 0.0);
    assert_eq!(o(100.0), 0.0);
}

#[test]
fn zoom_scales_about_origin() {
    let t = Transition::new(TransitionKind::Zoom, 100.0);
    let origin = Point::new(960.0, 540.0);
    let (a, _) = t.style(0.0, origin).unwrap();
    assert_eq!(a * origin, origin);
    let p = a * Point::new(1060.0, 540.0);
    assert!((p.x - 1040.0).abs() < 1e-9);
}

#[test]
fn slide_rises_fifty_pixels() {
    let t = Transition::new(TransitionKind::Slide, 40.0);
    let (start, _) = t.style(0.0, Point::ORIGIN).unwrap();
    let (end, _) = t.style(40.0, Point::ORIGIN).unwrap();
    assert_eq!(start * Point::ORIGIN, Point::new(0.0, 50.0));
    assert_eq!(end * Point::ORIGIN, Point::ORIGIN);
}

#[test]
fn apply_wraps_content() {
    let t = Transition::new(TransitionKind::Fade, 100.0);
    let mut dl = DisplayList::default();
    t.apply(&mut dl, 50.0, Point::ORIGIN, |dl| {
        dl.fill(
            "x",
            Shape::Circle {
                center: Point::ORIGIN,
                radius: 1.0,
            },
            Rgba8::WHITE,
            1.0,
        )
    })
    .unwrap();
    assert!((dl.nodes()[0].opacity - 0.5).abs() < 1e-6);
}

#[test]
fn eased_transition_keeps_endpoints() {
    let t = Transition::new(TransitionKind::Slide, 40.0).with_ease(Ease::CSS);
    let (start, o0) = t.style(0.0, Point::ORIGIN).unwrap();
    let (_, mid) = t.style(20.0, Point::ORIGIN).unwrap();
    assert_eq!(o0, 0.0);
    assert_eq!(start * Point::ORIGIN, Point::new(0.0, 50.0));
    assert!(mid > 0.5);
    assert!((mid - Ease::CSS.apply(0.5)).abs() < 1e-9);
}
