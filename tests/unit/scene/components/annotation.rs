use super::*;

#[test]
fn text_fades_in_holds_and_out() {
    assert_eq!(annotation_style(10.0).unwrap().text_opacity, 0.0);
    assert!((annotation_style(35.0).unwrap().text_opacity - 0.5).abs() < 1e-12);
    assert_eq!(annotation_style(200.0).unwrap().text_opacity, 1.0);
    assert_eq!(annotation_style(380.0).unwrap().text_opacity, 0.0);
    assert_eq!(annotation_style(399.0).unwrap().text_opacity, 0.0);
}

#[test]
fn arrow_lags_text_and_pulses() {
    let s = annotation_style(40.0).unwrap();
    assert!(s.arrow_opacity < s.text_opacity);
    let held = annotation_style(200.0).unwrap().arrow_opacity;
    assert!((0.7 - 1e-12..=1.0).contains(&held));
}

#[test]
fn geometry_shrinks_with_zoom() {
    let c = Point::new(960.0, 540.0);
    let box_width = |zoom: f64| {
        let mut dl = DisplayList::default();
        draw_sun_annotation(&mut dl, 200.0, c, zoom).unwrap();
        dl.validate().unwrap();
        match &dl.with_tag("annotation.box").next().unwrap().shape {
            Shape::Rect { rect, .. } => rect.width(),
            other => panic!("unexpected {other:?}"),
        }
    };
    assert!((box_width(1.0) - 400.0).abs() < 1e-9);
    assert!((box_width(2.0) - 200.0).abs() < 1e-9);
}

#[test]
fn nothing_visible_before_frame_twenty() {
    let mut dl = DisplayList::default();
    draw_sun_annotation(&mut dl, 5.0, Point::new(960.0, 540.0), 1.5).unwrap();
    assert!(dl.is_empty());
}
