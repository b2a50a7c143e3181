use super::*;

#[test]
fn nebula_envelope_ramps_holds_and_fades() {
    let t = 560.0;
    assert_eq!(nebula_envelope(0.0, t).unwrap(), 0.0);
    assert!((nebula_envelope(50.0, t).unwrap() - 0.2).abs() < 1e-12);
    assert_eq!(nebula_envelope(280.0, t).unwrap(), 0.4);
    assert!((nebula_envelope(510.0, t).unwrap() - 0.2).abs() < 1e-12);
    assert_eq!(nebula_envelope(560.0, t).unwrap(), 0.0);
    assert_eq!(nebula_envelope(900.0, t).unwrap(), 0.0);
    assert_eq!(nebula_envelope(-5.0, t).unwrap(), 0.0);
}

#[test]
fn zero_nebula_draws_nothing() {
    let mut dl = DisplayList::default();
    draw_nebula(&mut dl, Canvas::DESIGN, 0.0);
    assert!(dl.is_empty());
    draw_nebula(&mut dl, Canvas::DESIGN, 0.4);
    assert_eq!(dl.with_tag("nebula").count(), 15);
}

#[test]
fn vignette_darkens_toward_the_edge() {
    let mut dl = DisplayList::default();
    draw_vignette(&mut dl, Canvas::DESIGN, 0.15);
    let o: Vec<f32> = dl.with_tag("vignette").map(|n| n.opacity).collect();
    assert_eq!(o.len(), 4);
    assert!(o.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn progress_bar_width_tracks_progress() {
    let mut dl = DisplayList::default();
    draw_progress_bar(&mut dl, Canvas::DESIGN, 0.0, 3.0, Rgba8::WHITE, 0.3);
    assert!(dl.is_empty());
    draw_progress_bar(&mut dl, Canvas::DESIGN, 0.5, 3.0, Rgba8::WHITE, 0.3);
    match &dl.nodes()[0].shape {
        Shape::Rect { rect, .. } => {
            assert_eq!(rect.width(), 960.0);
            assert_eq!(rect.y1, 1080.0);
        }
        other => panic!("unexpected {other:?}"),
    }
}
