use super::*;

fn parallax() -> Starfield {
    Starfield::generate(
        1,
        StarfieldSpec::new(200, StarMotion::Parallax)
            .size(0.5, 4.5)
            .opacity(0.2, 1.0)
            .twinkle(0.005, 0.025)
            .depth(0.5, 2.5),
    )
}

#[test]
fn generation_is_deterministic_and_in_range() {
    let a = parallax();
    let b = parallax();
    assert_eq!(a.stars(), b.stars());
    for s in a.stars() {
        assert!((0.0..100.0).contains(&s.x) && (0.0..100.0).contains(&s.y));
        assert!((0.5..4.5).contains(&s.size));
        assert!((0.5..2.5).contains(&s.depth));
    }
    let other = Starfield::generate(2, StarfieldSpec::new(200, StarMotion::Parallax));
    assert_ne!(a.stars()[0].x, other.stars()[0].x);
}

#[test]
fn parallax_wraps_inside_the_canvas() {
    let field = parallax();
    for frame in [0.0, 500.0, 12_345.0] {
        for i in 0..field.stars().len() {
            let (x, y, o) = field.sample(i, frame).unwrap().unwrap();
            assert!((0.0..100.0).contains(&x), "x={x}");
            assert!((0.0..100.0).contains(&y), "y={y}");
            assert!((0.0..=1.0).contains(&o));
        }
    }
}

#[test]
fn still_stars_do_not_move() {
    let field = Starfield::generate(9, StarfieldSpec::new(10, StarMotion::Still));
    assert_eq!(field.sample(3, 0.0).unwrap(), field.sample(3, 400.0).unwrap());
    assert_eq!(field.sample(10, 0.0).unwrap(), None);
}

#[test]
fn wide_field_maps_into_view() {
    let field = Starfield::generate(
        5,
        StarfieldSpec::new(300, StarMotion::WideParallax)
            .position(-50.0, 150.0)
            .depth(0.5, 3.5)
            .twinkle(0.005, 0.02),
    );
    for i in 0..300 {
        let (x, y, o) = field.sample(i, 250.0).unwrap().unwrap();
        assert!((0.0..100.0).contains(&x) && (0.0..100.0).contains(&y));
        assert!(o <= field.stars()[i].opacity * 1.5 + 1e-9);
    }
}

#[test]
fn pulse_floor_is_thirty_percent() {
    let field = Starfield::generate(3, StarfieldSpec::new(50, StarMotion::Pulse));
    for i in 0..50 {
        let (_, _, o) = field.sample(i, 77.0).unwrap().unwrap();
        assert!((0.3..=1.0).contains(&o));
    }
}

#[test]
fn draw_places_stars_in_canvas_pixels() {
    let field = Starfield::generate(4, StarfieldSpec::new(25, StarMotion::Still));
    let mut dl = DisplayList::default();
    field.draw(&mut dl, 0.0, Canvas::DESIGN).unwrap();
    assert_eq!(dl.with_tag("star").count(), 25);
    for n in dl.nodes() {
        if let Shape::Circle { center, .. } = n.shape {
            assert!(center.x >= 0.0 && center.x < 1920.0);
            assert!(center.y >= 0.0 && center.y < 1080.0);
        }
    }
}
