use super::*;

fn dot(dl: &mut DisplayList, opacity: f64) {
    dl.fill(
        "dot",
        Shape::Circle {
            center: Point::new(1.0, 2.0),
            radius: 3.0,
        },
        Rgba8::WHITE,
        opacity,
    );
}

#[test]
fn opacity_is_clamped_and_zero_is_culled() {
    let mut dl = DisplayList::default();
    dot(&mut dl, 1.7);
    dot(&mut dl, -0.2);
    dot(&mut dl, f64::NAN);
    dot(&mut dl, 0.5);
    assert_eq!(dl.len(), 2);
    assert_eq!(dl.nodes()[0].opacity, 1.0);
    assert_eq!(dl.nodes()[1].opacity, 0.5);
}

#[test]
fn groups_compose_transform_and_opacity() {
    let mut dl = DisplayList::default();
    dl.group(Affine::translate((10.0, 0.0)), 0.5, |dl| {
        dl.group(Affine::scale(2.0), 0.5, |dl| dot(dl, 1.0))
    });
    dot(&mut dl, 1.0);

    let inner = &dl.nodes()[0];
    assert_eq!(inner.opacity, 0.25);
    assert_eq!(
        inner.transform,
        Affine::translate((10.0, 0.0)) * Affine::scale(2.0)
    );
    assert_eq!(dl.nodes()[1].transform, Affine::IDENTITY);
}

#[test]
fn fill_alpha_folds_into_opacity() {
    let mut dl = DisplayList::default();
    dl.fill(
        "x",
        Shape::Circle {
            center: Point::ORIGIN,
            radius: 1.0,
        },
        Rgba8::rgba(255, 0, 0, 51),
        1.0,
    );
    let n = &dl.nodes()[0];
    assert_eq!(n.fill.a, 255);
    assert!((n.opacity - 0.2).abs() < 1e-6);
}

#[test]
fn glow_emits_translucent_rings() {
    let mut dl = DisplayList::default();
    dl.glow("halo", Point::ORIGIN, 100.0, Rgba8::WHITE, 0.5);
    assert_eq!(dl.with_tag("halo").count(), 5);
    assert!(dl.nodes().iter().all(|n| n.opacity <= 0.5));
}

#[test]
fn validate_flags_non_finite_geometry() {
    let mut dl = DisplayList::default();
    dot(&mut dl, 1.0);
    dl.validate().unwrap();
    dl.fill(
        "bad",
        Shape::Circle {
            center: Point::new(f64::INFINITY, 0.0),
            radius: 1.0,
        },
        Rgba8::WHITE,
        1.0,
    );
    assert!(dl.validate().is_err());
}
