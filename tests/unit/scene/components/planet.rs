use super::*;

fn render(kind: BodyKind, frame: f64) -> DisplayList {
    let mut dl = DisplayList::default();
    draw_planet(
        &mut dl,
        frame,
        Point::new(500.0, 300.0),
        PlanetStyle {
            kind,
            size: 40.0,
            rotation_deg: frame * 0.5,
        },
    );
    dl
}

#[test]
fn every_planet_draws_a_valid_sphere() {
    for kind in BodyKind::PLANETS {
        let dl = render(kind, 37.0);
        dl.validate().unwrap();
        assert!(dl.with_tag("planet").count() >= 3, "{kind:?}");
        assert!(dl.nodes().iter().all(|n| (0.0..=1.0).contains(&n.opacity)));
    }
}

#[test]
fn rings_follow_the_catalogue() {
    assert!(render(BodyKind::Saturn, 0.0).with_tag("planet.ring").count() >= 2);
    assert_eq!(render(BodyKind::Uranus, 0.0).with_tag("planet.ring").count(), 1);
    assert_eq!(render(BodyKind::Mars, 0.0).with_tag("planet.ring").count(), 0);
}

#[test]
fn earth_atmosphere_pulses() {
    let halo = |f: f64| render(BodyKind::Earth, f).with_tag("planet.halo").next().unwrap().opacity;
    // sin(0) = 0 maps to the middle of [0.7, 1]; quarter period later sin = 1.
    let quarter = std::f64::consts::FRAC_PI_2 / 0.05;
    assert!(halo(quarter) > halo(0.0));
    assert!(render(BodyKind::Earth, 10.0).with_tag("planet.earth.cloud").count() == 4);
}

#[test]
fn jupiter_has_bands_and_spot() {
    let dl = render(BodyKind::Jupiter, 12.0);
    assert_eq!(dl.with_tag("planet.jupiter.band").count(), 6);
    assert_eq!(dl.with_tag("planet.jupiter.spot").count(), 1);
}

#[test]
fn rotation_spins_the_disc_but_not_the_halo() {
    let dl = render(BodyKind::Mars, 90.0);
    assert_eq!(
        dl.with_tag("planet.halo").next().unwrap().transform,
        Affine::IDENTITY
    );
    assert_ne!(
        dl.with_tag("planet").next().unwrap().transform,
        Affine::IDENTITY
    );
}

#[test]
fn plain_body_uses_given_color() {
    let mut dl = DisplayList::default();
    draw_plain_body(&mut dl, Point::ORIGIN, 8.0, Rgba8::rgb_hex(0x888888), 0.5);
    let top = dl.with_tag("body").last().unwrap();
    assert_eq!(top.fill, Rgba8::rgb_hex(0x888888));
    assert!((top.opacity - 0.4).abs() < 1e-6);
}
