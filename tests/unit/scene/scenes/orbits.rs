use super::*;

fn label_count(frame: f64) -> usize {
    Orbits::new().draw(frame).unwrap().with_tag("label").count()
}

#[test]
fn labels_appear_one_after_another() {
    assert_eq!(label_count(0.0), 0);
    // Mercury's label starts at 50; by 80 the first two are up.
    assert_eq!(label_count(80.0), 2);
    // Mercury's label is fading out while Neptune's fades in.
    assert_eq!(label_count(228.0), 8);
    assert_eq!(label_count(250.0), 7);
}

#[test]
fn inner_planets_spin_faster() {
    assert!(PLANETS[..4].iter().all(|p| p.rotation_speed == 0.5));
    assert!(PLANETS[4..].iter().all(|p| p.rotation_speed == 0.3));
}

#[test]
fn small_sun_and_fixed_orbit_lines() {
    let dl = Orbits::new().draw(100.0).unwrap();
    for n in dl.with_tag("orbit") {
        assert!((n.opacity - 0.15).abs() < 1e-6);
    }
    assert_eq!(dl.with_tag("dust").count(), 12);
    assert_eq!(dl.background, Rgba8::rgb_hex(0x000814));
}
