use super::*;

#[test]
fn camera_follows_keyframes() {
    let start = Overview::camera(0.0).unwrap();
    assert_eq!(start.zoom, 0.7);
    assert_eq!(start.rotation_deg, 0.0);

    let mid = Overview::camera(280.0).unwrap();
    assert_eq!(mid.zoom, 1.0);
    assert_eq!(mid.pan, Vec2::new(15.0, -10.0));
    assert_eq!(mid.rotation_deg, 5.0);

    let end = Overview::camera(560.0).unwrap();
    assert!((end.zoom - 1.1).abs() < 1e-12);
    assert_eq!(end.pan, Vec2::new(0.0, 5.0));
    // Clamped beyond the scene.
    assert_eq!(Overview::camera(900.0).unwrap(), end);
}

#[test]
fn draws_sun_planets_and_trails() {
    let dl = Overview::new().draw(120.0).unwrap();
    assert_eq!(dl.with_tag("sun.ray").count(), 8);
    assert_eq!(dl.with_tag("orbit").count(), 8);
    assert_eq!(dl.with_tag("trail").count(), 4 * 5);
    assert!(dl.with_tag("planet").count() >= 8 * 3);
    assert!(dl.with_tag("star").count() > 0);
    dl.validate().unwrap();
}

#[test]
fn nebula_is_absent_on_the_first_frame() {
    let dl = Overview::new().draw(0.0).unwrap();
    assert_eq!(dl.with_tag("nebula").count(), 0);
    let later = Overview::new().draw(200.0).unwrap();
    assert!(later.with_tag("nebula").count() > 0);
}
