use super::*;

#[test]
fn zoom_pushes_in_then_holds() {
    assert_eq!(SunFocus::zoom(0.0).unwrap(), 1.5);
    assert!((SunFocus::zoom(180.0).unwrap() - 1.85).abs() < 1e-12);
    assert!((SunFocus::zoom(360.0).unwrap() - 2.2).abs() < 1e-12);
    assert!((SunFocus::zoom(399.0).unwrap() - 2.2).abs() < 1e-12);
}

#[test]
fn annotation_is_not_zoomed() {
    let dl = SunFocus::new().draw(200.0).unwrap();
    let boxed = dl.with_tag("annotation.box").next().unwrap();
    assert_eq!(boxed.transform.as_coeffs()[0], 1.0);
    let sun = dl.with_tag("sun").next().unwrap();
    assert!(sun.transform.as_coeffs()[0] > 1.5);
}

#[test]
fn dust_and_trails_present() {
    let dl = SunFocus::new().draw(10.0).unwrap();
    assert_eq!(dl.with_tag("dust").count(), 25);
    assert_eq!(dl.with_tag("trail").count(), 20);
}
