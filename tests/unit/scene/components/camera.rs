use super::*;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn identity_camera_is_identity() {
    let a = Camera::default().affine(Point::new(960.0, 540.0));
    assert!(close(a * Point::new(3.0, 4.0), Point::new(3.0, 4.0)));
}

#[test]
fn zoom_keeps_origin_fixed() {
    let origin = Point::new(960.0, 540.0);
    let a = Camera::zoom(2.0).affine(origin);
    assert!(close(a * origin, origin));
    assert!(close(a * Point::new(1060.0, 540.0), Point::new(1160.0, 540.0)));
}

#[test]
fn pan_is_scaled_by_zoom() {
    let origin = Point::new(960.0, 540.0);
    let cam = Camera {
        zoom: 2.0,
        pan: Vec2::new(10.0, -5.0),
        rotation_deg: 0.0,
    };
    assert!(close(cam.affine(origin) * origin, Point::new(980.0, 530.0)));
}

#[test]
fn rotation_turns_about_origin() {
    let origin = Point::new(960.0, 540.0);
    let cam = Camera {
        rotation_deg: 90.0,
        ..Camera::default()
    };
    let p = cam.affine(origin) * Point::new(1060.0, 540.0);
    assert!(close(p, Point::new(960.0, 640.0)));
}
