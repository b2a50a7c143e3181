use super::*;

#[test]
fn scene_sun_has_eight_rays_and_glow_scales() {
    let mut dim = DisplayList::default();
    draw_sun(&mut dim, Point::new(960.0, 540.0), SunStyle { size: 100.0, glow: 0.5 });
    let mut bright = DisplayList::default();
    draw_sun(&mut bright, Point::new(960.0, 540.0), SunStyle { size: 100.0, glow: 1.0 });

    assert_eq!(dim.with_tag("sun.ray").count(), 8);
    let g = |dl: &DisplayList| dl.with_tag("sun.glow").map(|n| n.opacity).sum::<f32>();
    assert!(g(&bright) > g(&dim));
    dim.validate().unwrap();
}

#[test]
fn animated_flares_stay_in_range() {
    let sun = AnimatedSun::new(7, 120.0, 0.8, 0.2);
    for f in [0.0, 3.0, 17.0, 250.0] {
        let mut dl = DisplayList::default();
        sun.draw(&mut dl, f, Point::new(960.0, 380.0));
        let rays: Vec<_> = dl.with_tag("sun.ray").collect();
        assert_eq!(rays.len(), 8);
        for r in rays {
            assert!((0.3 - 1e-6..=0.7 + 1e-6).contains(&r.opacity));
            if let Shape::Line { from, to, .. } = &r.shape {
                let len = (*to - *from).hypot();
                assert!((120.0 * 0.7 - 1e-9..=120.0 * 0.9 + 1e-9).contains(&len));
            }
        }
        assert_eq!(dl.with_tag("sun.granule").count(), AnimatedSun::GRANULES);
    }
}

#[test]
fn granules_are_seeded() {
    let a = AnimatedSun::new(11, 100.0, 1.0, 0.2);
    let b = AnimatedSun::new(11, 100.0, 1.0, 0.2);
    let mut da = DisplayList::default();
    let mut db = DisplayList::default();
    a.draw(&mut da, 42.0, Point::ORIGIN);
    b.draw(&mut db, 42.0, Point::ORIGIN);
    assert_eq!(da.nodes(), db.nodes());
}
