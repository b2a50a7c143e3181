use super::*;

fn intro() -> SpaceDust {
    SpaceDust::new(
        0,
        DustSpec {
            count: 30,
            base_radius: 80.0,
            ring_spacing: 100.0,
            rings: 8,
            drift: 0.0015,
            drift_step: 0.0,
            pulse_speed: 0.02,
            pulse_phase: 0.3,
            opacity: (0.02, 0.1),
            size: MoteSize::Breathing,
        },
    )
}

#[test]
fn motes_sit_on_their_rings() {
    let dust = intro();
    for i in 0..30 {
        let (offset, size, opacity) = dust.mote(i, 123.0);
        let expected = 80.0 + (i % 8) as f64 * 100.0;
        let on_ellipse = (offset.x / expected).powi(2) + (offset.y / (expected * 0.6)).powi(2);
        assert!((on_ellipse - 1.0).abs() < 1e-9);
        assert!((0.5..=1.5).contains(&size));
        assert!((0.02 - 1e-12..=0.1 + 1e-12).contains(&opacity));
    }
}

#[test]
fn motes_drift_with_time() {
    let dust = intro();
    assert_ne!(dust.mote(4, 0.0).0, dust.mote(4, 100.0).0);
}

#[test]
fn seeded_sizes_are_stable() {
    let spec = DustSpec {
        size: MoteSize::Seeded(1.0, 2.5),
        ..intro().spec
    };
    let a = SpaceDust::new(5, spec);
    let b = SpaceDust::new(5, spec);
    for i in 0..30 {
        assert_eq!(a.mote(i, 9.0), b.mote(i, 9.0));
        assert!((1.0..2.5).contains(&a.mote(i, 9.0).1));
    }
}

#[test]
fn draw_emits_one_node_per_mote() {
    let mut dl = DisplayList::default();
    intro().draw(&mut dl, 1.0, Point::new(960.0, 540.0));
    assert_eq!(dl.with_tag("dust").count(), 30);
}
