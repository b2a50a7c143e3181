use super::*;

#[test]
fn starts_at_from_and_settles_at_to() {
    let at0 = spring(SpringOpts::new(0.0, 40.0)).unwrap();
    assert!(at0.abs() < 1e-9);

    let late = spring(SpringOpts::new(400.0, 40.0)).unwrap();
    assert!((late - 1.0).abs() < 1e-3);
}

#[test]
fn negative_frames_hold_the_start_value() {
    let v = spring(SpringOpts::new(-12.0, 40.0)).unwrap();
    assert!(v.abs() < 1e-9);
}

#[test]
fn default_config_overshoots_and_clamping_prevents_it() {
    let max_free = (0..120)
        .map(|f| spring(SpringOpts::new(f64::from(f), 40.0)).unwrap())
        .fold(f64::MIN, f64::max);
    assert!(max_free > 1.0);

    let mut opts = SpringOpts::new(0.0, 40.0);
    opts.config.overshoot_clamping = true;
    for f in 0..120 {
        opts.frame = f64::from(f);
        assert!(spring(opts).unwrap() <= 1.0);
    }
}

#[test]
fn heavy_damping_rises_monotonically() {
    let mut opts = SpringOpts::new(0.0, 40.0);
    opts.config.damping = 100.0;
    let mut prev = -1.0;
    for f in 0..60 {
        opts.frame = f64::from(f);
        let v = spring(opts).unwrap();
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn duration_stretches_to_settle_on_the_requested_frame() {
    let mut opts = SpringOpts::new(30.0, 40.0);
    opts.config.damping = 100.0;
    opts.duration_in_frames = Some(30.0);
    let v = spring(opts).unwrap();
    assert!((v - 1.0).abs() < 0.01, "got {v}");

    opts.frame = 45.0;
    assert_eq!(spring(opts).unwrap(), 1.0);
}

#[test]
fn delay_shifts_the_start() {
    let mut opts = SpringOpts::new(10.0, 40.0);
    opts.delay = 10.0;
    assert!(spring(opts).unwrap().abs() < 1e-9);
    opts.frame = 20.0;
    assert!(spring(opts).unwrap() > 0.0);
}

#[test]
fn from_to_are_remapped() {
    let mut opts = SpringOpts::new(400.0, 40.0);
    opts.from = 2.0;
    opts.to = -1.0;
    assert!((spring(opts).unwrap() + 1.0).abs() < 1e-2);
}

#[test]
fn measure_spring_is_finite_and_reacts_to_damping() {
    let soft = measure_spring(40.0, SpringConfig::default()).unwrap();
    let firm = measure_spring(
        40.0,
        SpringConfig {
            damping: 20.0,
            mass: 0.8,
            ..SpringConfig::default()
        },
    )
    .unwrap();
    assert!(soft > 20);
    assert!(firm < soft);
}

#[test]
fn invalid_config_is_rejected() {
    let mut opts = SpringOpts::new(5.0, 40.0);
    opts.config.damping = 0.0;
    assert!(spring(opts).is_err());
    let mut opts = SpringOpts::new(5.0, 0.0);
    opts.config.damping = 10.0;
    assert!(spring(opts).is_err());
}
