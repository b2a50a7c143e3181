use super::*;

#[test]
fn checks_cycle_one_at_a_time() {
    assert_eq!(AudioCheck::active_check(0.0), None);
    assert_eq!(AudioCheck::active_check(40.0), Some((0, 0.0)));
    assert_eq!(AudioCheck::active_check(250.0), Some((1, 50.0)));
    assert_eq!(AudioCheck::active_check(519.0).map(|c| c.0), Some(2));
    assert_eq!(AudioCheck::active_check(520.0), None);
}

#[test]
fn card_always_shows_the_heading() {
    let card = AudioCheck::new();
    for f in [0.0, 100.0, 559.0] {
        let dl = card.draw(f, 40.0).unwrap();
        assert_eq!(dl.with_tag("check.heading").count(), 1);
        assert_eq!(dl.with_tag("sun.ray").count(), 8);
        dl.validate().unwrap();
    }
}

#[test]
fn checklist_item_slides_in() {
    let dl = AudioCheck::new().draw(120.0, 40.0).unwrap();
    let item = dl.with_tag("check.item").next().unwrap();
    // Local frame 80 of 160: halfway through the eased fade-in.
    let expected = Ease::CSS.apply(0.5) as f32;
    assert!((item.opacity - expected).abs() < 1e-4);
    assert_ne!(item.transform, crate::foundation::core::Affine::IDENTITY);
}
