use super::*;

fn label(index: usize) -> PlanetLabel<'static> {
    PlanetLabel {
        name: "Mars",
        at: Point::new(400.0, 300.0),
        size: 16.0,
        index,
    }
}

#[test]
fn labels_are_staggered() {
    assert_eq!(label(0).start(), 50.0);
    assert_eq!(label(3).start(), 125.0);
    assert_eq!(label(3).style(125.0).unwrap().0, 0.0);
    assert_eq!(label(0).style(125.0).unwrap().0, 1.0);
}

#[test]
fn label_lifecycle() {
    let l = label(1);
    let s = l.start();
    assert!((l.style(s + 15.0).unwrap().0 - 0.5).abs() < 1e-12);
    assert_eq!(l.style(s + 15.0).unwrap().1, 5.0);
    assert_eq!(l.style(s + 100.0).unwrap(), (1.0, 0.0));
    assert_eq!(l.style(s + 180.0).unwrap().0, 0.0);
    assert_eq!(l.style(399.0).unwrap().0, 0.0);
}

#[test]
fn label_sits_below_the_planet() {
    let mut dl = DisplayList::default();
    label(0).draw(&mut dl, 120.0).unwrap();
    let rect = match &dl.with_tag("label.box").next().unwrap().shape {
        Shape::Rect { rect, .. } => *rect,
        other => panic!("unexpected {other:?}"),
    };
    assert_eq!(rect.y0, 300.0 + 8.0 + 25.0);
    assert!((rect.center().x - 400.0).abs() < 1e-9);
    assert_eq!(dl.with_tag("label").count(), 1);
}
