use super::*;

#[test]
fn columns_are_evenly_spaced_and_centered() {
    let cols = SizeComparison::column_centers(Canvas::DESIGN);
    let step = cols[1] - cols[0];
    assert!(cols.windows(2).all(|w| ((w[1] - w[0]) - step).abs() < 1e-9));
    assert!(((cols[0] + cols[7]) / 2.0 - 960.0).abs() < 1e-9);
    // Jupiter's disc fits its column.
    assert!(step - GAP >= 200.0);
}

#[test]
fn entrances_are_staggered() {
    let fps = 40.0;
    assert_eq!(SizeComparison::entrance(0.0, 0, fps).unwrap(), 0.0);
    let first = SizeComparison::entrance(10.0, 0, fps).unwrap();
    let last = SizeComparison::entrance(10.0, 7, fps).unwrap();
    assert!(first > 0.0);
    assert_eq!(last, 0.0);
    assert!((SizeComparison::entrance(399.0, 7, fps).unwrap() - 1.0).abs() < 0.01);
}

#[test]
fn title_fades_in_over_forty_frames() {
    let scene = SizeComparison::new();
    assert_eq!(scene.draw(0.0, 40.0).unwrap().with_tag("title").count(), 0);
    let half = scene.draw(20.0, 40.0).unwrap();
    assert!((half.with_tag("title").next().unwrap().opacity - 0.5).abs() < 1e-6);
    let full = scene.draw(80.0, 40.0).unwrap();
    assert_eq!(full.with_tag("title").next().unwrap().opacity, 1.0);
}

#[test]
fn all_names_visible_once_settled() {
    let dl = SizeComparison::new().draw(300.0, 40.0).unwrap();
    let names: Vec<_> = dl
        .with_tag("planet.name")
        .map(|n| match &n.shape {
            Shape::Text { text, .. } => text.clone(),
            _ => String::new(),
        })
        .collect();
    assert_eq!(
        names,
        ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
    );
}
