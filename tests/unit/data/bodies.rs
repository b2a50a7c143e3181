use super::*;

#[test]
fn catalogue_is_sun_then_eight_planets() {
    let all = solar_system();
    assert_eq!(all.len(), 9);
    assert_eq!(all[0].kind, BodyKind::Sun);
    assert_eq!(
        planets().iter().map(|b| b.kind).collect::<Vec<_>>(),
        BodyKind::PLANETS.to_vec()
    );
}

#[test]
fn lookup_by_kind_matches_declaration_order() {
    for b in solar_system() {
        assert_eq!(body(b.kind).id, b.id);
    }
}

#[test]
fn orbits_increase_outwards() {
    let orbits = planets().iter().map(|b| b.orbit_radius).collect::<Vec<_>>();
    assert!(orbits.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(body(BodyKind::Sun).orbit_radius, 0.0);
}

#[test]
fn only_outer_giants_have_rings() {
    let ringed = solar_system()
        .iter()
        .filter(|b| b.has_ring)
        .map(|b| b.id)
        .collect::<Vec<_>>();
    assert_eq!(ringed, vec!["saturn", "uranus", "neptune"]);
}

#[test]
fn id_lookup() {
    let earth = body_by_id("earth").unwrap();
    assert_eq!(earth.description, "Our Blue Marble");
    assert_eq!(earth.color, Rgba8::rgb(0x6B, 0x93, 0xD6));
    assert!(body_by_id("pluto").is_none());
}
