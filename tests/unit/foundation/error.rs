use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OrreryError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        OrreryError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        OrreryError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        OrreryError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn missing_asset_names_the_path() {
    let err = OrreryError::missing_asset("public/scene1-narration.m4a");
    assert_eq!(
        err.to_string(),
        "missing asset 'public/scene1-narration.m4a'"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OrreryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
