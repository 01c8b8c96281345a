use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AirglyphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(AirglyphError::data("x").to_string().contains("data error:"));
    assert!(
        AirglyphError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        AirglyphError::scheduler("x")
            .to_string()
            .contains("scheduler error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AirglyphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
