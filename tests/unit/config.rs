use super::*;

#[test]
fn defaults_are_valid_and_abstract() {
    let cfg = ArtConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.variant, Variant::Abstract);
    assert_eq!(cfg.interval(), Duration::from_millis(1000));
    assert_eq!(cfg.canvas, Canvas::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = ArtConfig::from_json(
        r#"{
            "variant": "stations",
            "seed": 42,
            "synth": { "polygon": { "threshold": 70.0 } },
            "synthetic": { "days": 2 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.variant, Variant::Stations);
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.interval(), Duration::from_millis(200));
    assert_eq!(cfg.synth.polygon.threshold, 70.0);
    assert_eq!(cfg.synth.polygon.max_sides, 8);
    assert_eq!(cfg.synthetic.days, 2);
    assert_eq!(cfg.synthetic.stations.len(), 12);
    assert_eq!(
        cfg.composer_params(),
        ComposerParams::for_variant(Variant::Stations)
    );
    assert_eq!(cfg.composer().unwrap().variant(), Variant::Stations);
}

#[test]
fn interval_override_wins() {
    let cfg = ArtConfig::from_json(r#"{ "interval_ms": 50 }"#).unwrap();
    assert_eq!(cfg.interval(), Duration::from_millis(50));
    assert!(ArtConfig::from_json(r#"{ "interval_ms": 0 }"#).is_err());
}

#[test]
fn invalid_sections_are_reported() {
    let err = ArtConfig::from_json(r#"{ "canvas": { "width": 0, "height": 10 } }"#)
        .unwrap_err()
        .to_string();
    assert!(err.starts_with("validation error:"));

    let err = ArtConfig::from_json(r#"{ "variant": "cubist" }"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains("invalid config json"));
}

#[test]
fn load_reads_a_file() {
    let path = std::env::temp_dir().join(format!("airglyph-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "seed": 9 }"#).unwrap();
    let cfg = ArtConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(cfg.seed, Some(9));

    assert!(ArtConfig::load(Path::new("/nonexistent/airglyph.json")).is_err());
}
