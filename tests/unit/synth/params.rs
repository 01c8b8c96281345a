use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn defaults_validate() {
    SynthParams::default().validate().unwrap();
}

#[test]
fn clamp_handles_nan_and_extremes() {
    let s = Span::new(0.5, 3.0);
    assert_eq!(s.clamp(f64::NAN), 0.5);
    assert_eq!(s.clamp(-1.0), 0.5);
    assert_eq!(s.clamp(100.0), 3.0);
    assert_eq!(s.clamp(1.25), 1.25);
}

#[test]
fn sample_stays_half_open() {
    let mut rng = StdRng::seed_from_u64(7);
    let s = Span::new(-2.0, 2.0);
    for _ in 0..1000 {
        let v = s.sample(&mut rng);
        assert!((-2.0..2.0).contains(&v));
    }
    assert_eq!(Span::new(1.0, 1.0).sample(&mut rng), 1.0);
}

#[test]
fn normalize_maps_into_unit_interval() {
    let t = Span::new(-20.0, 20.0);
    assert_eq!(t.normalize(-20.0), 0.0);
    assert_eq!(t.normalize(0.0), 0.5);
    assert_eq!(t.normalize(35.0), 1.0);
    assert_eq!(t.normalize(-40.0), 0.0);
    assert_eq!(Span::new(3.0, 3.0).normalize(3.0), 0.0);
}

#[test]
fn rejects_inverted_or_out_of_unit_alpha() {
    let mut p = SynthParams::default();
    p.circle.alpha = Span::new(0.4, 1.2);
    let err = p.validate().unwrap_err().to_string();
    assert!(err.starts_with("validation error:"));
    assert!(err.contains("circle.alpha"));

    let mut p = SynthParams::default();
    p.triangle.size = Span::new(2.0, 0.3);
    assert!(p.validate().unwrap_err().to_string().contains("triangle.size"));

    let mut p = SynthParams::default();
    p.polygon.max_sides = 9;
    assert!(p.validate().is_err());

    let mut p = SynthParams::default();
    p.line.scale = 0.0;
    assert!(p.validate().is_err());
}

#[test]
fn partial_json_keeps_defaults() {
    let p: SynthParams =
        serde_json::from_str(r#"{ "line": { "threshold": 3.5 } }"#).unwrap();
    assert_eq!(p.line.threshold, 3.5);
    assert_eq!(p.line.scale, 2.0);
    assert_eq!(p.circle, CircleParams::default());
}

#[test]
fn polygon_side_counts_stay_within_five_to_eight() {
    let mut p = SynthParams::default();
    p.polygon.min_sides = 4;
    let err = p.validate().unwrap_err().to_string();
    assert!(err.contains("5 <= min_sides <= max_sides <= 8"));

    let mut p = SynthParams::default();
    p.polygon.min_sides = 3;
    p.polygon.max_sides = 3;
    assert!(p.validate().is_err());

    let mut p = SynthParams::default();
    p.polygon.min_sides = 7;
    p.polygon.max_sides = 6;
    assert!(p.validate().is_err());

    let mut p = SynthParams::default();
    p.polygon.min_sides = 6;
    p.polygon.max_sides = 6;
    p.validate().unwrap();
}
