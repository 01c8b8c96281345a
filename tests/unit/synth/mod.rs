use super::*;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::record::Field;
use crate::geometry::primitive::PrimitiveKind;

fn slice(n: usize, wind: f64, o3: f64) -> Vec<Record> {
    let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (0..n)
        .map(|i| {
            Record::new(ts, format!("s{i}"))
                .with(Field::Pm25, 80.0)
                .with(Field::So2, 20.0)
                .with(Field::No2, 40.0)
                .with(Field::Co, 1.0)
                .with(Field::O3, o3)
                .with(Field::Temperature, 10.0)
                .with(Field::DewPoint, 5.0)
                .with(Field::WindSpeed, wind)
                .with(Field::WindDirection, 45.0)
        })
        .collect()
}

fn kinds(prims: &[Primitive]) -> Vec<PrimitiveKind> {
    prims.iter().map(Primitive::kind).collect()
}

#[test]
fn rule_major_order_with_all_rules_firing() {
    let mut rng = StdRng::seed_from_u64(11);
    let out = synthesize(&slice(3, 5.0, 90.0), &SynthParams::default(), &mut rng);
    let k = kinds(&out);
    assert_eq!(k.len(), 15);
    assert!(k[0..3].iter().all(|k| *k == PrimitiveKind::Circle));
    assert!(k[3..6].iter().all(|k| *k == PrimitiveKind::Triangle));
    assert!(k[6..9].iter().all(|k| *k == PrimitiveKind::Rectangle));
    assert!(k[9..12].iter().all(|k| *k == PrimitiveKind::Line));
    assert!(k[12..15].iter().all(|k| *k == PrimitiveKind::Polygon));
}

#[test]
fn conditional_rules_stay_silent_below_thresholds() {
    let mut rng = StdRng::seed_from_u64(12);
    let out = synthesize(&slice(4, 2.0, 50.0), &SynthParams::default(), &mut rng);
    assert_eq!(out.len(), 12);
    assert!(
        out.iter()
            .all(|p| !matches!(p.kind(), PrimitiveKind::Line | PrimitiveKind::Polygon))
    );
}

#[test]
fn same_seed_same_geometry() {
    let records = slice(5, 3.0, 70.0);
    let params = SynthParams::default();
    let a = synthesize(&records, &params, &mut StdRng::seed_from_u64(99));
    let b = synthesize(&records, &params, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn empty_slice_yields_nothing() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(synthesize(&[], &SynthParams::default(), &mut rng).is_empty());
}

#[test]
fn invariants_hold_for_every_primitive() {
    let mut rng = StdRng::seed_from_u64(13);
    let out = synthesize(&slice(12, 6.0, 150.0), &SynthParams::default(), &mut rng);
    for p in &out {
        assert!((0.0..=1.0).contains(&p.alpha()));
        assert!((0.0..360.0).contains(&p.rotation()));
    }
}
