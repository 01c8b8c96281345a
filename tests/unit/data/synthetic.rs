use super::*;
use crate::data::record::Record;
use crate::data::store::RecordStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn one_record_per_station_per_hour() {
    let cfg = SyntheticConfig {
        days: 2,
        ..SyntheticConfig::default()
    };
    let records = generate_records(&cfg, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(records.len(), 2 * 24 * 12);

    let store = RecordStore::new(records);
    assert_eq!(store.distinct_timestamps(), 48);
    assert_eq!(store.slice(store.timestamp_at(5).unwrap()).len(), 12);
    assert_eq!(store.timestamp_at(0), Some(cfg.start));
}

#[test]
fn values_respect_physical_floors() {
    let cfg = SyntheticConfig {
        days: 3,
        stations: vec!["x".to_owned(), "y".to_owned()],
        ..SyntheticConfig::default()
    };
    for r in generate_records(&cfg, &mut StdRng::seed_from_u64(9)).unwrap() {
        for v in [r.pm25, r.so2, r.no2, r.co, r.o3, r.rainfall] {
            assert!(v.unwrap() >= 0.0);
        }
        assert!(r.wind_speed.unwrap() >= 3.0);
        let wd = r.wind_direction.unwrap();
        assert!((0.0..360.0).contains(&wd));
        assert!((r.temperature.unwrap() - r.dew_point.unwrap() - 5.0).abs() < 1e-9);
        let ratio = r.pm10.unwrap() / r.pm25.unwrap().max(f64::MIN_POSITIVE);
        assert!(r.pm25.unwrap() == 0.0 || (1.2 - 1e-9..=1.8 + 1e-9).contains(&ratio));
    }
}

#[test]
fn weather_noise_matches_documented_means() {
    let cfg = SyntheticConfig {
        days: 30,
        ..SyntheticConfig::default()
    };
    let records = generate_records(&cfg, &mut StdRng::seed_from_u64(11)).unwrap();
    let n = records.len() as f64;
    let mean = |f: fn(&Record) -> f64| records.iter().map(f).sum::<f64>() / n;

    let rain = mean(|r| r.rainfall.unwrap());
    let wind = mean(|r| r.wind_speed.unwrap());
    let pressure = mean(|r| r.pressure.unwrap());
    assert!((0.45..0.55).contains(&rain), "rain mean {rain}");
    assert!((4.8..5.2).contains(&wind), "wind mean {wind}");
    assert!((1012.0..1014.0).contains(&pressure), "pressure mean {pressure}");
}

#[test]
fn same_seed_same_records() {
    let cfg = SyntheticConfig {
        days: 1,
        ..SyntheticConfig::default()
    };
    let a = generate_records(&cfg, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate_records(&cfg, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn validate_rejects_empty_runs() {
    assert!(SyntheticConfig::default().validate().is_ok());
    let zero_days = SyntheticConfig {
        days: 0,
        ..SyntheticConfig::default()
    };
    assert!(zero_days.validate().is_err());
    let no_stations = SyntheticConfig {
        stations: Vec::new(),
        ..SyntheticConfig::default()
    };
    assert!(no_stations.validate().is_err());
}
