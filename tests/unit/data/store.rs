use super::*;
use chrono::NaiveDate;

fn ts(hour: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn distinct_timestamps_are_ascending() {
    let store = RecordStore::new(vec![
        Record::new(ts(2), "a"),
        Record::new(ts(0), "a"),
        Record::new(ts(1), "a"),
        Record::new(ts(0), "b"),
    ]);
    let all: Vec<_> = store.timestamps().collect();
    assert_eq!(all, vec![ts(0), ts(1), ts(2)]);
    assert_eq!(store.distinct_timestamps(), 3);
    assert_eq!(store.len(), 4);
    assert_eq!(store.timestamp_at(2), Some(ts(2)));
    assert_eq!(store.timestamp_at(3), None);
}

#[test]
fn slice_keeps_encounter_order_for_ties() {
    let store = RecordStore::new(vec![
        Record::new(ts(1), "late"),
        Record::new(ts(0), "first"),
        Record::new(ts(1), "zeta"),
        Record::new(ts(0), "second"),
        Record::new(ts(1), "alpha"),
    ]);
    let names: Vec<_> = store
        .slice(ts(1))
        .iter()
        .map(|r| r.station.as_str())
        .collect();
    assert_eq!(names, vec!["late", "zeta", "alpha"]);
    let names: Vec<_> = store
        .slice(ts(0))
        .iter()
        .map(|r| r.station.as_str())
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn unknown_timestamp_yields_empty_slice() {
    let store = RecordStore::new(vec![Record::new(ts(0), "a")]);
    assert!(store.slice(ts(5)).is_empty());
    assert!(RecordStore::default().slice(ts(0)).is_empty());
    assert!(RecordStore::default().is_empty());
}

#[test]
fn stations_are_deduplicated() {
    let store = RecordStore::new(vec![
        Record::new(ts(0), "b"),
        Record::new(ts(1), "a"),
        Record::new(ts(2), "b"),
    ]);
    assert_eq!(store.stations().into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
}
