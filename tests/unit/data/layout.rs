use super::*;
use crate::data::record::Record;
use chrono::NaiveDate;

#[test]
fn beijing_layout_has_all_twelve_stations() {
    let layout = StationLayout::beijing();
    assert_eq!(layout.len(), 12);
    assert_eq!(layout.position("Dongsi"), Some(Point::new(4.0, 5.0)));
    assert_eq!(layout.position("Atlantis"), None);
}

#[test]
fn missing_stations_lists_unknown_ids_once() {
    let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let store = RecordStore::new(vec![
        Record::new(ts, "Dongsi"),
        Record::new(ts, "Atlantis"),
        Record::new(ts, "Atlantis"),
        Record::new(ts, "Shunyi"),
    ]);
    assert_eq!(StationLayout::beijing().missing_stations(&store), vec!["Atlantis"]);
    assert_eq!(
        StationLayout::default().missing_stations(&store),
        vec!["Atlantis", "Dongsi", "Shunyi"]
    );
}
