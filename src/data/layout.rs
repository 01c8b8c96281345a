use std::collections::BTreeMap;

use crate::data::store::RecordStore;
use crate::foundation::core::Point;

/// The twelve monitoring stations of the Beijing multi-site dataset, with their map positions.
pub const BEIJING_STATIONS: [(&str, f64, f64); 12] = [
    ("Aotizhongxin", 2.0, 6.0),
    ("Changping", 1.0, 7.0),
    ("Dingling", 0.5, 6.5),
    ("Dongsi", 4.0, 5.0),
    ("Guanyuan", 3.0, 4.0),
    ("Gucheng", 2.0, 3.0),
    ("Huairou", 1.0, 5.0),
    ("Nongzhanguan", 5.0, 4.0),
    ("Shunyi", 6.0, 6.0),
    ("Tiantan", 4.0, 3.0),
    ("Wanliu", 3.0, 2.0),
    ("Wanshouxigong", 2.0, 1.0),
];

/// Static mapping from station id to a fixed position in domain space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StationLayout {
    positions: BTreeMap<String, Point>,
}

impl StationLayout {
    /// Build a layout from `(station, position)` pairs. Later duplicates win.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, Point)>) -> Self {
        Self {
            positions: entries
                .into_iter()
                .map(|(name, p)| (name.into(), p))
                .collect(),
        }
    }

    /// Layout of [`BEIJING_STATIONS`].
    pub fn beijing() -> Self {
        Self::new(
            BEIJING_STATIONS
                .iter()
                .map(|&(name, x, y)| (name, Point::new(x, y))),
        )
    }

    /// Position of `station`, if it has a layout entry.
    pub fn position(&self, station: &str) -> Option<Point> {
        self.positions.get(station).copied()
    }

    /// Number of stations with a position.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Return `true` when no station has a position.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Stations that occur in `store` but have no layout entry, sorted.
    ///
    /// Those records are skipped for station markers; everything else still uses them.
    pub fn missing_stations<'a>(&self, store: &'a RecordStore) -> Vec<&'a str> {
        store
            .stations()
            .into_iter()
            .filter(|s| !self.positions.contains_key(*s))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/layout.rs"]
mod tests;
