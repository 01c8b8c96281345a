use std::collections::BTreeSet;
use std::ops::Range;

use crate::data::record::Record;
use crate::foundation::core::Timestamp;

/// Immutable, timestamp-ordered collection of records.
///
/// Construction stable-sorts by timestamp, so records sharing a timestamp keep the order they
/// were ingested in. After that the store is read-only.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    // one span per distinct timestamp, ascending
    spans: Vec<(Timestamp, Range<usize>)>,
}

impl RecordStore {
    /// Ingest records.
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.timestamp);

        let mut spans: Vec<(Timestamp, Range<usize>)> = Vec::new();
        for (i, r) in records.iter().enumerate() {
            if let Some((ts, span)) = spans.last_mut()
                && *ts == r.timestamp
            {
                span.end = i + 1;
                continue;
            }
            spans.push((r.timestamp, i..i + 1));
        }

        Self { records, spans }
    }

    /// Total record count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return `true` when no records were ingested.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, timestamp-ordered.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of distinct timestamps.
    pub fn distinct_timestamps(&self) -> usize {
        self.spans.len()
    }

    /// Distinct timestamps in ascending order.
    pub fn timestamps(&self) -> impl ExactSizeIterator<Item = Timestamp> + '_ {
        self.spans.iter().map(|(ts, _)| *ts)
    }

    /// The `i`-th distinct timestamp.
    pub fn timestamp_at(&self, i: usize) -> Option<Timestamp> {
        self.spans.get(i).map(|(ts, _)| *ts)
    }

    /// Records whose timestamp equals `ts` exactly, in ingestion order. Empty when none match.
    pub fn slice(&self, ts: Timestamp) -> &[Record] {
        match self.spans.binary_search_by_key(&ts, |(t, _)| *t) {
            Ok(i) => &self.records[self.spans[i].1.clone()],
            Err(_) => &[],
        }
    }

    /// Distinct station ids present in the data.
    pub fn stations(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.station.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/store.rs"]
mod tests;
