use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::data::record::{Field, Record};
use crate::foundation::core::Timestamp;
use crate::foundation::error::{AirglyphError, AirglyphResult};
use crate::foundation::math::wrap_degrees;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Result of reading a tabular source.
#[derive(Clone, Debug, Default)]
pub struct TableRead {
    /// Parsed records in file order.
    pub records: Vec<Record>,
    /// Data rows dropped because their timestamp or station could not be read.
    pub skipped_rows: usize,
}

#[derive(Clone, Copy, Debug)]
enum TimeColumns {
    Datetime(usize),
    Parts {
        year: usize,
        month: usize,
        day: usize,
        hour: usize,
    },
}

#[derive(Clone, Debug)]
struct Columns {
    time: TimeColumns,
    station: usize,
    fields: Vec<(Field, usize)>,
}

impl Columns {
    fn resolve(header: &StringRecord) -> AirglyphResult<Self> {
        let header: Vec<&str> = header
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}'))
            .collect();
        let find = |name: &str| header.iter().position(|h| h.eq_ignore_ascii_case(name));

        let time = if let Some(i) = find("datetime") {
            TimeColumns::Datetime(i)
        } else {
            match (find("year"), find("month"), find("day"), find("hour")) {
                (Some(year), Some(month), Some(day), Some(hour)) => TimeColumns::Parts {
                    year,
                    month,
                    day,
                    hour,
                },
                _ => {
                    return Err(AirglyphError::data(
                        "table needs a 'datetime' column or 'year,month,day,hour' columns",
                    ));
                }
            }
        };
        let station =
            find("station").ok_or_else(|| AirglyphError::data("table has no 'station' column"))?;

        // exact header match first, then case-insensitive
        let fields = Field::ALL
            .iter()
            .filter_map(|&f| {
                header
                    .iter()
                    .position(|h| *h == f.column())
                    .or_else(|| find(f.column()))
                    .map(|i| (f, i))
            })
            .collect();

        Ok(Self {
            time,
            station,
            fields,
        })
    }

    fn timestamp(&self, cells: &StringRecord) -> Option<Timestamp> {
        match self.time {
            TimeColumns::Datetime(i) => parse_datetime(cells.get(i)?),
            TimeColumns::Parts {
                year,
                month,
                day,
                hour,
            } => {
                let y: i32 = cells.get(year)?.parse().ok()?;
                let m: u32 = cells.get(month)?.parse().ok()?;
                let d: u32 = cells.get(day)?.parse().ok()?;
                let h: u32 = cells.get(hour)?.parse().ok()?;
                NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(h, 0, 0)
            }
        }
    }
}

/// Read records from a CSV file with the columns
/// `datetime|year,month,day,hour, station, PM2.5, PM10, SO2, NO2, CO, O3, TEMP, PRES, DEWP, RAIN,
/// WSPM, wd`.
///
/// Measurement columns that are absent from the header are treated as missing for every row.
pub fn read_records(path: &Path) -> AirglyphResult<TableRead> {
    let f = File::open(path)
        .map_err(|e| AirglyphError::data(format!("open '{}': {e}", path.display())))?;
    parse_records(f)
}

/// Parse CSV text; see [`read_records`].
///
/// Fields may be quoted and lines may end in CRLF. Blank lines are ignored. `NA`, `NaN`, `null`
/// and empty cells read as missing. `wd` accepts degrees or a 16-point compass label, which is
/// converted from a compass bearing to the math-convention angle used everywhere else.
pub fn parse_records<R: Read>(reader: R) -> AirglyphResult<TableRead> {
    let mut rows = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
        .into_records();

    let header = match rows.next() {
        Some(row) => row.map_err(|e| AirglyphError::data(format!("read header: {e}")))?,
        None => return Err(AirglyphError::data("table is empty (no header row)")),
    };
    let columns = Columns::resolve(&header)?;

    let mut out = TableRead::default();
    for row in rows {
        let cells = row.map_err(|e| AirglyphError::data(format!("read row: {e}")))?;
        let line = cells.position().map_or(0, |p| p.line());

        let Some(timestamp) = columns.timestamp(&cells) else {
            tracing::trace!(line, "skipping row without a readable timestamp");
            out.skipped_rows += 1;
            continue;
        };
        let station = cells.get(columns.station).unwrap_or_default();
        if station.is_empty() {
            tracing::trace!(line, "skipping row without a station");
            out.skipped_rows += 1;
            continue;
        }

        let mut record = Record::new(timestamp, station);
        for &(field, i) in &columns.fields {
            let cell = cells.get(i).unwrap_or_default();
            let value = match field {
                Field::WindDirection => parse_direction(cell),
                _ => parse_number(cell),
            };
            record.set(field, value);
        }
        out.records.push(record);
    }

    if out.skipped_rows > 0 {
        tracing::warn!(skipped = out.skipped_rows, "dropped unreadable table rows");
    }
    Ok(out)
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty()
        || cell.eq_ignore_ascii_case("na")
        || cell.eq_ignore_ascii_case("nan")
        || cell.eq_ignore_ascii_case("null")
}

fn parse_number(cell: &str) -> Option<f64> {
    if is_missing(cell) {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_direction(cell: &str) -> Option<f64> {
    if let Some(deg) = parse_number(cell) {
        return Some(wrap_degrees(deg));
    }
    compass_to_degrees(cell)
}

/// Convert a 16-point compass label (bearing, clockwise from north) to a math-convention angle.
pub(crate) fn compass_to_degrees(label: &str) -> Option<f64> {
    let k = COMPASS_POINTS
        .iter()
        .position(|p| p.eq_ignore_ascii_case(label))?;
    let bearing = 22.5 * k as f64;
    Some(wrap_degrees(90.0 - bearing))
}

fn parse_datetime(cell: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(cell, fmt).ok())
}

#[cfg(test)]
#[path = "../../tests/unit/data/table.rs"]
mod tests;
