use std::path::{Path, PathBuf};

use rand::Rng;

use crate::data::store::RecordStore;
use crate::data::synthetic::{SyntheticConfig, generate_records};
use crate::data::table::read_records;
use crate::foundation::error::AirglyphResult;

/// Where the records of a run came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataOrigin {
    /// Parsed from a tabular file.
    File(PathBuf),
    /// Produced by the synthetic generator, with the reason the file was not used.
    Synthetic {
        /// Why no file data was used.
        reason: String,
    },
}

/// Load records from `path`, falling back to the synthetic generator when the path is absent,
/// missing or unreadable.
///
/// A file that parses but contains no rows is *not* replaced; the caller sees an empty store and
/// the scheduler refuses to start. Errors only when the generator itself cannot be built.
pub fn load_records<R: Rng>(
    path: Option<&Path>,
    synthetic: &SyntheticConfig,
    rng: &mut R,
) -> AirglyphResult<(RecordStore, DataOrigin)> {
    let reason = match path {
        None => "no data file configured".to_owned(),
        Some(p) if !p.exists() => format!("data file '{}' not found", p.display()),
        Some(p) => match read_records(p) {
            Ok(table) => {
                tracing::info!(
                    path = %p.display(),
                    records = table.records.len(),
                    skipped = table.skipped_rows,
                    "loaded records"
                );
                return Ok((RecordStore::new(table.records), DataOrigin::File(p.to_path_buf())));
            }
            Err(e) => format!("failed to read '{}': {e}", p.display()),
        },
    };

    tracing::warn!(%reason, days = synthetic.days, "using synthetic records");
    let records = generate_records(synthetic, rng)?;
    tracing::info!(
        records = records.len(),
        stations = synthetic.stations.len(),
        "generated synthetic records"
    );
    Ok((RecordStore::new(records), DataOrigin::Synthetic { reason }))
}

#[cfg(test)]
#[path = "../../tests/unit/data/source.rs"]
mod tests;
