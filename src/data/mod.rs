//! Sensor records and where they come from.
//!
//! Records are immutable after ingestion. A `RecordStore` orders them by timestamp once and then
//! only hands out shared slices.

pub(crate) mod layout;
pub(crate) mod record;
pub(crate) mod source;
pub(crate) mod store;
pub(crate) mod synthetic;
pub(crate) mod table;
