//! RMS export ingestion utilities.
//!
//! This crate loads device-offline CSV exports whose encoding is not known
//! in advance. Decoding tries a fixed, ordered candidate list (UTF-8 first),
//! and row-level parse failures are skipped rather than escalated: the
//! pipeline favors a degraded dataset over a hard failure on a dirty export.
//!
//! # Example
//!
//! ```ignore
//! use rms_ingest::load_raw_table;
//!
//! let table = load_raw_table(std::path::Path::new("DB.csv"))?;
//! println!("{} rows, {} skipped", table.rows.len(), table.skipped_rows);
//! ```

mod encoding;
mod error;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Encoding Fallback ===
pub use encoding::{ENCODING_CANDIDATES, decode_with_fallback};

// === CSV Loading ===
pub use loader::{RawTable, load_raw_table};
