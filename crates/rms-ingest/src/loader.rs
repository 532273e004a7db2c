//! CSV loading with encoding fallback and tolerant row handling.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::encoding::{ENCODING_CANDIDATES, decode_with_fallback};
use crate::error::{IngestError, Result};

/// A parsed delimited file: the header row plus verbatim cell text.
///
/// Cell values are kept exactly as they appear in the file; trimming and type
/// coercion belong to the normalization stage.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Rows the parser rejected or that carried more fields than the header.
    pub skipped_rows: usize,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a delimited text file with a header row into a [`RawTable`].
///
/// The byte stream is decoded with the fixed candidate list of
/// [`ENCODING_CANDIDATES`], UTF-8 first. Malformed rows and rows wider than
/// the header are skipped and counted, never fatal; rows narrower than the
/// header are padded with empty cells; blank lines are dropped.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] / [`IngestError::FileRead`] for I/O
///   failures.
/// - [`IngestError::EncodingDetection`] when every candidate encoding
///   reports decode errors; the error carries the attempted list.
/// - [`IngestError::EmptyCsv`] / [`IngestError::NoHeaderDetected`] when the
///   file holds no usable header row.
pub fn load_raw_table(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let Some((text, encoding)) = decode_with_fallback(&bytes) else {
        return Err(IngestError::EncodingDetection {
            path: path.to_path_buf(),
            attempted: ENCODING_CANDIDATES.iter().map(|label| (*label).to_string()).collect(),
        });
    };
    debug!(path = %path.display(), encoding, "decoded export");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut skipped_rows = 0usize;

    for (index, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                skipped_rows += 1;
                warn!(row = index + 1, %error, "skipping unparsable row");
                continue;
            }
        };

        if headers.is_none() {
            headers = Some(
                record
                    .iter()
                    .map(|cell| cell.trim_matches('\u{feff}').to_string())
                    .collect(),
            );
            continue;
        }
        let width = headers.as_ref().map_or(0, Vec::len);

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if record.len() > width {
            skipped_rows += 1;
            warn!(
                row = index + 1,
                fields = record.len(),
                expected = width,
                "skipping row wider than header"
            );
            continue;
        }

        let mut row = Vec::with_capacity(width);
        for idx in 0..width {
            row.push(record.get(idx).unwrap_or("").to_string());
        }
        rows.push(row);
    }

    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    if headers.iter().all(|name| name.trim().is_empty()) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    debug!(
        rows = rows.len(),
        skipped = skipped_rows,
        columns = headers.len(),
        "loaded export"
    );
    Ok(RawTable {
        headers,
        rows,
        skipped_rows,
    })
}
