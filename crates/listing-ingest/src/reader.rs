//! Delimited file reading with explicit dialect configuration.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::{Encoding, UTF_8};
use tracing::{debug, info};

use listing_model::{CsvDialect, Row, TextEncoding};

use crate::error::{IngestError, Result};

/// Reads every record of `path` into memory.
///
/// The file is decoded with the dialect's encoding, parsed with its
/// delimiter, quote and escape characters, and returned with blank records
/// removed. The first row is returned as-is; callers treat it as the header.
///
/// # Errors
///
/// Fails if the file is missing or unreadable, carries a byte-order mark of
/// another encoding, contains malformed text, or cannot be parsed.
pub fn read_rows(path: &Path, dialect: &CsvDialect) -> Result<Vec<Row>> {
    info!(path = %path.display(), "Reading data");

    let bytes = fs::read(path).map_err(|e| {
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

    let text = decode_text(&bytes, dialect.encoding, path)?;
    let rows = parse_rows(&text, dialect).map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = rows.len(), "Read rows");
    Ok(rows)
}

/// Decodes raw file bytes, stripping a matching byte-order mark.
///
/// # Errors
///
/// Returns [`IngestError::UnsupportedEncoding`] for a byte-order mark of a
/// different encoding (e.g. UTF-16) and [`IngestError::MalformedText`] for
/// byte sequences that are invalid in `encoding`.
pub fn decode_text(bytes: &[u8], encoding: TextEncoding, path: &Path) -> Result<String> {
    let body = match Encoding::for_bom(bytes) {
        Some((found, bom_length)) if found == UTF_8 && encoding == TextEncoding::Utf8 => {
            &bytes[bom_length..]
        }
        Some((found, _)) => {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: found.name(),
                expected: encoding.label(),
            });
        }
        None => bytes,
    };

    match encoding {
        TextEncoding::Utf8 => UTF_8
            .decode_without_bom_handling_and_without_replacement(body)
            .map(Cow::into_owned)
            .ok_or_else(|| IngestError::MalformedText {
                path: path.to_path_buf(),
                encoding: encoding.label(),
            }),
        // Every byte is the code point of the same value.
        TextEncoding::Latin1 => Ok(body.iter().copied().map(char::from).collect()),
    }
}

/// Parses decoded text into rows.
///
/// Records may have differing field counts; records whose fields are all
/// blank are skipped.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] for malformed records.
pub fn parse_rows(text: &str, dialect: &CsvDialect) -> std::result::Result<Vec<Row>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .escape(Some(dialect.escape))
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row: Row = record.iter().map(str::to_string).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            debug!(record = idx + 1, "Skipping blank record");
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}
