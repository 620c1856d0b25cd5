//! Delimited file writing.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use encoding_rs::{EncoderResult, Encoding, UTF_8};
use tracing::{info, warn};

use listing_model::{CsvDialect, Row, TextEncoding};

use crate::error::{OutputError, Result};

/// Byte written in place of characters the target encoding lacks.
const REPLACEMENT: u8 = b'?';

/// Outcome of a successful write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Rows written, header included.
    pub rows: usize,
    /// Bytes written to the file.
    pub bytes: usize,
    /// Characters replaced because the encoding cannot represent them.
    pub replaced_chars: usize,
}

/// Serializes `rows` and writes them to `path`.
///
/// The file is created or truncated. A failed write is not retried and any
/// bytes already written stay on disk.
///
/// # Errors
///
/// Returns [`OutputError::Serialize`] if a row cannot be serialized and
/// [`OutputError::FileWrite`] if the file cannot be created or written.
pub fn write_rows(path: &Path, rows: &[Row], dialect: &CsvDialect) -> Result<WriteSummary> {
    info!(path = %path.display(), rows = rows.len(), "Writing data");

    let text = render_rows(rows, dialect)?;
    let (bytes, replaced_chars) = encode_text(&text, dialect.encoding);
    if replaced_chars > 0 {
        warn!(
            path = %path.display(),
            replaced_chars,
            encoding = dialect.encoding.label(),
            "Characters not representable in the output encoding were replaced"
        );
    }

    fs::write(path, &bytes).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "Done");
    Ok(WriteSummary {
        rows: rows.len(),
        bytes: bytes.len(),
        replaced_chars,
    })
}

/// Serializes rows to text using the dialect's delimiter and quoting.
///
/// Quote and escape characters inside values are both prefixed with the
/// dialect's escape character, so the output reads back with that dialect.
///
/// # Errors
///
/// Returns [`OutputError::Serialize`] if the CSV writer fails.
pub fn render_rows(rows: &[Row], dialect: &CsvDialect) -> Result<String> {
    let quote_style = if dialect.quote_all {
        QuoteStyle::Always
    } else {
        QuoteStyle::Necessary
    };
    // Without double quoting, the writer also quotes any field holding the
    // escape character, so pre-escaped values always land inside quotes.
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .quote_style(quote_style)
        .double_quote(false)
        .escape(dialect.escape)
        .from_writer(Vec::new());

    for row in rows {
        let fields: Vec<Cow<'_, str>> = row
            .iter()
            .map(|value| escape_escapes(value, dialect.escape))
            .collect();
        writer.write_record(fields.iter().map(|field| field.as_bytes()))?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    // Every field came from a `String`, so the buffer is valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Doubles the escape character; the CSV writer only escapes quotes.
fn escape_escapes(value: &str, escape: u8) -> Cow<'_, str> {
    let escape = char::from(escape);
    if value.contains(escape) {
        let mut doubled = String::with_capacity(value.len() + 1);
        doubled.push(escape);
        doubled.push(escape);
        Cow::Owned(value.replace(escape, &doubled))
    } else {
        Cow::Borrowed(value)
    }
}

/// Encodes text, replacing unrepresentable characters with `?`.
///
/// Returns the encoded bytes and the number of replaced characters.
pub fn encode_text(text: &str, encoding: TextEncoding) -> (Vec<u8>, usize) {
    match encoding {
        TextEncoding::Utf8 => encode_with(UTF_8, text),
        TextEncoding::Latin1 => encode_latin1(text),
    }
}

/// ISO-8859-1 is the first 256 code points, one byte each.
fn encode_latin1(text: &str) -> (Vec<u8>, usize) {
    let mut replaced = 0usize;
    let bytes = text
        .chars()
        .map(|c| {
            u8::try_from(c).unwrap_or_else(|_| {
                replaced += 1;
                REPLACEMENT
            })
        })
        .collect();
    (bytes, replaced)
}

fn encode_with(encoding: &'static Encoding, text: &str) -> (Vec<u8>, usize) {
    let mut encoder = encoding.new_encoder();
    let mut output = Vec::with_capacity(text.len());
    let mut remaining = text;
    let mut replaced = 0usize;

    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(remaining.len())
            .unwrap_or(remaining.len());
        output.reserve(needed);

        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(remaining, &mut output, true);
        remaining = &remaining[read..];

        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => {
                replaced += 1;
                output.push(REPLACEMENT);
            }
        }
    }

    (output, replaced)
}
