//! Product listing ingestion.
//!
//! Reads the source product file into memory as positional rows.
//!
//! # Features
//!
//! - **Encoding checks**: rejects byte-order marks of other encodings and
//!   malformed text before parsing
//! - **Dialects**: delimiter, quote and escape characters come from a
//!   [`CsvDialect`](listing_model::CsvDialect)
//! - **Blank lines**: records without any content are skipped
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use listing_ingest::read_rows;
//! use listing_model::CsvDialect;
//!
//! let rows = read_rows(Path::new("test-files/products.csv"), &CsvDialect::input())?;
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Row Reading ===
pub use reader::{decode_text, parse_rows, read_rows};
