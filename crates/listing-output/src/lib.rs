//! Offer file output.
//!
//! Serializes rows with a [`CsvDialect`](listing_model::CsvDialect) and
//! writes them in the dialect's encoding. Characters the target encoding
//! cannot represent are written as `?`.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{WriteSummary, encode_text, render_rows, write_rows};
