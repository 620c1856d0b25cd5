//! Data model for the listing converter.
//!
//! - **row**: raw rows and the typed input/output row views
//! - **schema**: fixed column positions of the input and output files
//! - **dialect**: delimiter, quoting and encoding settings for CSV files

pub mod dialect;
pub mod row;
pub mod schema;

pub use dialect::{CsvDialect, TextEncoding};
pub use row::{InputRow, OutputRow, Row};
pub use schema::{INPUT_COLUMN_COUNT, InputColumn, OUTPUT_COLUMN_COUNT, OutputColumn, output_header};
