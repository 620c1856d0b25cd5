//! Fixed column layouts.
//!
//! Input columns are addressed by position; the header text of the input file
//! is never consulted.

use serde::{Deserialize, Serialize};

use crate::row::Row;

/// Number of fields in an input row.
pub const INPUT_COLUMN_COUNT: usize = 5;

/// Number of fields in an output row.
pub const OUTPUT_COLUMN_COUNT: usize = 5;

/// Columns of the source product file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputColumn {
    ProductName,
    Link,
    Sku,
    SellingPrice,
    Description,
}

impl InputColumn {
    /// All input columns in file order.
    pub const ALL: [InputColumn; INPUT_COLUMN_COUNT] = [
        InputColumn::ProductName,
        InputColumn::Link,
        InputColumn::Sku,
        InputColumn::SellingPrice,
        InputColumn::Description,
    ];

    /// Zero-based field position.
    pub fn index(self) -> usize {
        match self {
            InputColumn::ProductName => 0,
            InputColumn::Link => 1,
            InputColumn::Sku => 2,
            InputColumn::SellingPrice => 3,
            InputColumn::Description => 4,
        }
    }

    /// Columns a record of `len` fields does not reach.
    pub fn missing_from(len: usize) -> &'static [InputColumn] {
        &Self::ALL[len.min(INPUT_COLUMN_COUNT)..]
    }

    /// Header text conventionally used by source files.
    pub fn label(self) -> &'static str {
        match self {
            InputColumn::ProductName => "Product Name",
            InputColumn::Link => "Link",
            InputColumn::Sku => "SKU",
            InputColumn::SellingPrice => "Selling-Price",
            InputColumn::Description => "description",
        }
    }
}

/// Columns of the converted offer file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputColumn {
    Name,
    OfferUrl,
    Price,
    Published,
    Description,
}

impl OutputColumn {
    /// All output columns in file order.
    pub const ALL: [OutputColumn; OUTPUT_COLUMN_COUNT] = [
        OutputColumn::Name,
        OutputColumn::OfferUrl,
        OutputColumn::Price,
        OutputColumn::Published,
        OutputColumn::Description,
    ];

    /// Zero-based field position.
    pub fn index(self) -> usize {
        match self {
            OutputColumn::Name => 0,
            OutputColumn::OfferUrl => 1,
            OutputColumn::Price => 2,
            OutputColumn::Published => 3,
            OutputColumn::Description => 4,
        }
    }

    /// Header text written to the output file.
    pub fn header(self) -> &'static str {
        match self {
            OutputColumn::Name => "name",
            OutputColumn::OfferUrl => "offerurl",
            OutputColumn::Price => "price",
            OutputColumn::Published => "published",
            OutputColumn::Description => "description",
        }
    }
}

/// The header row that replaces the input header.
pub fn output_header() -> Row {
    OutputColumn::ALL
        .iter()
        .map(|column| column.header().to_string())
        .collect()
}
