//! Raw rows and typed row views.

use serde::{Deserialize, Serialize};

use crate::schema::{INPUT_COLUMN_COUNT, InputColumn};

/// One decoded CSV record.
pub type Row = Vec<String>;

/// A product record read from the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    pub product_name: String,
    pub link: String,
    pub sku: String,
    pub selling_price: String,
    pub description: String,
}

impl InputRow {
    /// Builds an input row from positional fields.
    ///
    /// Missing trailing fields become empty strings; extra fields are ignored.
    pub fn from_fields(fields: &[String]) -> Self {
        let field = |column: InputColumn| fields.get(column.index()).cloned().unwrap_or_default();
        Self {
            product_name: field(InputColumn::ProductName),
            link: field(InputColumn::Link),
            sku: field(InputColumn::Sku),
            selling_price: field(InputColumn::SellingPrice),
            description: field(InputColumn::Description),
        }
    }

    /// Number of fields `fields` lacks to fill every input column.
    pub fn missing_fields(fields: &[String]) -> usize {
        INPUT_COLUMN_COUNT.saturating_sub(fields.len())
    }
}

/// An offer record written to the target file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub name: String,
    pub offer_url: String,
    pub price: String,
    pub published: String,
    pub description: String,
}

impl OutputRow {
    /// Positional fields in output column order.
    pub fn into_row(self) -> Row {
        vec![
            self.name,
            self.offer_url,
            self.price,
            self.published,
            self.description,
        ]
    }
}
