//! Row-level transformation.

use serde::Serialize;
use tracing::{debug, warn};

use listing_model::{InputColumn, InputRow, OutputRow, Row, output_header};
use listing_normalize::{DateNormalizer, Normalizer, PriceNormalizer};

/// Query marker placed between the link and the SKU in offer URLs.
pub const OFFER_ID_PARAM: &str = "?id=";

/// Counters collected while transforming a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransformStats {
    /// Data rows transformed (header excluded).
    pub rows: usize,
    /// Rows whose selling price contained no recognizable price.
    pub prices_not_found: usize,
    /// Rows whose description contained no recognizable date.
    pub dates_not_found: usize,
    /// Rows with fewer fields than the input schema.
    pub short_rows: usize,
}

/// Transformed rows, header first, and the batch counters.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub rows: Vec<Row>,
    pub stats: TransformStats,
}

/// Converts product rows into offer rows.
#[derive(Debug, Clone, Default)]
pub struct RecordTransformer {
    price: PriceNormalizer,
    date: DateNormalizer,
}

impl RecordTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transforms a single product record.
    pub fn transform_row(&self, input: &InputRow) -> OutputRow {
        OutputRow {
            name: input.product_name.clone(),
            offer_url: offer_url(&input.link, &input.sku),
            price: self.price.normalize(&input.selling_price),
            published: self.date.normalize(&input.description),
            description: input.description.clone(),
        }
    }

    /// Transforms a whole file worth of rows.
    ///
    /// The first row is the input header and is replaced by the output header.
    /// Every remaining row is transformed in order.
    pub fn transform_all(&self, rows: &[Row]) -> TransformOutput {
        let mut stats = TransformStats::default();
        let mut output = Vec::with_capacity(rows.len().max(1));
        output.push(output_header());

        for (idx, fields) in rows.iter().enumerate().skip(1) {
            if InputRow::missing_fields(fields) > 0 {
                stats.short_rows += 1;
                let missing: Vec<&str> = InputColumn::missing_from(fields.len())
                    .iter()
                    .map(|column| column.label())
                    .collect();
                warn!(
                    row = idx + 1,
                    fields = fields.len(),
                    missing = ?missing,
                    "Row has fewer fields than expected - padding with empty values"
                );
            }

            let record = self.transform_row(&InputRow::from_fields(fields));
            if record.price.is_empty() {
                stats.prices_not_found += 1;
            }
            if record.published.is_empty() {
                stats.dates_not_found += 1;
            }
            debug!(
                row = idx + 1,
                price = %record.price,
                published = %record.published,
                "Transformed row"
            );

            stats.rows += 1;
            output.push(record.into_row());
        }

        TransformOutput {
            rows: output,
            stats,
        }
    }
}

fn offer_url(link: &str, sku: &str) -> String {
    format!("{link}{OFFER_ID_PARAM}{sku}")
}
