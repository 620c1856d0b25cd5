//! Product-to-offer record transformation.
//!
//! The transformer copies names and descriptions, builds offer URLs from the
//! link and SKU, and runs the price and date normalizers over the selling
//! price and description fields.

pub mod transformer;

pub use transformer::{OFFER_ID_PARAM, RecordTransformer, TransformOutput, TransformStats};
