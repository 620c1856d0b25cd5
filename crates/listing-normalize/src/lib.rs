//! Pattern-based normalization for product listing fields.
//!
//! Every normalizer runs the same two stages:
//!
//! 1. **Extract**: find the leftmost match of its pattern in the input and
//!    collect the captured groups.
//! 2. **Rewrite**: turn the groups into a canonical string, or return an empty
//!    string when nothing matched.
//!
//! # Normalizers
//!
//! - [`PriceNormalizer`]: `"1,000,00 USD"` → `"1000.00"`
//! - [`DateNormalizer`]: `"Posted on 12-31-2016"` → `"31.12.2016"`
//! - [`PatternNormalizer`]: any pattern plus a rewrite closure
//!
//! # Example
//!
//! ```
//! use listing_normalize::{DateNormalizer, Normalizer, PriceNormalizer};
//!
//! assert_eq!(PriceNormalizer::new().normalize("1.000.000 GBP"), "1000000");
//! assert_eq!(DateNormalizer::new().normalize("see 3.4.2020"), "03.04.2020");
//! assert_eq!(PriceNormalizer::new().normalize("no digits here"), "");
//! ```

pub mod date;
mod error;
pub mod normalizer;
pub mod price;

pub use date::{DateFormat, DateNormalizer};
pub use error::{NormalizeError, Result};
pub use normalizer::{MatchGroups, Normalizer, PatternNormalizer};
pub use price::PriceNormalizer;
