//! Price normalization.
//!
//! Prices arrive with `.` or `,` used both as thousands and as decimal
//! separators. The canonical form keeps only digits and a single `.` for the
//! decimal part:
//!
//! | Input        | Output     |
//! |--------------|------------|
//! | `1,000.00`   | `1000.00`  |
//! | `1000,00`    | `1000.00`  |
//! | `100.000,0`  | `100000.0` |
//! | `1,000,000`  | `1000000`  |
//! | `1,000`      | `1000`     |
//!
//! A separator is treated as decimal only when it is the last one and is
//! followed by one or two digits. Three trailing digits always mean a
//! thousands group.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalizer::{MatchGroups, Normalizer};

/// Digits, optional `sep + 3 digits` groups, optional `sep + 1-2 digits` tail.
static PRICE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+([.,][0-9]{3})*([.,][0-9]{1,2})?").expect("Invalid price regex")
});

const SEPARATORS: [char; 2] = ['.', ','];

/// Normalizes the first price found in a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceNormalizer;

impl PriceNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for PriceNormalizer {
    fn pattern(&self) -> &Regex {
        &PRICE_REGEX
    }

    fn rewrite(&self, groups: Option<&MatchGroups<'_>>) -> String {
        let Some(groups) = groups else {
            return String::new();
        };
        canonical_price(groups.whole())
    }
}

/// Strips thousands separators and turns the decimal separator into `.`.
fn canonical_price(matched: &str) -> String {
    let (integer, fraction) = match decimal_separator(matched) {
        Some(index) => (&matched[..index], Some(&matched[index + 1..])),
        None => (matched, None),
    };

    let mut price: String = integer.chars().filter(|ch| !SEPARATORS.contains(ch)).collect();
    if let Some(fraction) = fraction {
        price.push('.');
        price.push_str(fraction);
    }
    price
}

/// Byte index of the separator acting as decimal point, if any.
fn decimal_separator(matched: &str) -> Option<usize> {
    let index = matched.rfind(SEPARATORS)?;
    let tail = &matched[index + 1..];
    let is_decimal =
        (1..=2).contains(&tail.len()) && tail.bytes().all(|byte| byte.is_ascii_digit());
    is_decimal.then_some(index)
}
