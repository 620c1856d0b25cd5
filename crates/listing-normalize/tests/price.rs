//! Tests for price normalization.

use listing_normalize::{Normalizer, PriceNormalizer};

fn normalize(input: &str) -> String {
    PriceNormalizer::new().normalize(input)
}

#[test]
fn comma_as_decimal_separator_becomes_period() {
    assert_eq!(normalize("price with decimal separator: 1000,0 PLN "), "1000.0");
    assert_eq!(normalize("price with decimal separator: 1000,0 PLN"), "1000.0");
}

#[test]
fn comma_as_thousands_separator_is_removed() {
    assert_eq!(
        normalize("price with thousands separators: 1,000,000 USD"),
        "1000000"
    );
}

#[test]
fn period_as_thousands_separator_is_removed() {
    assert_eq!(
        normalize("price with thousands separators: 1.000.000 GBP"),
        "1000000"
    );
}

#[test]
fn comma_as_thousands_and_decimal_separator() {
    assert_eq!(
        normalize("price with comma as thousands and decimal separator: 1,000,00 USD"),
        "1000.00"
    );
}

#[test]
fn period_as_thousands_and_decimal_separator() {
    assert_eq!(
        normalize("price with period as thousands and decimal separator: 1.000.0 EUR"),
        "1000.0"
    );
}

#[test]
fn comma_thousands_with_period_decimal() {
    assert_eq!(
        normalize(
            "price with comma as thousands separator and period as decimal separator: 1,000.0 USD"
        ),
        "1000.0"
    );
}

#[test]
fn no_price_yields_empty_string() {
    assert_eq!(normalize("Here are no price patterns at all."), "");
    assert_eq!(normalize(""), "");
}

#[test]
fn single_group_of_three_is_thousands() {
    assert_eq!(normalize("1,000"), "1000");
    assert_eq!(normalize("only 2.500 left"), "2500");
}

#[test]
fn only_first_price_is_used() {
    assert_eq!(normalize("was 1.999,99 now 999,99"), "1999.99");
}

#[test]
fn canonical_price_is_unchanged() {
    assert_eq!(normalize("1000.0"), "1000.0");
    assert_eq!(normalize("1000000"), "1000000");
    assert_eq!(normalize("12.5"), "12.5");
}

#[test]
fn normalizer_is_reusable() {
    let normalizer = PriceNormalizer::new();
    assert_eq!(normalizer.normalize("10,50"), "10.50");
    assert_eq!(normalizer.normalize("none"), "");
    assert_eq!(normalizer.normalize("10,50"), "10.50");
}
