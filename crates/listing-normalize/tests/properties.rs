//! Property tests for the built-in normalizers.

use listing_normalize::{DateNormalizer, Normalizer, PriceNormalizer};
use proptest::prelude::*;

/// Inserts `sep` between groups of three digits, counting from the right.
fn group_thousands(digits: &str, sep: char) -> String {
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(ch);
    }
    grouped
}

proptest! {
    #[test]
    fn text_without_digits_has_no_price(input in "[^0-9]*") {
        prop_assert_eq!(PriceNormalizer::new().normalize(&input), "");
    }

    #[test]
    fn text_without_digits_has_no_date(input in "[^0-9]*") {
        prop_assert_eq!(DateNormalizer::new().normalize(&input), "");
    }

    #[test]
    fn grouped_digits_lose_their_separators(
        digits in "[1-9][0-9]{0,11}",
        thousands in prop::sample::select(vec!['.', ',']),
        decimal in prop::sample::select(vec!['.', ',']),
        fraction in prop::option::of("[0-9]{1,2}"),
    ) {
        let mut input = group_thousands(&digits, thousands);
        let mut expected = digits.clone();
        if let Some(fraction) = &fraction {
            input.push(decimal);
            input.push_str(fraction);
            expected.push('.');
            expected.push_str(fraction);
        }
        let text = format!("price: {input} EUR");
        prop_assert_eq!(PriceNormalizer::new().normalize(&text), expected);
    }

    #[test]
    fn canonical_price_is_a_fixed_point(
        digits in "[0-9]{1,12}",
        fraction in prop::option::of("[0-9]{1,2}"),
    ) {
        let price = match fraction {
            Some(fraction) => format!("{digits}.{fraction}"),
            None => digits,
        };
        prop_assert_eq!(PriceNormalizer::new().normalize(&price), price);
    }

    #[test]
    fn dates_render_with_fixed_widths(
        day in 1u32..=31,
        month in 1u32..=12,
        year in 1000u32..=9999,
        us in any::<bool>(),
    ) {
        let text = if us {
            format!("posted {month}-{day}-{year} here")
        } else {
            format!("posted {day}.{month}.{year} here")
        };
        let date = DateNormalizer::new().normalize(&text);
        prop_assert_eq!(date, format!("{day:02}.{month:02}.{year}"));
    }
}
