use core_types::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

/// Renders an amount as `<symbol><en-US grouped value>` with two decimals.
///
/// The digit grouping is the same for every currency; only the symbol changes.
/// A negative amount keeps its sign after the symbol (`$-1,234.50`).
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), group_thousands(amount, 2))
}

/// Renders a percentage with one decimal, e.g. `10.0%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", group_thousands(value, 1))
}

fn group_thousands(value: Decimal, decimals: u32) -> String {
    let mut rounded =
        value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_usd_with_grouping_and_two_decimals() {
        assert_eq!(format_currency(dec!(1234567.891), Currency::Usd), "$1,234,567.89");
        assert_eq!(format_currency(dec!(1122), Currency::Usd), "$1,122.00");
        assert_eq!(format_currency(dec!(999.999), Currency::Usd), "$1,000.00");
        assert_eq!(format_currency(Decimal::ZERO, Currency::Usd), "$0.00");
        assert_eq!(format_currency(dec!(0.005), Currency::Usd), "$0.01");
    }

    #[test]
    fn inr_only_changes_the_symbol() {
        assert_eq!(format_currency(dec!(1546.6), Currency::Inr), "₹1,546.60");
        assert_eq!(format_currency(dec!(12345678), Currency::Inr), "₹12,345,678.00");
    }

    #[test]
    fn negative_amounts_keep_sign_after_symbol() {
        assert_eq!(format_currency(dec!(-1234.5), Currency::Usd), "$-1,234.50");
        assert_eq!(format_currency(dec!(-0.001), Currency::Usd), "$0.00");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(dec!(10)), "10.0%");
        assert_eq!(format_percent(dec!(12.25)), "12.3%");
        assert_eq!(format_percent(dec!(0)), "0.0%");
    }
}
