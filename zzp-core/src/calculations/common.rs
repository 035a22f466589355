//! Common utility functions for tax calculations.
//!
//! Rounding, comparison and display helpers shared by the individual
//! calculation modules.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use zzp_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use zzp_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Formats an amount in euros with thousands separators.
///
/// Whole amounts are printed without cents; anything else is rounded to
/// two decimals.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use zzp_core::calculations::common::format_euro;
///
/// assert_eq!(format_euro(dec!(20000)), "€20,000");
/// assert_eq!(format_euro(dec!(1234.5)), "€1,234.50");
/// ```
pub fn format_euro(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let cents = (rounded.abs().fract() * Decimal::ONE_HUNDRED).trunc();

    if cents.is_zero() {
        euro_with_fraction(rounded, "")
    } else {
        euro_with_fraction(rounded, &format!("{:0>2}", cents.to_string()))
    }
}

/// Formats an amount in euros without rounding.
///
/// Falls back to [`format_euro`] when rounding to cents loses nothing, and
/// prints every significant decimal otherwise.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use zzp_core::calculations::common::format_euro_exact;
///
/// assert_eq!(format_euro_exact(dec!(20001)), "€20,001");
/// assert_eq!(format_euro_exact(dec!(20000.001)), "€20,000.001");
/// ```
pub fn format_euro_exact(amount: Decimal) -> String {
    if round_half_up(amount) == amount {
        return format_euro(amount);
    }
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let fraction = text.split_once('.').map_or("", |(_, fraction)| fraction);
    euro_with_fraction(normalized, fraction)
}

fn euro_with_fraction(
    amount: Decimal,
    fraction: &str,
) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = amount.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction.is_empty() {
        format!("{sign}€{grouped}")
    } else {
        format!("{sign}€{grouped}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(13769.5662));

        assert_eq!(result, dec!(13769.57));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(10534.655));

        assert_eq!(result, dec!(10534.66));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-358.205));

        assert_eq!(result, dec!(-358.21)); // Away from zero
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn round_half_up_handles_small_values() {
        let result = round_half_up(dec!(0.001));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // max / min tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(0), dec!(-7470)), dec!(0));
        assert_eq!(max(dec!(82950), dec!(0)), dec!(82950));
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(150.00), dec!(150.00)), dec!(150.00));
    }

    #[test]
    fn min_returns_smaller_value() {
        assert_eq!(min(dec!(40000), dec!(30000)), dec!(30000));
        assert_eq!(min(dec!(25000), dec!(30000)), dec!(25000));
    }

    // =========================================================================
    // format_euro tests
    // =========================================================================

    #[test]
    fn format_euro_groups_thousands() {
        assert_eq!(format_euro(dec!(20000)), "€20,000");
        assert_eq!(format_euro(dec!(392230)), "€392,230");
        assert_eq!(format_euro(dec!(1000000)), "€1,000,000");
    }

    #[test]
    fn format_euro_omits_cents_for_whole_amounts() {
        assert_eq!(format_euro(dec!(19000.00)), "€19,000");
        assert_eq!(format_euro(dec!(999)), "€999");
    }

    #[test]
    fn format_euro_pads_cents() {
        assert_eq!(format_euro(dec!(20001.05)), "€20,001.05");
        assert_eq!(format_euro(dec!(0.5)), "€0.50");
    }

    #[test]
    fn format_euro_keeps_sign() {
        assert_eq!(format_euro(dec!(-1234.56)), "-€1,234.56");
        assert_eq!(format_euro(dec!(-0.001)), "€0");
    }

    // =========================================================================
    // format_euro_exact tests
    // =========================================================================

    #[test]
    fn format_euro_exact_matches_format_euro_for_cents() {
        assert_eq!(format_euro_exact(dec!(20000)), "€20,000");
        assert_eq!(format_euro_exact(dec!(20001.50)), "€20,001.50");
        assert_eq!(format_euro_exact(dec!(-1234.56)), "-€1,234.56");
    }

    #[test]
    fn format_euro_exact_keeps_sub_cent_digits() {
        assert_eq!(format_euro_exact(dec!(20000.001)), "€20,000.001");
        assert_eq!(format_euro_exact(dec!(20000.0050)), "€20,000.005");
        assert_eq!(format_euro_exact(dec!(-1234567.8912)), "-€1,234,567.8912");
    }
}
