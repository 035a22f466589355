//! Box 1 income tax over the progressive bracket schedule.

use rust_decimal::Decimal;

use crate::RateTable;

/// Calculates income tax on `taxable_income` using the table's brackets.
///
/// Each bracket taxes the part of the income that falls inside it. Income
/// is not floored at zero: a negative amount falls in the first bracket and
/// yields a negative result.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use zzp_core::RATES_2025;
/// use zzp_core::calculations::income_tax;
///
/// assert_eq!(income_tax(&RATES_2025, dec!(38441)), dec!(13769.5662));
/// ```
pub fn income_tax(
    rates: &RateTable,
    taxable_income: Decimal,
) -> Decimal {
    let mut tax = Decimal::ZERO;

    for bracket in rates.income_tax_brackets {
        match bracket.max_income {
            Some(max_income) if taxable_income > max_income => {
                tax += (max_income - bracket.min_income) * bracket.rate;
            }
            _ => {
                tax += (taxable_income - bracket.min_income) * bracket.rate;
                return tax;
            }
        }
    }

    tax
}
