//! Kleinschaligheidsinvesteringsaftrek (KIA).
//!
//! | Total investment                 | Deduction                              |
//! |----------------------------------|----------------------------------------|
//! | up to and including 2,900        | none                                   |
//! | 2,901 – 70,602                   | 28% of the investment                  |
//! | 70,603 – 130,744                 | 19,769                                 |
//! | 130,745 – 392,229                | 19,769 − 7.56% of the part above 130,744 |
//! | 392,230 and above                | none (the scheme does not apply)       |
//!
//! Bounds are taken from the [`RateTable`]; the amounts above are 2025's.
//! The step at 70,602 (19,768.56 → 19,769) and the cliff at 392,230 are
//! part of the schedule.

use rust_decimal::Decimal;

use crate::RateTable;
use crate::calculations::common::max;

/// Calculates KIA for the total qualifying investment of the year.
pub fn kia(
    rates: &RateTable,
    total_investment: Decimal,
) -> Decimal {
    let schedule = &rates.kia;

    if total_investment <= rates.deductions.kia_minimum_investment {
        return Decimal::ZERO;
    }
    if total_investment >= rates.deductions.kia_maximum_investment {
        return Decimal::ZERO;
    }
    if total_investment <= schedule.percentage_ceiling {
        return total_investment * schedule.percentage;
    }
    if total_investment <= schedule.flat_ceiling {
        return schedule.flat_amount;
    }

    let excess = total_investment - schedule.flat_ceiling;
    max(
        Decimal::ZERO,
        schedule.flat_amount - excess * schedule.phase_out_rate,
    )
}
