use rust_decimal::Decimal;

use crate::calculations::common::max;
use crate::{RateTable, RepresentationMethod};

/// Deductible part of representation costs (meals, gifts, receptions).
///
/// The caller picks the method; neither is chosen automatically.
pub fn representation_deduction(
    rates: &RateTable,
    costs: Decimal,
    method: RepresentationMethod,
) -> Decimal {
    match method {
        RepresentationMethod::Percentage => costs * rates.deductions.representation_percentage,
        RepresentationMethod::Threshold => max(
            Decimal::ZERO,
            costs - rates.deductions.representation_threshold,
        ),
    }
}
