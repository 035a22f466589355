//! Private-use addition (bijtelling) for a business car.
//!
//! Up to the exempt private kilometres nothing is added. Electric cars get
//! the preferential rate on the first part of the catalogue value and the
//! standard rate on the rest; hydrogen and solar-panel electric cars get the
//! preferential rate on everything. Other cars pay the standard rate.

use rust_decimal::Decimal;

use crate::RateTable;
use crate::calculations::common::{max, min};

/// Calculates the yearly bijtelling for a car with the given catalogue value.
pub fn car_bijtelling(
    rates: &RateTable,
    catalog_value: Decimal,
    is_electric: bool,
    is_hydrogen_or_solar: bool,
    private_kilometers: i64,
) -> Decimal {
    let car = &rates.car;

    if private_kilometers <= car.exempt_private_kilometers {
        return Decimal::ZERO;
    }

    if is_electric && is_hydrogen_or_solar {
        catalog_value * car.preferential_rate
    } else if is_electric {
        let preferential_part = min(catalog_value, car.preferential_value_cap);
        let remainder = max(Decimal::ZERO, catalog_value - car.preferential_value_cap);
        preferential_part * car.preferential_rate + remainder * car.standard_rate
    } else {
        catalog_value * car.standard_rate
    }
}
