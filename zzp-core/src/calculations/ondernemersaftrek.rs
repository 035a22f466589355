//! Entrepreneur deductions: zelfstandigenaftrek and startersaftrek.
//!
//! Both are flat amounts gated on the hours criterion (urencriterium).
//! Whether someone still counts as a starter depends on how long the
//! business has existed and how often zelfstandigenaftrek was claimed
//! before; that history is supplied by the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::RateTable;

/// True when `hours_worked` meets the urencriterium.
pub fn meets_hours_criterion(
    rates: &RateTable,
    hours_worked: i64,
) -> bool {
    hours_worked >= rates.entrepreneur.minimum_hours
}

/// True when a business started in `first_year_business` may still claim
/// startersaftrek in `current_year`.
///
/// The starting year counts as the first year in business.
pub fn is_eligible_for_startersaftrek(
    rates: &RateTable,
    current_year: i32,
    first_year_business: i32,
    years_used_zelfstandigenaftrek: i32,
) -> bool {
    let years_in_business = current_year - first_year_business + 1;

    years_in_business <= rates.entrepreneur.starter_max_years_in_business
        && years_used_zelfstandigenaftrek <= rates.entrepreneur.starter_max_prior_zelfstandigenaftrek
}

/// The entrepreneur deductions granted for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ondernemersaftrek {
    pub zelfstandigenaftrek: Decimal,
    pub startersaftrek: Decimal,
}

impl Ondernemersaftrek {
    /// Determines the deductions for the given hours and starter status.
    ///
    /// Startersaftrek is only granted on top of zelfstandigenaftrek, so a
    /// starter who misses the hours criterion gets neither.
    pub fn determine(
        rates: &RateTable,
        hours_worked: i64,
        is_starter_eligible: bool,
    ) -> Self {
        let meets_hours = meets_hours_criterion(rates, hours_worked);

        let zelfstandigenaftrek = if meets_hours {
            rates.deductions.zelfstandigenaftrek
        } else {
            Decimal::ZERO
        };
        let startersaftrek = if meets_hours && is_starter_eligible {
            rates.deductions.startersaftrek
        } else {
            Decimal::ZERO
        };

        Self {
            zelfstandigenaftrek,
            startersaftrek,
        }
    }

    pub fn total(&self) -> Decimal {
        self.zelfstandigenaftrek + self.startersaftrek
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::RATES_2025;

    // =========================================================================
    // meets_hours_criterion tests
    // =========================================================================

    #[test]
    fn hours_criterion_is_inclusive() {
        assert!(!meets_hours_criterion(&RATES_2025, 1224));
        assert!(meets_hours_criterion(&RATES_2025, 1225));
        assert!(meets_hours_criterion(&RATES_2025, 1226));
    }

    #[test]
    fn negative_hours_do_not_meet_criterion() {
        assert!(!meets_hours_criterion(&RATES_2025, -10));
    }

    // =========================================================================
    // is_eligible_for_startersaftrek tests
    // =========================================================================

    #[test]
    fn starter_in_fifth_year_with_two_prior_uses_is_eligible() {
        assert!(is_eligible_for_startersaftrek(&RATES_2025, 2025, 2021, 2));
    }

    #[test]
    fn starter_in_sixth_year_is_not_eligible() {
        assert!(!is_eligible_for_startersaftrek(&RATES_2025, 2025, 2020, 0));
    }

    #[test]
    fn starter_with_three_prior_uses_is_not_eligible() {
        assert!(!is_eligible_for_startersaftrek(&RATES_2025, 2025, 2024, 3));
    }

    #[test]
    fn business_started_this_year_is_eligible() {
        assert!(is_eligible_for_startersaftrek(&RATES_2025, 2025, 2025, 0));
    }

    // =========================================================================
    // Ondernemersaftrek tests
    // =========================================================================

    #[test]
    fn grants_zelfstandigenaftrek_when_hours_met() {
        let aftrek = Ondernemersaftrek::determine(&RATES_2025, 1450, false);

        assert_eq!(aftrek.zelfstandigenaftrek, dec!(2470));
        assert_eq!(aftrek.startersaftrek, dec!(0));
        assert_eq!(aftrek.total(), dec!(2470));
    }

    #[test]
    fn grants_both_for_eligible_starter() {
        let aftrek = Ondernemersaftrek::determine(&RATES_2025, 1225, true);

        assert_eq!(aftrek.total(), dec!(4593));
    }

    #[test]
    fn grants_nothing_below_hours_criterion_even_for_starter() {
        let aftrek = Ondernemersaftrek::determine(&RATES_2025, 1224, true);

        assert_eq!(aftrek.zelfstandigenaftrek, dec!(0));
        assert_eq!(aftrek.startersaftrek, dec!(0));
    }
}
