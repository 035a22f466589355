//! Published rates and deduction amounts for one fiscal year.
//!
//! Each supported year is a separate `static` table. Calculations borrow the
//! table they were handed and never modify it, so a table can be shared by
//! any number of threads.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::IncomeTaxBracket;

/// VAT (BTW) rates as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VatRates {
    pub standard: Decimal,
    pub reduced: Decimal,
    pub zero: Decimal,
}

/// Fixed deduction amounts and thresholds for sole proprietors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeductionConstants {
    pub zelfstandigenaftrek: Decimal,
    pub startersaftrek: Decimal,
    pub mkb_winstvrijstelling_rate: Decimal,
    pub kor_threshold: Decimal,
    pub kia_minimum_investment: Decimal,
    /// Smallest single asset that counts towards the KIA investment total.
    pub kia_asset_minimum: Decimal,
    pub kia_maximum_investment: Decimal,
    pub representation_threshold: Decimal,
    pub representation_percentage: Decimal,
}

/// Conditions for the entrepreneur deductions (ondernemersaftrek).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntrepreneurCriteria {
    /// Urencriterium: minimum hours per year.
    pub minimum_hours: i64,
    /// Startersaftrek is only available within this many years of starting.
    pub starter_max_years_in_business: i32,
    /// Startersaftrek is only available if zelfstandigenaftrek was claimed
    /// at most this many times before.
    pub starter_max_prior_zelfstandigenaftrek: i32,
}

/// Piecewise KIA schedule between the minimum and maximum investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KiaSchedule {
    /// Upper bound (inclusive) of the percentage band.
    pub percentage_ceiling: Decimal,
    pub percentage: Decimal,
    /// Upper bound (inclusive) of the flat band.
    pub flat_ceiling: Decimal,
    pub flat_amount: Decimal,
    /// Reduction per euro invested above `flat_ceiling`.
    pub phase_out_rate: Decimal,
}

/// Private-use addition (bijtelling) for a business car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarBenefitRates {
    /// Private kilometres up to and including this value are exempt.
    pub exempt_private_kilometers: i64,
    pub preferential_rate: Decimal,
    pub standard_rate: Decimal,
    /// Catalogue value taxed at the preferential rate for electric cars.
    pub preferential_value_cap: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateTable {
    pub tax_year: i32,
    /// Ordered by `min_income`; the last bracket has no `max_income`.
    pub income_tax_brackets: &'static [IncomeTaxBracket],
    pub vat: VatRates,
    pub deductions: DeductionConstants,
    pub entrepreneur: EntrepreneurCriteria,
    pub kia: KiaSchedule,
    pub car: CarBenefitRates,
    /// Fraction of the KOR threshold above which a warning is raised.
    pub kor_warning_fraction: Decimal,
}

impl RateTable {
    /// Returns the table for `year`, if one is published.
    pub fn for_year(year: i32) -> Option<&'static RateTable> {
        match year {
            2025 => Some(&RATES_2025),
            _ => None,
        }
    }

    /// Years for which a table exists, ascending.
    pub fn supported_years() -> &'static [i32] {
        &[2025]
    }
}

pub static RATES_2025: RateTable = RateTable {
    tax_year: 2025,
    income_tax_brackets: &[
        IncomeTaxBracket {
            min_income: dec!(0),
            max_income: Some(dec!(38441)),
            rate: dec!(0.3582),
        },
        IncomeTaxBracket {
            min_income: dec!(38441),
            max_income: Some(dec!(76817)),
            rate: dec!(0.3748),
        },
        IncomeTaxBracket {
            min_income: dec!(76817),
            max_income: None,
            rate: dec!(0.4950),
        },
    ],
    vat: VatRates {
        standard: dec!(0.21),
        reduced: dec!(0.09),
        zero: dec!(0.00),
    },
    deductions: DeductionConstants {
        zelfstandigenaftrek: dec!(2470),
        startersaftrek: dec!(2123),
        mkb_winstvrijstelling_rate: dec!(0.127),
        kor_threshold: dec!(20000),
        kia_minimum_investment: dec!(2900),
        kia_asset_minimum: dec!(450),
        kia_maximum_investment: dec!(392230),
        representation_threshold: dec!(5700),
        representation_percentage: dec!(0.80),
    },
    entrepreneur: EntrepreneurCriteria {
        minimum_hours: 1225,
        starter_max_years_in_business: 5,
        starter_max_prior_zelfstandigenaftrek: 2,
    },
    kia: KiaSchedule {
        percentage_ceiling: dec!(70602),
        percentage: dec!(0.28),
        flat_ceiling: dec!(130744),
        flat_amount: dec!(19769),
        phase_out_rate: dec!(0.0756),
    },
    car: CarBenefitRates {
        exempt_private_kilometers: 500,
        preferential_rate: dec!(0.17),
        standard_rate: dec!(0.22),
        preferential_value_cap: dec!(30000),
    },
    kor_warning_fraction: dec!(0.9),
};
