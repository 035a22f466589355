use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// How deductible representation costs are determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepresentationMethod {
    /// A fixed share of the costs is deductible.
    #[default]
    Percentage,
    /// Costs above a fixed threshold are deductible.
    Threshold,
}

impl RepresentationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Threshold => "threshold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "percentage" => Some(Self::Percentage),
            "threshold" => Some(Self::Threshold),
            _ => None,
        }
    }
}

/// A business car made available for private use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarParameters {
    pub catalog_value: Decimal,
    pub is_electric: bool,
    /// Hydrogen or solar-panel electric cars keep the preferential rate
    /// over their full catalogue value.
    #[serde(default)]
    pub is_hydrogen_or_solar: bool,
    pub private_kilometers: i64,
}

/// Largest magnitude accepted for any input amount. Within it no step of
/// the calculation can overflow.
pub const MAX_INPUT_AMOUNT: Decimal = dec!(1000000000000000);

/// One year of business figures for a sole proprietor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Profit before entrepreneur deductions. May be negative.
    pub gross_profit: Decimal,
    pub hours_worked: i64,
    pub is_starter_eligible: bool,
    pub yearly_investments: Decimal,
    pub representation_costs: Decimal,
    #[serde(default)]
    pub representation_method: RepresentationMethod,
    pub car: Option<CarParameters>,
    pub vat_on_sales: Decimal,
    pub vat_on_expenses: Decimal,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            gross_profit: Decimal::ZERO,
            hours_worked: 0,
            is_starter_eligible: false,
            yearly_investments: Decimal::ZERO,
            representation_costs: Decimal::ZERO,
            representation_method: RepresentationMethod::Percentage,
            car: None,
            vat_on_sales: Decimal::ZERO,
            vat_on_expenses: Decimal::ZERO,
        }
    }
}

impl CalculationInput {
    /// The first amount whose magnitude exceeds [`MAX_INPUT_AMOUNT`], with
    /// its field name.
    pub fn amount_out_of_range(&self) -> Option<(&'static str, Decimal)> {
        let catalog_value = self.car.map_or(Decimal::ZERO, |car| car.catalog_value);
        [
            ("gross_profit", self.gross_profit),
            ("yearly_investments", self.yearly_investments),
            ("representation_costs", self.representation_costs),
            ("car.catalog_value", catalog_value),
            ("vat_on_sales", self.vat_on_sales),
            ("vat_on_expenses", self.vat_on_expenses),
        ]
        .into_iter()
        .find(|(_, amount)| amount.abs() > MAX_INPUT_AMOUNT)
    }
}

/// Full income tax and VAT position derived from a [`CalculationInput`].
///
/// `kia_deduction` and `representation_deduction` are reported alongside the
/// chain but are not subtracted from `taxable_profit`. `car_bijtelling` is
/// added to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub gross_profit: Decimal,
    pub zelfstandigenaftrek: Decimal,
    pub startersaftrek: Decimal,
    pub total_ondernemersaftrek: Decimal,
    pub profit_after_ondernemersaftrek: Decimal,
    pub mkb_winstvrijstelling: Decimal,
    pub taxable_profit: Decimal,
    pub income_tax: Decimal,
    /// Income tax as a percentage of gross profit.
    pub effective_tax_rate: Decimal,
    pub vat_due: Decimal,
    pub vat_reclaimable: Decimal,
    pub net_vat_position: Decimal,
    pub kia_deduction: Decimal,
    pub representation_deduction: Decimal,
    pub car_bijtelling: Decimal,
}

impl CalculationResult {
    /// Copy of the result with every field rounded to two decimals.
    pub fn rounded(&self) -> Self {
        Self {
            gross_profit: round_half_up(self.gross_profit),
            zelfstandigenaftrek: round_half_up(self.zelfstandigenaftrek),
            startersaftrek: round_half_up(self.startersaftrek),
            total_ondernemersaftrek: round_half_up(self.total_ondernemersaftrek),
            profit_after_ondernemersaftrek: round_half_up(self.profit_after_ondernemersaftrek),
            mkb_winstvrijstelling: round_half_up(self.mkb_winstvrijstelling),
            taxable_profit: round_half_up(self.taxable_profit),
            income_tax: round_half_up(self.income_tax),
            effective_tax_rate: round_half_up(self.effective_tax_rate),
            vat_due: round_half_up(self.vat_due),
            vat_reclaimable: round_half_up(self.vat_reclaimable),
            net_vat_position: round_half_up(self.net_vat_position),
            kia_deduction: round_half_up(self.kia_deduction),
            representation_deduction: round_half_up(self.representation_deduction),
            car_bijtelling: round_half_up(self.car_bijtelling),
        }
    }

    /// Gross profit left after income tax.
    pub fn net_profit(&self) -> Decimal {
        self.gross_profit - self.income_tax
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn representation_method_parse_is_case_insensitive() {
        assert_eq!(
            RepresentationMethod::parse("Threshold"),
            Some(RepresentationMethod::Threshold)
        );
        assert_eq!(
            RepresentationMethod::parse("percentage"),
            Some(RepresentationMethod::Percentage)
        );
        assert_eq!(RepresentationMethod::parse("both"), None);
    }

    #[test]
    fn representation_method_round_trips_through_as_str() {
        for method in [RepresentationMethod::Percentage, RepresentationMethod::Threshold] {
            assert_eq!(RepresentationMethod::parse(method.as_str()), Some(method));
        }
    }

    #[test]
    fn default_input_is_all_zero() {
        let input = CalculationInput::default();

        assert_eq!(input.gross_profit, Decimal::ZERO);
        assert_eq!(input.hours_worked, 0);
        assert!(!input.is_starter_eligible);
        assert_eq!(input.representation_method, RepresentationMethod::Percentage);
        assert!(input.car.is_none());
    }

    #[test]
    fn amounts_within_limit_are_accepted() {
        let input = CalculationInput {
            gross_profit: -MAX_INPUT_AMOUNT,
            vat_on_sales: MAX_INPUT_AMOUNT,
            ..CalculationInput::default()
        };

        assert_eq!(input.amount_out_of_range(), None);
    }

    #[test]
    fn amount_out_of_range_names_first_offender() {
        let input = CalculationInput {
            gross_profit: dec!(-79228162514264337593543950335),
            car: Some(CarParameters {
                catalog_value: dec!(79228162514264337593543950000),
                is_electric: false,
                is_hydrogen_or_solar: false,
                private_kilometers: 600,
            }),
            ..CalculationInput::default()
        };

        assert_eq!(
            input.amount_out_of_range(),
            Some(("gross_profit", dec!(-79228162514264337593543950335)))
        );
    }

    #[test]
    fn amount_out_of_range_checks_car_value() {
        let input = CalculationInput {
            car: Some(CarParameters {
                catalog_value: MAX_INPUT_AMOUNT + Decimal::ONE,
                is_electric: true,
                is_hydrogen_or_solar: false,
                private_kilometers: 600,
            }),
            ..CalculationInput::default()
        };

        assert_eq!(
            input.amount_out_of_range().map(|(field, _)| field),
            Some("car.catalog_value")
        );
    }

    #[test]
    fn largest_accepted_input_does_not_overflow() {
        let input = CalculationInput {
            gross_profit: MAX_INPUT_AMOUNT,
            hours_worked: 1225,
            is_starter_eligible: true,
            yearly_investments: MAX_INPUT_AMOUNT,
            representation_costs: MAX_INPUT_AMOUNT,
            car: Some(CarParameters {
                catalog_value: MAX_INPUT_AMOUNT,
                is_electric: false,
                is_hydrogen_or_solar: false,
                private_kilometers: 600,
            }),
            vat_on_sales: MAX_INPUT_AMOUNT,
            vat_on_expenses: -MAX_INPUT_AMOUNT,
            ..CalculationInput::default()
        };

        let result = crate::TaxCalculator::new(&crate::RATES_2025).calculate(&input);

        assert_eq!(result.net_vat_position, dec!(2000000000000000));
        assert!(result.income_tax > Decimal::ZERO);
    }

    #[test]
    fn rounded_rounds_every_amount_to_cents() {
        let result = CalculationResult {
            gross_profit: dec!(85420),
            zelfstandigenaftrek: dec!(2470),
            startersaftrek: dec!(0),
            total_ondernemersaftrek: dec!(2470),
            profit_after_ondernemersaftrek: dec!(82950),
            mkb_winstvrijstelling: dec!(10534.650),
            taxable_profit: dec!(72415.350),
            income_tax: dec!(26503.15258),
            effective_tax_rate: dec!(31.026872),
            vat_due: dec!(0),
            vat_reclaimable: dec!(0),
            net_vat_position: dec!(0),
            kia_deduction: dec!(812.28),
            representation_deduction: dec!(0.005),
            car_bijtelling: dec!(0),
        };

        let rounded = result.rounded();

        assert_eq!(rounded.income_tax, dec!(26503.15));
        assert_eq!(rounded.effective_tax_rate, dec!(31.03));
        assert_eq!(rounded.representation_deduction, dec!(0.01));
        assert_eq!(rounded.mkb_winstvrijstelling, dec!(10534.65));
    }

    #[test]
    fn net_profit_subtracts_income_tax() {
        let result = CalculationResult {
            gross_profit: dec!(50000),
            zelfstandigenaftrek: dec!(0),
            startersaftrek: dec!(0),
            total_ondernemersaftrek: dec!(0),
            profit_after_ondernemersaftrek: dec!(50000),
            mkb_winstvrijstelling: dec!(0),
            taxable_profit: dec!(50000),
            income_tax: dec!(18101.70),
            effective_tax_rate: dec!(0),
            vat_due: dec!(0),
            vat_reclaimable: dec!(0),
            net_vat_position: dec!(0),
            kia_deduction: dec!(0),
            representation_deduction: dec!(0),
            car_bijtelling: dec!(0),
        };

        assert_eq!(result.net_profit(), dec!(31898.30));
    }
}
