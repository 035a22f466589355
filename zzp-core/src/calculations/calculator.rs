//! Comprehensive income tax and VAT calculation for a sole proprietor.
//!
//! # Calculation chain
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Hours criterion met? (≥ 1,225 hours) |
//! | 2    | Zelfstandigenaftrek (only if step 1) |
//! | 3    | Startersaftrek (only if step 1 and starter eligible) |
//! | 4    | Total ondernemersaftrek (step 2 + step 3) |
//! | 5    | KIA on yearly investments (reported only) |
//! | 6    | Representation deduction (reported only) |
//! | 7    | Car bijtelling (only with a car of positive catalogue value) |
//! | 8    | Profit after ondernemersaftrek (gross profit − step 4, minimum 0) |
//! | 9    | MKB winstvrijstelling (step 8 × 12.7%) |
//! | 10   | Taxable profit (step 8 − step 9 + step 7) |
//! | 11   | Income tax over step 10 |
//! | 12   | Effective tax rate (step 11 ÷ gross profit × 100, 0 without profit) |
//! | 13   | VAT due, reclaimable and net position |
//!
//! KIA and the representation deduction are computed for reference but are
//! not part of the taxable profit chain.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use zzp_core::{CalculationInput, RATES_2025, TaxCalculator};
//!
//! let input = CalculationInput {
//!     gross_profit: dec!(85420),
//!     hours_worked: 1450,
//!     ..CalculationInput::default()
//! };
//!
//! let result = TaxCalculator::new(&RATES_2025).calculate(&input);
//!
//! assert_eq!(result.taxable_profit, dec!(72415.35));
//! assert_eq!(result.rounded().income_tax, dec!(26503.15));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::bijtelling::car_bijtelling;
use crate::calculations::common::max;
use crate::calculations::income_tax::income_tax;
use crate::calculations::kia::kia;
use crate::calculations::ondernemersaftrek::Ondernemersaftrek;
use crate::calculations::representation::representation_deduction;
use crate::calculations::vat::net_vat_position;
use crate::{CalculationInput, CalculationResult, CarParameters, RateTable};

/// Calculator bound to one year's [`RateTable`].
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator<'a> {
    rates: &'a RateTable,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &'a RateTable {
        self.rates
    }

    /// Runs the full calculation chain.
    ///
    /// Never fails: every input, including negative amounts and hours,
    /// produces a complete result.
    pub fn calculate(
        &self,
        input: &CalculationInput,
    ) -> CalculationResult {
        let aftrek =
            Ondernemersaftrek::determine(self.rates, input.hours_worked, input.is_starter_eligible);
        let total_ondernemersaftrek = aftrek.total();

        let kia_deduction = kia(self.rates, input.yearly_investments);
        let representation_deduction = representation_deduction(
            self.rates,
            input.representation_costs,
            input.representation_method,
        );
        let car_bijtelling = self.car_bijtelling(input.car.as_ref());

        let profit_after_ondernemersaftrek =
            self.profit_after_ondernemersaftrek(input.gross_profit, total_ondernemersaftrek);
        let mkb_winstvrijstelling = self.mkb_winstvrijstelling(profit_after_ondernemersaftrek);
        let taxable_profit = self.taxable_profit(
            profit_after_ondernemersaftrek,
            mkb_winstvrijstelling,
            car_bijtelling,
        );

        let income_tax = income_tax(self.rates, taxable_profit);
        let effective_tax_rate = self.effective_tax_rate(income_tax, input.gross_profit);

        debug!(
            tax_year = self.rates.tax_year,
            %taxable_profit,
            %income_tax,
            "calculated income tax"
        );

        CalculationResult {
            gross_profit: input.gross_profit,
            zelfstandigenaftrek: aftrek.zelfstandigenaftrek,
            startersaftrek: aftrek.startersaftrek,
            total_ondernemersaftrek,
            profit_after_ondernemersaftrek,
            mkb_winstvrijstelling,
            taxable_profit,
            income_tax,
            effective_tax_rate,
            vat_due: input.vat_on_sales,
            vat_reclaimable: input.vat_on_expenses,
            net_vat_position: net_vat_position(input.vat_on_sales, input.vat_on_expenses),
            kia_deduction,
            representation_deduction,
            car_bijtelling,
        }
    }

    /// Bijtelling for the car, if there is one with a positive catalogue value.
    fn car_bijtelling(
        &self,
        car: Option<&CarParameters>,
    ) -> Decimal {
        match car {
            Some(car) if car.catalog_value > Decimal::ZERO => car_bijtelling(
                self.rates,
                car.catalog_value,
                car.is_electric,
                car.is_hydrogen_or_solar,
                car.private_kilometers,
            ),
            _ => Decimal::ZERO,
        }
    }

    /// Gross profit minus ondernemersaftrek, floored at zero.
    fn profit_after_ondernemersaftrek(
        &self,
        gross_profit: Decimal,
        total_ondernemersaftrek: Decimal,
    ) -> Decimal {
        max(Decimal::ZERO, gross_profit - total_ondernemersaftrek)
    }

    fn mkb_winstvrijstelling(
        &self,
        profit_after_ondernemersaftrek: Decimal,
    ) -> Decimal {
        profit_after_ondernemersaftrek * self.rates.deductions.mkb_winstvrijstelling_rate
    }

    /// Profit after the exemption, with the car bijtelling added back.
    fn taxable_profit(
        &self,
        profit_after_ondernemersaftrek: Decimal,
        mkb_winstvrijstelling: Decimal,
        car_bijtelling: Decimal,
    ) -> Decimal {
        profit_after_ondernemersaftrek - mkb_winstvrijstelling + car_bijtelling
    }

    /// Income tax as a percentage of gross profit; zero without profit.
    fn effective_tax_rate(
        &self,
        income_tax: Decimal,
        gross_profit: Decimal,
    ) -> Decimal {
        if gross_profit > Decimal::ZERO {
            income_tax / gross_profit * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }
}
