use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RateTable;

/// The VAT (BTW) rate categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatRate {
    Standard,
    Reduced,
    Zero,
}

impl VatRate {
    pub fn all() -> &'static [VatRate] {
        &[VatRate::Standard, VatRate::Reduced, VatRate::Zero]
    }

    /// The rate as a fraction (e.g. `0.21`).
    pub fn rate(
        self,
        rates: &RateTable,
    ) -> Decimal {
        match self {
            VatRate::Standard => rates.vat.standard,
            VatRate::Reduced => rates.vat.reduced,
            VatRate::Zero => rates.vat.zero,
        }
    }

    /// The rate as a percentage (e.g. `21`).
    pub fn percentage(
        self,
        rates: &RateTable,
    ) -> Decimal {
        self.rate(rates) * Decimal::ONE_HUNDRED
    }

    /// Finds the category whose percentage equals `percentage`.
    pub fn from_percentage(
        rates: &RateTable,
        percentage: Decimal,
    ) -> Option<VatRate> {
        Self::all()
            .iter()
            .copied()
            .find(|vat_rate| vat_rate.percentage(rates) == percentage)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::RATES_2025;

    #[test]
    fn rate_reads_from_table() {
        assert_eq!(VatRate::Standard.rate(&RATES_2025), dec!(0.21));
        assert_eq!(VatRate::Reduced.rate(&RATES_2025), dec!(0.09));
        assert_eq!(VatRate::Zero.rate(&RATES_2025), dec!(0));
    }

    #[test]
    fn from_percentage_matches_regardless_of_scale() {
        assert_eq!(
            VatRate::from_percentage(&RATES_2025, dec!(21)),
            Some(VatRate::Standard)
        );
        assert_eq!(
            VatRate::from_percentage(&RATES_2025, dec!(9.00)),
            Some(VatRate::Reduced)
        );
        assert_eq!(
            VatRate::from_percentage(&RATES_2025, dec!(0)),
            Some(VatRate::Zero)
        );
    }

    #[test]
    fn from_percentage_rejects_unknown_rate() {
        assert_eq!(VatRate::from_percentage(&RATES_2025, dec!(19)), None);
    }
}
