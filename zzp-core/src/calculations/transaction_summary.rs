//! Totals and review warnings over categorised expense transactions.
//!
//! The summary turns a year of categorised expenses into the figures the
//! calculator needs: deductible costs, reclaimable VAT and the investment
//! total that qualifies for KIA.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::vat::vat_from_gross;
use crate::{
    CalculationInput, CategorizedTransaction, PRIVATE_PERSONAL_CATEGORY, RateTable,
    TransactionSummary, TransactionWarning,
};

/// Categorisations below this confidence are flagged for review.
const LOW_CONFIDENCE: u8 = 50;

/// KIA-eligible purchases above this amount are flagged as high-value.
const HIGH_VALUE_AMOUNT: Decimal = dec!(1000);

impl TransactionSummary {
    /// Summarises `transactions` using the rates for the year.
    pub fn from_transactions(
        rates: &RateTable,
        transactions: &[CategorizedTransaction],
    ) -> Self {
        let mut total_amount = Decimal::ZERO;
        let mut total_deductible = Decimal::ZERO;
        let mut total_vat_reclaimable = Decimal::ZERO;
        let mut kia_eligible_amount = Decimal::ZERO;
        let mut categories: BTreeMap<String, Decimal> = BTreeMap::new();

        for transaction in transactions {
            total_amount += transaction.amount;
            total_deductible += deductible_amount(transaction);
            if transaction.vat_reclaimable {
                total_vat_reclaimable +=
                    vat_from_gross(transaction.amount, transaction.vat_percentage);
            }
            if counts_towards_kia(rates, transaction) {
                kia_eligible_amount += transaction.amount;
            }
            *categories
                .entry(transaction.category.clone())
                .or_insert(Decimal::ZERO) += transaction.amount;
        }

        let warnings = warnings(transactions);

        debug!(
            transactions = transactions.len(),
            %total_deductible,
            %kia_eligible_amount,
            warnings = warnings.len(),
            "summarised transactions"
        );

        Self {
            transaction_count: transactions.len(),
            total_amount,
            total_deductible,
            total_vat_reclaimable,
            kia_eligible_amount,
            categories,
            warnings,
        }
    }

    /// Builds calculator input from the summary and the year's revenue.
    ///
    /// Gross profit is revenue minus deductible costs, the KIA-eligible
    /// amount becomes the yearly investment and reclaimable VAT becomes the
    /// VAT on expenses.
    pub fn calculation_input(
        &self,
        revenue: Decimal,
        vat_on_sales: Decimal,
        hours_worked: i64,
        is_starter_eligible: bool,
    ) -> CalculationInput {
        CalculationInput {
            gross_profit: revenue - self.total_deductible,
            hours_worked,
            is_starter_eligible,
            yearly_investments: self.kia_eligible_amount,
            vat_on_sales,
            vat_on_expenses: self.total_vat_reclaimable,
            ..CalculationInput::default()
        }
    }

    /// Categories ordered by total amount, largest first.
    pub fn top_categories(
        &self,
        limit: usize,
    ) -> Vec<(&str, Decimal)> {
        let mut ranked: Vec<(&str, Decimal)> = self
            .categories
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }
}

fn deductible_amount(transaction: &CategorizedTransaction) -> Decimal {
    transaction.amount * transaction.deductible_percentage / Decimal::ONE_HUNDRED
}

/// Single assets below the per-asset minimum do not count for KIA.
fn counts_towards_kia(
    rates: &RateTable,
    transaction: &CategorizedTransaction,
) -> bool {
    transaction.kia_eligible && transaction.amount >= rates.deductions.kia_asset_minimum
}

fn warnings(transactions: &[CategorizedTransaction]) -> Vec<TransactionWarning> {
    let low_confidence = transactions
        .iter()
        .filter(|t| t.confidence < LOW_CONFIDENCE)
        .count();
    let personal = transactions
        .iter()
        .filter(|t| t.category == PRIVATE_PERSONAL_CATEGORY)
        .count();
    let high_value_kia = transactions
        .iter()
        .filter(|t| t.kia_eligible && t.amount > HIGH_VALUE_AMOUNT)
        .count();

    let mut warnings = Vec::new();
    if low_confidence > 0 {
        warnings.push(TransactionWarning::LowConfidence(low_confidence));
    }
    if personal > 0 {
        warnings.push(TransactionWarning::PersonalExpenses(personal));
    }
    if high_value_kia > 0 {
        warnings.push(TransactionWarning::HighValueKiaEligible(high_value_kia));
    }
    warnings
}
