use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category used for expenses that look private rather than business.
pub const PRIVATE_PERSONAL_CATEGORY: &str = "private_personal";

/// An expense that has already been assigned a category and tax treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedTransaction {
    pub date: NaiveDate,
    pub description: String,
    /// Gross amount including VAT.
    pub amount: Decimal,
    pub merchant: Option<String>,
    pub category: String,
    /// Deductible share of the amount, 0–100.
    pub deductible_percentage: Decimal,
    pub vat_reclaimable: bool,
    /// VAT rate included in `amount`, as a percentage.
    pub vat_percentage: Decimal,
    pub kia_eligible: bool,
    /// Confidence in the categorisation, 0–100.
    pub confidence: u8,
}

/// Things in a transaction set that deserve a manual look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum TransactionWarning {
    LowConfidence(usize),
    PersonalExpenses(usize),
    HighValueKiaEligible(usize),
}

impl fmt::Display for TransactionWarning {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::LowConfidence(count) => write!(
                f,
                "{count} transactions have low confidence categorization - review manually"
            ),
            Self::PersonalExpenses(count) => {
                write!(f, "{count} transactions appear to be personal expenses")
            }
            Self::HighValueKiaEligible(count) => {
                write!(f, "{count} high-value KIA-eligible transactions detected")
            }
        }
    }
}

/// Totals over a set of categorised transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub transaction_count: usize,
    pub total_amount: Decimal,
    pub total_deductible: Decimal,
    pub total_vat_reclaimable: Decimal,
    pub kia_eligible_amount: Decimal,
    /// Total amount per category, ordered by category name.
    pub categories: BTreeMap<String, Decimal>,
    pub warnings: Vec<TransactionWarning>,
}
