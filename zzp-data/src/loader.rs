//! CSV loader for categorised expense transactions.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around values is trimmed.
//!
//! | Column                  | Required | Type    | Notes |
//! |-------------------------|----------|---------|-------|
//! | `date`                  | yes      | date    | `YYYY-MM-DD` |
//! | `description`           | yes      | string  | rows with an empty description are skipped |
//! | `amount`                | yes      | decimal | gross, incl. VAT; rows ≤ 0 are skipped, at most 10^15 |
//! | `merchant`              | no       | string  | leave empty for none |
//! | `category`              | no       | string  | empty becomes `uncategorized` |
//! | `deductible_percentage` | yes      | decimal | 0–100 |
//! | `vat_reclaimable`       | yes      | bool    | `true` / `false` |
//! | `vat_percentage`        | yes      | decimal | one of the year's VAT rates (21, 9, 0) |
//! | `kia_eligible`          | yes      | bool    | |
//! | `confidence`            | yes      | integer | 0–100 |
//!
//! ### Example
//!
//! ```csv
//! date,description,amount,merchant,category,deductible_percentage,vat_reclaimable,vat_percentage,kia_eligible,confidence
//! 2025-01-15,Laptop,1210.00,Coolblue,equipment,100,true,21,true,92
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use zzp_core::{CategorizedTransaction, MAX_INPUT_AMOUNT, RateTable, VatRate};

/// Highest accepted categorisation confidence.
const MAX_CONFIDENCE: u8 = 100;

/// Category assigned to rows without one.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Errors that can occur when loading transactions.
#[derive(Debug, Error)]
pub enum TransactionLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unsupported VAT percentage {percentage} on row {row}")]
    InvalidVatPercentage { percentage: Decimal, row: usize },

    #[error("deductible percentage {percentage} on row {row} is outside 0-100")]
    InvalidDeductiblePercentage { percentage: Decimal, row: usize },

    #[error("confidence {value} on row {row} is outside 0-100")]
    InvalidConfidence { value: u8, row: usize },

    #[error("amount {amount} on row {row} exceeds {limit}", limit = MAX_INPUT_AMOUNT)]
    AmountOutOfRange { amount: Decimal, row: usize },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for TransactionLoadError {
    fn from(err: csv::Error) -> Self {
        TransactionLoadError::CsvParse(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct TransactionRecord {
    date: NaiveDate,
    description: String,
    amount: Decimal,
    merchant: Option<String>,
    category: Option<String>,
    deductible_percentage: Decimal,
    vat_reclaimable: bool,
    vat_percentage: Decimal,
    kia_eligible: bool,
    confidence: u8,
}

/// Loader for categorised transactions from CSV.
pub struct TransactionLoader;

impl TransactionLoader {
    /// Parse transactions from a CSV reader, in file order.
    ///
    /// VAT percentages are checked against `rates`. Rows without a
    /// description or with a non-positive amount are skipped.
    pub fn parse<R: Read>(
        rates: &RateTable,
        reader: R,
    ) -> Result<Vec<CategorizedTransaction>, TransactionLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut transactions = Vec::new();
        let mut skipped = 0;

        for (idx, result) in csv_reader.deserialize::<TransactionRecord>().enumerate() {
            let record = result?;
            let row = idx + 1;

            if record.description.is_empty() || record.amount <= Decimal::ZERO {
                debug!(row, amount = %record.amount, "skipping transaction row");
                skipped += 1;
                continue;
            }

            transactions.push(convert_record(rates, record, row)?);
        }

        if skipped > 0 {
            warn!(skipped, "skipped transaction rows without description or positive amount");
        }

        Ok(transactions)
    }

    /// Read a file from disk and delegate to [`TransactionLoader::parse`].
    pub fn load_from_file(
        rates: &RateTable,
        path: &Path,
    ) -> Result<Vec<CategorizedTransaction>, TransactionLoadError> {
        let file = std::fs::File::open(path).map_err(|source| TransactionLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(rates, file)
    }
}

/// Convert a single CSV record. `row` is 1-based (header excluded).
fn convert_record(
    rates: &RateTable,
    record: TransactionRecord,
    row: usize,
) -> Result<CategorizedTransaction, TransactionLoadError> {
    if VatRate::from_percentage(rates, record.vat_percentage).is_none() {
        return Err(TransactionLoadError::InvalidVatPercentage {
            percentage: record.vat_percentage,
            row,
        });
    }

    if record.deductible_percentage < Decimal::ZERO
        || record.deductible_percentage > Decimal::ONE_HUNDRED
    {
        return Err(TransactionLoadError::InvalidDeductiblePercentage {
            percentage: record.deductible_percentage,
            row,
        });
    }

    if record.confidence > MAX_CONFIDENCE {
        return Err(TransactionLoadError::InvalidConfidence {
            value: record.confidence,
            row,
        });
    }

    if record.amount > MAX_INPUT_AMOUNT {
        return Err(TransactionLoadError::AmountOutOfRange {
            amount: record.amount,
            row,
        });
    }

    let category = record
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| UNCATEGORIZED.to_string());

    Ok(CategorizedTransaction {
        date: record.date,
        description: record.description,
        amount: record.amount,
        merchant: record.merchant,
        category,
        deductible_percentage: record.deductible_percentage,
        vat_reclaimable: record.vat_reclaimable,
        vat_percentage: record.vat_percentage,
        kia_eligible: record.kia_eligible,
        confidence: record.confidence,
    })
}
