//! Plain-text rendering of calculation results for the terminal.

use std::fmt::Write;

use rust_decimal::Decimal;
use zzp_core::calculations::common::{format_euro, round_half_up};
use zzp_core::{CalculationResult, KorStatus, TransactionSummary};

const LABEL_WIDTH: usize = 32;

fn line(
    out: &mut String,
    label: &str,
    amount: Decimal,
) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{:>16}", format_euro(amount));
}

/// Renders the calculation chain, one amount per line.
pub fn render_calculation(
    tax_year: i32,
    result: &CalculationResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Income tax {tax_year}");
    line(&mut out, "Gross profit", result.gross_profit);
    line(&mut out, "Zelfstandigenaftrek", result.zelfstandigenaftrek);
    line(&mut out, "Startersaftrek", result.startersaftrek);
    line(&mut out, "Profit after ondernemersaftrek", result.profit_after_ondernemersaftrek);
    line(&mut out, "MKB winstvrijstelling", result.mkb_winstvrijstelling);
    line(&mut out, "Car bijtelling", result.car_bijtelling);
    line(&mut out, "Taxable profit", result.taxable_profit);
    line(&mut out, "Income tax", result.income_tax);
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{:>15}%",
        "Effective tax rate",
        round_half_up(result.effective_tax_rate).to_string()
    );
    line(&mut out, "Net profit", result.net_profit());

    let _ = writeln!(out, "\nVAT");
    line(&mut out, "VAT due", result.vat_due);
    line(&mut out, "VAT reclaimable", result.vat_reclaimable);
    line(&mut out, "Net VAT position", result.net_vat_position);

    let _ = writeln!(out, "\nFor reference (not in taxable profit)");
    line(&mut out, "KIA", result.kia_deduction);
    line(&mut out, "Representation deduction", result.representation_deduction);
    out
}

/// Renders transaction totals, the largest categories and any warnings.
pub fn render_summary(summary: &TransactionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Transactions: {}", summary.transaction_count);
    line(&mut out, "Total amount", summary.total_amount);
    line(&mut out, "Total deductible", summary.total_deductible);
    line(&mut out, "VAT reclaimable", summary.total_vat_reclaimable);
    line(&mut out, "KIA eligible", summary.kia_eligible_amount);

    let top = summary.top_categories(5);
    if !top.is_empty() {
        let _ = writeln!(out, "\nTop categories");
        for (category, amount) in top {
            line(&mut out, category, amount);
        }
    }

    if !summary.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings");
        for warning in &summary.warnings {
            let _ = writeln!(out, "- {warning}");
        }
    }
    out
}

pub fn render_kor_status(status: &KorStatus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Eligible for KOR: {}", if status.eligible { "yes" } else { "no" });
    let _ = writeln!(out, "Must exit KOR:    {}", if status.must_exit { "yes" } else { "no" });
    if let Some(message) = &status.warning_message {
        let _ = writeln!(out, "{message}");
    }
    out
}
