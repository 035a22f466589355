//! Integration tests running the on-disk fixtures through loader, profile,
//! summary, calculator and request boundary.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use zzp_core::{CalculationInput, RATES_2025, TaxCalculator, TransactionSummary, TransactionWarning};
use zzp_data::{BusinessProfile, TransactionLoader, handle_calculate_request};

const TEST_CSV_2025: &str = include_str!("../test-data/transactions_2025.csv");
const TEST_REQUEST: &str = include_str!("../test-data/request.json");

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data").join(name)
}

fn summary_2025() -> TransactionSummary {
    let transactions = TransactionLoader::parse(&RATES_2025, TEST_CSV_2025.as_bytes())
        .expect("Failed to parse fixture CSV");
    TransactionSummary::from_transactions(&RATES_2025, &transactions)
}

fn response_amount(
    body: &serde_json::Value,
    field: &str,
) -> Decimal {
    body["calculation"][field]
        .as_str()
        .unwrap_or_else(|| panic!("{field} should be a string"))
        .parse()
        .unwrap_or_else(|_| panic!("{field} should be a decimal"))
}

// =============================================================================
// transactions
// =============================================================================

#[test]
fn test_load_fixture_skips_invalid_rows() {
    let transactions = TransactionLoader::load_from_file(&RATES_2025, &fixture("transactions_2025.csv"))
        .expect("Failed to load fixture CSV");

    assert_eq!(transactions.len(), 6);
    assert_eq!(transactions[0].description, "Laptop");
    assert_eq!(transactions[5].description, "Office chair");
}

#[test]
fn test_summary_totals() {
    let summary = summary_2025();

    assert_eq!(summary.transaction_count, 6);
    assert_eq!(summary.total_amount, dec!(2255.40));
    assert_eq!(summary.total_deductible, dec!(2146.80));
    assert_eq!(summary.total_vat_reclaimable, dec!(350.40));
    // The office chair is below the per-asset KIA minimum.
    assert_eq!(summary.kia_eligible_amount, dec!(1210.00));
}

#[test]
fn test_summary_categories_and_warnings() {
    let summary = summary_2025();

    assert_eq!(
        summary.top_categories(3),
        vec![
            ("equipment", dec!(1573.00)),
            ("software", dec!(290.40)),
            ("representation", dec!(218.00)),
        ]
    );
    assert_eq!(
        summary.warnings,
        vec![
            TransactionWarning::LowConfidence(1),
            TransactionWarning::PersonalExpenses(1),
            TransactionWarning::HighValueKiaEligible(1),
        ]
    );
}

#[test]
fn test_summary_feeds_calculator() {
    let summary = summary_2025();
    let input = summary.calculation_input(dec!(60000), dec!(12600), 1450, false);

    let result = TaxCalculator::new(&RATES_2025).calculate(&input).rounded();

    assert_eq!(result.gross_profit, dec!(57853.20));
    assert_eq!(result.zelfstandigenaftrek, dec!(2470));
    assert_eq!(result.startersaftrek, dec!(0));
    assert_eq!(result.mkb_winstvrijstelling, dec!(7033.67));
    assert_eq!(result.taxable_profit, dec!(48349.53));
    assert_eq!(result.income_tax, dec!(17483.28));
    // 1210 of investments is below the KIA floor.
    assert_eq!(result.kia_deduction, dec!(0));
    assert_eq!(result.vat_reclaimable, dec!(350.40));
    assert_eq!(result.net_vat_position, dec!(12249.60));
}

// =============================================================================
// profile
// =============================================================================

#[test]
fn test_profile_fixture_drives_calculation() {
    let profile = BusinessProfile::load(&fixture("profile.toml")).expect("Failed to load profile");
    let rates = profile.rates().expect("2025 should be supported");

    assert!(profile.is_starter_eligible(rates));

    let input = CalculationInput {
        gross_profit: dec!(50000),
        hours_worked: profile.hours_worked,
        is_starter_eligible: profile.is_starter_eligible(rates),
        representation_method: profile.representation_method,
        car: profile.car,
        ..CalculationInput::default()
    };
    let result = TaxCalculator::new(rates).calculate(&input);

    assert_eq!(result.car_bijtelling, dec!(7300));
    assert_eq!(result.income_tax, dec!(16955.1079628));
}

// =============================================================================
// request boundary
// =============================================================================

#[test]
fn test_request_fixture_matches_profile_calculation() {
    let response = handle_calculate_request(&RATES_2025, TEST_REQUEST);

    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], serde_json::Value::Bool(true));
    assert_eq!(response_amount(&response.body, "startersaftrek"), dec!(2123));
    assert_eq!(response_amount(&response.body, "carBijtelling"), dec!(7300));
    assert_eq!(response_amount(&response.body, "taxableProfit"), dec!(46940.31));
    assert_eq!(response_amount(&response.body, "incomeTax"), dec!(16955.11));
    assert_eq!(response_amount(&response.body, "netVatPosition"), dec!(8400));
}

#[test]
fn test_request_with_wrong_types_is_rejected() {
    let response = handle_calculate_request(&RATES_2025, r#"{"isStarterEligible": "yes"}"#);

    assert_eq!(response.status, 400);
    assert!(response.body["error"].is_string());
}
