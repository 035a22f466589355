mod calculation;
mod kor_status;
mod rate_table;
mod tax_bracket;
mod transaction;
mod vat_rate;

pub use calculation::{
    CalculationInput, CalculationResult, CarParameters, MAX_INPUT_AMOUNT, RepresentationMethod,
};
pub use kor_status::KorStatus;
pub use rate_table::{
    CarBenefitRates, DeductionConstants, EntrepreneurCriteria, KiaSchedule, RATES_2025, RateTable,
    VatRates,
};
pub use tax_bracket::IncomeTaxBracket;
pub use transaction::{
    CategorizedTransaction, PRIVATE_PERSONAL_CATEGORY, TransactionSummary, TransactionWarning,
};
pub use vat_rate::VatRate;
