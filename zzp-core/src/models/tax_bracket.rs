use rust_decimal::Decimal;
use serde::Serialize;

/// One band of the box 1 income tax schedule.
///
/// `max_income` is `None` for the top band. Income equal to `max_income`
/// belongs to this band, not the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeTaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}
