//! JSON request boundary for the tax calculation.
//!
//! A web handler passes the raw request body to [`handle_calculate_request`]
//! and writes the returned status and body back unchanged. Validation
//! happens here; the calculator itself accepts any input.
//!
//! Request body (all fields optional, camelCase):
//!
//! ```json
//! {
//!   "grossProfit": 85420,
//!   "hoursWorked": 1450,
//!   "isStarterEligible": false,
//!   "yearlyInvestments": 0,
//!   "representationCosts": 0,
//!   "carCatalogValue": 40000,
//!   "carIsElectric": true,
//!   "carPrivateKm": 600,
//!   "vatOnSales": 0,
//!   "vatOnExpenses": 0
//! }
//! ```
//!
//! Missing or `null` numbers default to 0 and missing or `null` booleans to
//! `false`. Amounts may be JSON numbers or numeric strings and must stay
//! within [`MAX_INPUT_AMOUNT`]; results are returned as strings rounded to
//! cents. Anything other than a JSON object is rejected.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use tracing::{error, info, warn};
use zzp_core::{CalculationInput, CarParameters, MAX_INPUT_AMOUNT, RateTable, TaxCalculator};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A calculate-tax request as sent by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculateTaxRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub gross_profit: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub hours_worked: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_starter_eligible: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub yearly_investments: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub representation_costs: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub car_catalog_value: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub car_is_electric: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub car_private_km: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub vat_on_sales: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub vat_on_expenses: Decimal,
}

impl From<CalculateTaxRequest> for CalculationInput {
    fn from(request: CalculateTaxRequest) -> Self {
        let car = (request.car_catalog_value > Decimal::ZERO).then_some(CarParameters {
            catalog_value: request.car_catalog_value,
            is_electric: request.car_is_electric,
            is_hydrogen_or_solar: false,
            private_kilometers: request.car_private_km,
        });

        CalculationInput {
            gross_profit: request.gross_profit,
            hours_worked: request.hours_worked,
            is_starter_eligible: request.is_starter_eligible,
            yearly_investments: request.yearly_investments,
            representation_costs: request.representation_costs,
            car,
            vat_on_sales: request.vat_on_sales,
            vat_on_expenses: request.vat_on_expenses,
            ..CalculationInput::default()
        }
    }
}

/// HTTP status and JSON body to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn error(
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parses a request body into calculator input.
///
/// The body must be a JSON object; serde would otherwise accept an array and
/// assign its items to fields by position.
fn parse_request(body: &str) -> Result<CalculationInput, String> {
    let value: Value = serde_json::from_str(body).map_err(|err| err.to_string())?;
    if !value.is_object() {
        return Err("expected a JSON object".to_string());
    }
    let request: CalculateTaxRequest = serde_json::from_value(value).map_err(|err| err.to_string())?;

    let input = CalculationInput::from(request);
    if let Some((field, amount)) = input.amount_out_of_range() {
        return Err(format!("{field} of {amount} exceeds the limit of {MAX_INPUT_AMOUNT}"));
    }
    Ok(input)
}

/// Parses `body`, runs the calculation and wraps the result.
///
/// * 200 `{"success": true, "calculation": {...}}` on success
/// * 400 `{"error": "..."}` when the body is not a valid request or an
///   amount is out of range
/// * 500 `{"error": "..."}` when the result cannot be serialised
pub fn handle_calculate_request(
    rates: &RateTable,
    body: &str,
) -> ApiResponse {
    let input = match parse_request(body) {
        Ok(input) => input,
        Err(message) => {
            warn!(%message, "rejected calculate-tax request");
            return ApiResponse::error(400, format!("Invalid request body: {message}"));
        }
    };

    let result = TaxCalculator::new(rates).calculate(&input).rounded();

    match serde_json::to_value(&result) {
        Ok(calculation) => {
            info!(
                tax_year = rates.tax_year,
                income_tax = %result.income_tax,
                "calculated tax for request"
            );
            ApiResponse {
                status: 200,
                body: json!({ "success": true, "calculation": calculation }),
            }
        }
        Err(err) => {
            error!(%err, "failed to serialise calculation");
            ApiResponse::error(500, "Failed to calculate tax")
        }
    }
}
