use napi::Result as NapiResult;
use napi_derive::napi;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use homeloan_core::amortization::emi::{self, EmiInput};
use homeloan_core::amortization::schedule;
use homeloan_core::chart::ring::{self, ArcAllocation, ArcStroke};
use homeloan_core::config::CalculatorConfig;
use homeloan_core::lead_form::{FieldName, FieldValue, LeadForm, LeadFormValues, LoggingSink};
use homeloan_core::LoanParameters;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: EmiInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        emi::calculate_emi(&input, &CalculatorConfig::default()).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Schedule for the loan after the calculator's bounds are applied.
#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let input: EmiInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let params = LoanParameters::new(input.principal, input.annual_rate_percent, input.term_months);
    let normalized = CalculatorConfig::default().normalize(&params);
    let output = schedule::build_schedule(&normalized);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ArcRequest {
    #[serde(flatten)]
    loan: EmiInput,
    #[serde(default = "default_radius")]
    ring_radius: f64,
}

fn default_radius() -> f64 {
    ring::REFERENCE_RING_RADIUS
}

#[derive(Serialize)]
struct ArcResponse {
    #[serde(flatten)]
    arcs: ArcAllocation,
    strokes: [ArcStroke; 2],
}

/// Raw arc split for the given loan, without clamping to the calculator bounds.
#[napi]
pub fn allocate_arcs(input_json: String) -> NapiResult<String> {
    let request: ArcRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let params = LoanParameters::new(
        request.loan.principal,
        request.loan.annual_rate_percent,
        request.loan.term_months,
    );
    let amortization = emi::compute_amortization(&params);
    let arcs = ring::allocate_arcs(&amortization, params.principal, request.ring_radius);
    let response = ArcResponse {
        arcs,
        strokes: arcs.strokes(),
    };
    serde_json::to_string(&response).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Lead form
// ---------------------------------------------------------------------------

/// Error message for one field value; empty when valid.
#[napi]
pub fn validate_field(field: String, value_json: String) -> NapiResult<String> {
    let field = FieldName::from_str(&field).map_err(to_napi_error)?;
    let value: FieldValue = serde_json::from_str(&value_json).map_err(to_napi_error)?;
    let mut form = LeadForm::new();
    form.edit(field, value).map_err(to_napi_error)?;
    Ok(form.error(field))
}

#[napi]
pub fn submit_lead_form(values_json: String) -> NapiResult<String> {
    let values: LeadFormValues = serde_json::from_str(&values_json).map_err(to_napi_error)?;
    let mut form = LeadForm::new();
    form.load(values);
    let outcome = form.submit(&mut LoggingSink);
    serde_json::to_string(&outcome).map_err(to_napi_error)
}

#[napi]
pub fn fallback_cities() -> NapiResult<String> {
    serde_json::to_string(&homeloan_core::cities::fallback_cities()).map_err(to_napi_error)
}
