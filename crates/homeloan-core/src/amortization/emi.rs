//! Equated Monthly Installment (EMI) for a fixed-rate amortizing loan.
//!
//! `compute_amortization` is the pure engine. `calculate_emi` wraps it for
//! callers that hand in raw user input: the input is clamped to the
//! calculator's slider bounds, the ring allocation is attached and the
//! figures are formatted for display. All money math in `rust_decimal::Decimal`.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::chart::ring::{allocate_arcs, ArcAllocation};
use crate::config::CalculatorConfig;
use crate::error::HomeLoanError;
use crate::format::format_inr;
use crate::types::{with_metadata, ComputationOutput, LoanParameters, Money, Percent, Rate};
use crate::HomeLoanResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Derived repayment figures. Never rounded; rounding is a display concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub monthly_payment: Money,
    pub total_payable: Money,
    pub total_interest: Money,
}

impl AmortizationResult {
    pub const ZERO: AmortizationResult = AmortizationResult {
        monthly_payment: Decimal::ZERO,
        total_payable: Decimal::ZERO,
        total_interest: Decimal::ZERO,
    };

    pub fn is_zero(&self) -> bool {
        self.monthly_payment.is_zero() && self.total_payable.is_zero()
    }
}

/// Raw calculator input, as entered or read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub term_months: u32,
}

impl From<LoanParameters> for EmiInput {
    fn from(p: LoanParameters) -> Self {
        Self {
            principal: p.principal,
            annual_rate_percent: p.annual_rate_percent,
            term_months: p.term_months,
        }
    }
}

/// Display strings for the three headline figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiDisplay {
    pub principal: String,
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_payable: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiOutput {
    /// Parameters after clamping and rate rounding.
    pub parameters: LoanParameters,
    pub monthly_rate: Rate,
    pub amortization: AmortizationResult,
    pub arcs: ArcAllocation,
    pub display: EmiDisplay,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Monthly rate from an annual percentage: `annual / 12 / 100`.
pub fn monthly_rate(annual_rate_percent: Percent) -> Rate {
    annual_rate_percent / dec!(12) / dec!(100)
}

/// Fixed monthly payment, total payable and total interest.
///
/// Zero or negative inputs yield `AmortizationResult::ZERO`, as does any
/// input whose arithmetic is undefined or overflows. A half-edited form is
/// an expected state, so nothing here returns an error.
pub fn compute_amortization(params: &LoanParameters) -> AmortizationResult {
    if params.is_degenerate() {
        return AmortizationResult::ZERO;
    }
    amortize(params).unwrap_or(AmortizationResult::ZERO)
}

fn amortize(params: &LoanParameters) -> Option<AmortizationResult> {
    let principal = params.principal;
    let months = Decimal::from(params.term_months);
    let monthly_payment = level_payment(
        principal,
        monthly_rate(params.annual_rate_percent),
        params.term_months,
    )?;
    if monthly_payment <= Decimal::ZERO {
        return None;
    }
    let total_payable = monthly_payment.checked_mul(months)?;
    Some(AmortizationResult {
        monthly_payment,
        total_payable,
        total_interest: total_payable - principal,
    })
}

/// `P·r·(1+r)^n / ((1+r)^n − 1)`; `None` when the denominator vanishes.
pub(crate) fn level_payment(principal: Money, rate: Rate, months: u32) -> Option<Money> {
    let growth = (Decimal::ONE + rate).checked_powu(u64::from(months))?;
    let denom = growth - Decimal::ONE;
    if denom.is_zero() {
        return None;
    }
    principal
        .checked_mul(rate)?
        .checked_mul(growth)?
        .checked_div(denom)
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Clamp the input to the calculator bounds, then compute the EMI, the ring
/// allocation and display strings.
pub fn calculate_emi(
    input: &EmiInput,
    config: &CalculatorConfig,
) -> HomeLoanResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    config.validate()?;
    if input.principal < Decimal::ZERO || input.annual_rate_percent < Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "principal/annual_rate_percent".into(),
            reason: "Loan amount and interest rate cannot be negative".into(),
        });
    }

    let raw = LoanParameters::new(input.principal, input.annual_rate_percent, input.term_months);
    let parameters = config.normalize(&raw);
    let warnings = clamp_warnings(&raw, &parameters);
    if !warnings.is_empty() {
        debug!(?raw, ?parameters, "calculator input adjusted to bounds");
    }

    let amortization = compute_amortization(&parameters);
    let arcs = allocate_arcs(&amortization, parameters.principal, config.ring_radius);
    let output = EmiOutput {
        parameters,
        monthly_rate: monthly_rate(parameters.annual_rate_percent),
        amortization,
        arcs,
        display: EmiDisplay {
            principal: format_inr(parameters.principal),
            monthly_payment: format_inr(amortization.monthly_payment),
            total_interest: format_inr(amortization.total_interest),
            total_payable: format_inr(amortization.total_payable),
        },
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate EMI: P*r*(1+r)^n / ((1+r)^n - 1)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn clamp_warnings(raw: &LoanParameters, effective: &LoanParameters) -> Vec<String> {
    let mut warnings = Vec::new();
    if raw.principal != effective.principal {
        warnings.push(format!(
            "Loan amount {} adjusted to {}",
            raw.principal, effective.principal
        ));
    }
    if raw.annual_rate_percent != effective.annual_rate_percent {
        warnings.push(format!(
            "Interest rate {}% adjusted to {}%",
            raw.annual_rate_percent, effective.annual_rate_percent
        ));
    }
    if raw.term_months != effective.term_months {
        warnings.push(format!(
            "Tenure {} months adjusted to {} months",
            raw.term_months, effective.term_months
        ));
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
