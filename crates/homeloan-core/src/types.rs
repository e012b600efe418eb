use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.0075 = 0.75% per month).
pub type Rate = Decimal;

/// Rates expressed as percentages (9.0 = 9% per annum), as entered by the user.
pub type Percent = Decimal;

/// The three user-editable inputs of the EMI calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Loan amount.
    pub principal: Money,
    /// Annual interest rate in percent (9.0 = 9%).
    pub annual_rate_percent: Percent,
    /// Loan tenure in months.
    pub term_months: u32,
}

impl LoanParameters {
    pub fn new(principal: Money, annual_rate_percent: Percent, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    /// True when any input is zero or negative; such inputs amortize to zero.
    pub fn is_degenerate(&self) -> bool {
        self.principal <= Decimal::ZERO
            || self.annual_rate_percent <= Decimal::ZERO
            || self.term_months == 0
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_degenerate_parameters() {
        assert!(LoanParameters::new(dec!(0), dec!(9), 180).is_degenerate());
        assert!(LoanParameters::new(dec!(100_000), dec!(0), 180).is_degenerate());
        assert!(LoanParameters::new(dec!(100_000), dec!(9), 0).is_degenerate());
        assert!(LoanParameters::new(dec!(-5), dec!(9), 12).is_degenerate());
        assert!(!LoanParameters::new(dec!(100_000), dec!(9), 12).is_degenerate());
    }

    #[test]
    fn test_with_metadata_envelope() {
        let out = with_metadata("EMI", &dec!(1), vec!["w".into()], 7, dec!(2));
        assert_eq!(out.result, dec!(2));
        assert_eq!(out.methodology, "EMI");
        assert_eq!(out.warnings, vec!["w".to_string()]);
        assert_eq!(out.metadata.computation_time_us, 7);
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    }
}
