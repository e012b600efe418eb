//! Tunable bounds, labels and collaborator settings.
//!
//! Every section deserializes with defaults, so a JSON config file only needs
//! to name the values it overrides.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HomeLoanError;
use crate::types::{LoanParameters, Money, Percent};
use crate::HomeLoanResult;

/// Inclusive range for a slider-backed input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeLoanConfig {
    pub calculator: CalculatorConfig,
    pub form: FormConfig,
    pub cities: CityLookupConfig,
}

impl HomeLoanConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> HomeLoanResult<Self> {
        let config: HomeLoanConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HomeLoanResult<()> {
        self.calculator.validate()?;
        self.form.validate()?;
        self.cities.validate()
    }
}

/// EMI calculator bounds, slider steps and chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub principal: Bounds<Money>,
    pub principal_step: Money,
    pub rate_percent: Bounds<Percent>,
    /// Decimal places kept on the annual rate. `0` restricts the rate to
    /// whole-percent steps.
    pub rate_decimal_places: u32,
    pub term_months: Bounds<u32>,
    pub term_step: u32,
    pub default_loan: LoanParameters,
    pub ring_radius: f64,
    pub ring_stroke_width: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            principal: Bounds::new(dec!(100_000), dec!(10_000_000)),
            principal_step: dec!(100_000),
            rate_percent: Bounds::new(dec!(7), dec!(15)),
            rate_decimal_places: 1,
            term_months: Bounds::new(12, 360),
            term_step: 12,
            default_loan: LoanParameters::new(dec!(7_500_000), dec!(9.0), 180),
            ring_radius: 80.0,
            ring_stroke_width: 20.0,
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> HomeLoanResult<()> {
        if !self.principal.is_ordered() || self.principal.min <= Decimal::ZERO {
            return Err(HomeLoanError::InvalidConfig(
                "principal bounds must be positive with min <= max".into(),
            ));
        }
        if !self.rate_percent.is_ordered() || self.rate_percent.min <= Decimal::ZERO {
            return Err(HomeLoanError::InvalidConfig(
                "rate bounds must be positive with min <= max".into(),
            ));
        }
        if !self.term_months.is_ordered() || self.term_months.min == 0 {
            return Err(HomeLoanError::InvalidConfig(
                "term bounds must be positive with min <= max".into(),
            ));
        }
        if self.principal_step <= Decimal::ZERO || self.term_step == 0 {
            return Err(HomeLoanError::InvalidConfig(
                "slider steps must be positive".into(),
            ));
        }
        if self.rate_decimal_places > 4 {
            return Err(HomeLoanError::InvalidConfig(
                "rate_decimal_places must be between 0 and 4".into(),
            ));
        }
        if !(self.ring_radius.is_finite() && self.ring_radius > 0.0) {
            return Err(HomeLoanError::InvalidConfig(
                "ring_radius must be a positive number".into(),
            ));
        }
        if !(self.ring_stroke_width.is_finite() && self.ring_stroke_width > 0.0) {
            return Err(HomeLoanError::InvalidConfig(
                "ring_stroke_width must be a positive number".into(),
            ));
        }
        Ok(())
    }

    pub fn clamp_principal(&self, principal: Money) -> Money {
        self.principal.clamp(principal)
    }

    pub fn clamp_term(&self, term_months: u32) -> u32 {
        self.term_months.clamp(term_months)
    }

    /// Round the rate to the configured precision, then clamp it.
    pub fn normalize_rate(&self, rate_percent: Percent) -> Percent {
        let rounded = rate_percent.round_dp_with_strategy(
            self.rate_decimal_places,
            RoundingStrategy::MidpointAwayFromZero,
        );
        self.rate_percent.clamp(rounded)
    }

    /// Slider increment for the rate, derived from its precision.
    pub fn rate_step(&self) -> Percent {
        Decimal::new(1, self.rate_decimal_places)
    }

    /// Clamp and round all three inputs.
    pub fn normalize(&self, params: &LoanParameters) -> LoanParameters {
        LoanParameters {
            principal: self.clamp_principal(params.principal),
            annual_rate_percent: self.normalize_rate(params.annual_rate_percent),
            term_months: self.clamp_term(params.term_months),
        }
    }
}

/// Lead-form labels and phone policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub property_location_label: String,
    pub preferred_office_label: String,
    /// Minimum digit count accepted by the phone validator (country code included).
    pub phone_min_digits: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            property_location_label: "Property Location".into(),
            preferred_office_label: "Preferred Office".into(),
            phone_min_digits: 8,
        }
    }
}

impl FormConfig {
    /// E.164 caps numbers at 15 digits.
    pub const PHONE_MAX_DIGITS: usize = 15;

    pub fn validate(&self) -> HomeLoanResult<()> {
        if self.phone_min_digits < 2 || self.phone_min_digits > Self::PHONE_MAX_DIGITS {
            return Err(HomeLoanError::InvalidConfig(format!(
                "phone_min_digits must be between 2 and {}",
                Self::PHONE_MAX_DIGITS
            )));
        }
        if self.property_location_label.trim().is_empty()
            || self.preferred_office_label.trim().is_empty()
        {
            return Err(HomeLoanError::InvalidConfig(
                "select labels must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Remote city-list lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityLookupConfig {
    pub endpoint: String,
    pub country: String,
    pub timeout_ms: u64,
}

impl Default for CityLookupConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://countriesnow.space/api/v0.1/countries/cities".into(),
            country: "India".into(),
            timeout_ms: 10_000,
        }
    }
}

impl CityLookupConfig {
    pub fn validate(&self) -> HomeLoanResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(HomeLoanError::InvalidConfig("city endpoint is empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(HomeLoanError::InvalidConfig(
                "city lookup timeout must be positive".into(),
            ));
        }
        Ok(())
    }
}
