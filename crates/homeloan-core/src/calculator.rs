//! Controlled input model behind the EMI calculator widgets.
//!
//! Each of the three inputs has a text box and a slider. Text edits that do
//! not parse are rejected and the previous value is kept; every accepted
//! value is clamped to the configured bounds. The derived snapshot is
//! memoized on the current parameter triple.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::amortization::emi::{compute_amortization, AmortizationResult};
use crate::chart::ring::{allocate_arcs, ArcAllocation};
use crate::chart::tooltip::{RingGeometry, Tooltip};
use crate::config::CalculatorConfig;
use crate::error::HomeLoanError;
use crate::types::{LoanParameters, Money, Percent};
use crate::HomeLoanResult;

/// Everything the view renders for one parameter triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiSnapshot {
    pub parameters: LoanParameters,
    pub amortization: AmortizationResult,
    pub arcs: ArcAllocation,
}

#[derive(Debug, Clone)]
pub struct LoanCalculator {
    config: CalculatorConfig,
    params: LoanParameters,
    memo: Option<EmiSnapshot>,
}

impl LoanCalculator {
    pub fn new(config: CalculatorConfig) -> HomeLoanResult<Self> {
        config.validate()?;
        let params = config.normalize(&config.default_loan);
        Ok(Self {
            config,
            params,
            memo: None,
        })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn parameters(&self) -> LoanParameters {
        self.params
    }

    pub fn geometry(&self) -> RingGeometry {
        RingGeometry::new(self.config.ring_radius, self.config.ring_stroke_width)
    }

    // -- numeric entry ------------------------------------------------------

    /// Accepts `7500000`, `75,00,000` or `7_500_000`.
    pub fn enter_principal(&mut self, text: &str) -> HomeLoanResult<Money> {
        let value = parse_amount("principal", text)?;
        Ok(self.set_principal(value))
    }

    pub fn enter_rate(&mut self, text: &str) -> HomeLoanResult<Percent> {
        let value = parse_amount("annual_rate_percent", text.trim().trim_end_matches('%'))?;
        Ok(self.set_rate(value))
    }

    pub fn enter_term(&mut self, text: &str) -> HomeLoanResult<u32> {
        let value = text
            .trim()
            .parse::<u32>()
            .map_err(|_| HomeLoanError::InvalidInput {
                field: "term_months".into(),
                reason: format!("'{}' is not a whole number of months", text.trim()),
            })?;
        Ok(self.set_term(value))
    }

    // -- direct / slider values --------------------------------------------

    pub fn set_principal(&mut self, principal: Money) -> Money {
        self.params.principal = self.config.clamp_principal(principal);
        self.params.principal
    }

    pub fn set_rate(&mut self, rate_percent: Percent) -> Percent {
        self.params.annual_rate_percent = self.config.normalize_rate(rate_percent);
        self.params.annual_rate_percent
    }

    pub fn set_term(&mut self, term_months: u32) -> u32 {
        self.params.term_months = self.config.clamp_term(term_months);
        self.params.term_months
    }

    /// Slider position for the principal, clamped and snapped to the slider step.
    pub fn slide_principal(&mut self, position: Money) -> Money {
        let bounded = self.config.clamp_principal(position);
        let snapped = snap(bounded, self.config.principal.min, self.config.principal_step);
        self.set_principal(snapped)
    }

    pub fn slide_term(&mut self, position: u32) -> u32 {
        let min = self.config.term_months.min;
        let step = self.config.term_step;
        let offset = self.config.clamp_term(position) - min;
        let steps = offset.saturating_add(step / 2) / step;
        let snapped = min.saturating_add(steps.saturating_mul(step));
        self.set_term(snapped)
    }

    pub fn slide_rate(&mut self, position: Percent) -> Percent {
        self.set_rate(position)
    }

    // -- derived ------------------------------------------------------------

    /// Amortization and ring allocation for the current inputs.
    pub fn snapshot(&mut self) -> EmiSnapshot {
        if let Some(memo) = self.memo {
            if memo.parameters == self.params {
                return memo;
            }
        }
        let amortization = compute_amortization(&self.params);
        let arcs = allocate_arcs(&amortization, self.params.principal, self.config.ring_radius);
        debug!(parameters = ?self.params, "recomputed EMI snapshot");
        let snapshot = EmiSnapshot {
            parameters: self.params,
            amortization,
            arcs,
        };
        self.memo = Some(snapshot);
        snapshot
    }

    /// Tooltip for a pointer at `(dx, dy)` from the ring centre, if it is on a segment.
    pub fn tooltip_at(&mut self, dx: f64, dy: f64) -> Option<Tooltip> {
        let snapshot = self.snapshot();
        let segment = self.geometry().hit_test(&snapshot.arcs, dx, dy)?;
        Some(Tooltip::for_segment(
            segment,
            &snapshot.amortization,
            snapshot.parameters.principal,
            dx,
            dy,
        ))
    }
}

fn parse_amount(field: &str, text: &str) -> HomeLoanResult<Decimal> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    Decimal::from_str(&cleaned).map_err(|_| HomeLoanError::InvalidInput {
        field: field.into(),
        reason: format!("'{}' is not a number", text.trim()),
    })
}

fn snap(position: Decimal, origin: Decimal, step: Decimal) -> Decimal {
    let steps = ((position - origin) / step)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    origin + steps * step
}
