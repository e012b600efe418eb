//! Month-by-month repayment schedule for a level-pay loan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::emi::{compute_amortization, monthly_rate};
use crate::types::{LoanParameters, Money};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub opening_balance: Money,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<ScheduleRow>,
    pub yearly: Vec<YearSummary>,
    pub total_principal: Money,
    pub total_interest: Money,
}

/// Build the full schedule. Degenerate parameters give an empty schedule.
///
/// The last row pays off whatever balance remains, so the closing balance is
/// exactly zero even though the level payment carries rounding residue.
pub fn build_schedule(params: &LoanParameters) -> AmortizationSchedule {
    let amort = compute_amortization(params);
    if amort.is_zero() {
        return AmortizationSchedule::default();
    }

    let rate = monthly_rate(params.annual_rate_percent);
    let mut balance = params.principal;
    let mut rows = Vec::with_capacity(params.term_months as usize);
    let mut total_principal = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;

    for month in 1..=params.term_months {
        let interest = balance * rate;
        let (payment, principal) = if month == params.term_months {
            (balance + interest, balance)
        } else {
            let principal = (amort.monthly_payment - interest).min(balance);
            (amort.monthly_payment, principal)
        };
        let opening_balance = balance;
        balance -= principal;
        total_principal += principal;
        total_interest += interest;
        rows.push(ScheduleRow {
            month,
            opening_balance,
            payment,
            interest,
            principal,
            closing_balance: balance,
        });
    }

    let yearly = summarize_years(&rows);
    AmortizationSchedule {
        rows,
        yearly,
        total_principal,
        total_interest,
    }
}

/// Fold monthly rows into 12-month buckets; a short final year is kept.
pub fn summarize_years(rows: &[ScheduleRow]) -> Vec<YearSummary> {
    rows.chunks(12)
        .enumerate()
        .map(|(idx, chunk)| YearSummary {
            year: idx as u32 + 1,
            principal_paid: chunk.iter().map(|r| r.principal).sum(),
            interest_paid: chunk.iter().map(|r| r.interest).sum(),
            closing_balance: chunk.last().map(|r| r.closing_balance).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const TOL: Decimal = dec!(0.0001);

    fn reference_loan() -> LoanParameters {
        LoanParameters::new(dec!(7_500_000), dec!(9.0), 180)
    }

    #[test]
    fn test_schedule_pays_off_exactly() {
        let s = build_schedule(&reference_loan());
        assert_eq!(s.rows.len(), 180);
        assert_eq!(s.rows.last().unwrap().closing_balance, Decimal::ZERO);
        assert!((s.total_principal - dec!(7_500_000)).abs() < TOL);
    }

    #[test]
    fn test_schedule_interest_matches_engine() {
        let p = reference_loan();
        let s = build_schedule(&p);
        let engine = compute_amortization(&p);
        assert!((s.total_interest - engine.total_interest).abs() < TOL);
    }

    #[test]
    fn test_first_month_split() {
        let s = build_schedule(&reference_loan());
        let first = &s.rows[0];
        assert_eq!(first.interest, dec!(56_250));
        assert_eq!(first.opening_balance, dec!(7_500_000));
        assert!((first.principal + first.interest - first.payment).abs() < TOL);
    }

    #[test]
    fn test_yearly_summary() {
        let s = build_schedule(&LoanParameters::new(dec!(1_000_000), dec!(10), 30));
        assert_eq!(s.yearly.len(), 3);
        assert_eq!(s.yearly[2].year, 3);
        assert_eq!(s.yearly[2].closing_balance, Decimal::ZERO);
        let paid: Decimal = s.yearly.iter().map(|y| y.principal_paid).sum();
        assert!((paid - dec!(1_000_000)).abs() < TOL);
    }

    #[test]
    fn test_degenerate_schedule_is_empty() {
        let s = build_schedule(&LoanParameters::new(dec!(1_000_000), dec!(0), 120));
        assert!(s.rows.is_empty());
        assert!(s.yearly.is_empty());
    }
}
