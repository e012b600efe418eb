use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{json, Value};

use homeloan_core::amortization::emi::{self, EmiInput};
use homeloan_core::amortization::schedule;
use homeloan_core::chart::ring::{ArcAllocation, RingSegment};
use homeloan_core::HomeLoanConfig;

use crate::input;

/// Loan inputs shared by the calculator commands
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount (defaults to the configured default loan)
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent, e.g. 9.0
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long, alias = "months")]
    pub tenure: Option<u32>,
}

/// Arguments for the repayment schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Summarise by year instead of listing every month
    #[arg(long)]
    pub yearly: bool,
}

fn read_loan(args: &LoanArgs, config: &HomeLoanConfig) -> Result<EmiInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(piped) = input::stdin::read_stdin()? {
        return Ok(piped);
    }
    let defaults = config.calculator.default_loan;
    Ok(EmiInput {
        principal: args.principal.unwrap_or(defaults.principal),
        annual_rate_percent: args.rate.unwrap_or(defaults.annual_rate_percent),
        term_months: args.tenure.unwrap_or(defaults.term_months),
    })
}

pub fn run_emi(args: LoanArgs, config: &HomeLoanConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input = read_loan(&args, config)?;
    let result = emi::calculate_emi(&emi_input, &config.calculator)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(
    args: ScheduleArgs,
    config: &HomeLoanConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input = read_loan(&args.loan, config)?;
    let envelope = emi::calculate_emi(&emi_input, &config.calculator)?;
    let built = schedule::build_schedule(&envelope.result.parameters);
    let results = if args.yearly {
        serde_json::to_value(&built.yearly)?
    } else {
        serde_json::to_value(&built.rows)?
    };
    Ok(json!({
        "results": results,
        "total_principal": built.total_principal,
        "total_interest": built.total_interest,
        "warnings": envelope.warnings,
    }))
}

#[derive(Serialize)]
struct StrokeRow {
    segment: RingSegment,
    label: &'static str,
    dash_array: String,
    dash_offset: f64,
    rotation_degrees: f64,
}

#[derive(Serialize)]
struct RingReport {
    #[serde(flatten)]
    arcs: ArcAllocation,
    principal_share: f64,
    strokes: Vec<StrokeRow>,
}

pub fn run_ring(args: LoanArgs, config: &HomeLoanConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input = read_loan(&args, config)?;
    let envelope = emi::calculate_emi(&emi_input, &config.calculator)?;
    let arcs = envelope.result.arcs;
    let principal_share = if arcs.is_empty() {
        0.0
    } else {
        arcs.principal_arc_length / arcs.ring_circumference
    };
    let strokes = arcs
        .strokes()
        .into_iter()
        .map(|s| StrokeRow {
            segment: s.segment,
            label: s.segment.label(),
            dash_array: s.dash_array(),
            dash_offset: s.dash_offset,
            rotation_degrees: s.rotation_degrees,
        })
        .collect();
    Ok(json!({
        "result": RingReport { arcs, principal_share, strokes },
        "methodology": "Arc length proportional to share of total payable",
        "warnings": envelope.warnings,
    }))
}
