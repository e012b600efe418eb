use clap::Args;
use serde_json::Value;

use homeloan_core::lead_form::{LeadForm, LeadFormValues, LoggingSink};
use homeloan_core::HomeLoanConfig;

use crate::input;

/// Arguments for a lead-form submission check
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to JSON file with the form values (camelCase keys)
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub property_location: String,

    #[arg(long, default_value = "")]
    pub preferred_office: String,

    /// Accept the terms and conditions
    #[arg(long)]
    pub terms: bool,
}

/// Replay a submit attempt over the given values.
pub fn run_validate(
    args: ValidateArgs,
    config: &HomeLoanConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let values: LeadFormValues = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_stdin()? {
        piped
    } else {
        LeadFormValues {
            first_name: args.first_name,
            last_name: args.last_name,
            phone: args.phone,
            property_location: args.property_location,
            preferred_office: args.preferred_office,
            terms: args.terms,
        }
    };

    let mut form = LeadForm::with_config(config.form.clone());
    form.load(values);
    let outcome = form.submit(&mut LoggingSink);
    Ok(serde_json::to_value(outcome)?)
}
