mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::calculator::{LoanArgs, ScheduleArgs};
use commands::cities::CitiesArgs;
use commands::lead_form::ValidateArgs;
use homeloan_core::HomeLoanConfig;

/// Home-loan EMI calculator and lead-form checks
#[derive(Parser)]
#[command(
    name = "hlc",
    version,
    about = "Home-loan EMI calculator and lead-form checks",
    long_about = "A CLI for the home-loan landing page engines: EMI and repayment \
                  schedules with decimal precision, donut-chart arc allocation, \
                  lead-form validation and the property city list."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Path to a JSON configuration file (bounds, labels, city lookup)
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly EMI, total payable and total interest
    Emi(LoanArgs),
    /// Month-by-month (or yearly) repayment schedule
    Schedule(ScheduleArgs),
    /// Donut-chart arc lengths and stroke parameters
    Ring(LoanArgs),
    /// Validate and submit lead-form values
    Validate(ValidateArgs),
    /// List property cities (remote lookup with built-in fallback)
    Cities(CitiesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&str>) -> Result<HomeLoanConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => {
            debug!(path, "loading configuration");
            input::file::read_json::<HomeLoanConfig>(path)?
        }
        None => HomeLoanConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Emi(args) => commands::calculator::run_emi(args, &config),
        Commands::Schedule(args) => commands::calculator::run_schedule(args, &config),
        Commands::Ring(args) => commands::calculator::run_ring(args, &config),
        Commands::Validate(args) => commands::lead_form::run_validate(args, &config),
        Commands::Cities(args) => commands::cities::run_cities(args, &config),
        Commands::Version => {
            println!("hlc {}", env!("CARGO_PKG_VERSION"));
            process::exit(0);
        }
    });

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
