pub mod config;
pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "calculator")]
pub mod amortization;

#[cfg(feature = "calculator")]
pub mod calculator;

#[cfg(feature = "calculator")]
pub mod chart;

#[cfg(feature = "lead_form")]
pub mod lead_form;

pub mod cities;

pub use config::HomeLoanConfig;
pub use error::HomeLoanError;
pub use types::*;

/// Standard result type for all home-loan operations
pub type HomeLoanResult<T> = Result<T, HomeLoanError>;
