use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomeLoanError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("City lookup failed: {0}")]
    CityLookup(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for HomeLoanError {
    fn from(e: serde_json::Error) -> Self {
        HomeLoanError::SerializationError(e.to_string())
    }
}
