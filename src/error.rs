//! Error types and handling for the `FuelRank` application

use thiserror::Error;

/// Rejection reasons for a vehicle profile entered by the user.
///
/// Each variant names the field that failed so the caller can point at it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Tank size did not parse to a finite number greater than zero
    #[error("Invalid tank size '{input}': enter a number of gallons greater than 0")]
    InvalidTankSize { input: String },

    /// Fuel economy did not parse to a finite number greater than zero
    #[error("Invalid fuel economy '{input}': enter miles per gallon greater than 0")]
    InvalidFuelEconomy { input: String },
}

impl ValidationError {
    /// Name of the offending form field
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidTankSize { .. } => "tank_size",
            ValidationError::InvalidFuelEconomy { .. } => "fuel_economy",
        }
    }
}

/// Main error type for the `FuelRank` application
#[derive(Error, Debug)]
pub enum FuelRankError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Station table communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    /// Malformed station data
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl FuelRankError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FuelRankError::Config { .. } => {
                "Configuration error. Please check your config file and station table credentials."
                    .to_string()
            }
            FuelRankError::Api { message } => {
                format!("Unable to load gas prices: {message}")
            }
            FuelRankError::Validation { source } => source.to_string(),
            FuelRankError::Parse { .. } => {
                "Station data could not be read. The price table may have an unexpected format."
                    .to_string()
            }
            FuelRankError::Io { .. } => {
                "File operation failed. Please check the file path and permissions.".to_string()
            }
            FuelRankError::General { message } => message.clone(),
        }
    }
}
