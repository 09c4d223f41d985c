//! Vehicle profile used for fill-up and drive cost estimates

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Tank size and fuel economy supplied by the user for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub tank_size_gallons: f64,
    pub fuel_economy_mpg: f64,
}

impl VehicleProfile {
    /// Build a profile from numeric values, rejecting anything not finite and positive
    pub fn new(tank_size_gallons: f64, fuel_economy_mpg: f64) -> Result<Self, ValidationError> {
        if !is_positive(tank_size_gallons) {
            return Err(ValidationError::InvalidTankSize {
                input: tank_size_gallons.to_string(),
            });
        }
        if !is_positive(fuel_economy_mpg) {
            return Err(ValidationError::InvalidFuelEconomy {
                input: fuel_economy_mpg.to_string(),
            });
        }
        Ok(Self {
            tank_size_gallons,
            fuel_economy_mpg,
        })
    }

    /// Parse and validate the two form inputs.
    ///
    /// Fields are checked in form order, so a bad tank size is reported even
    /// when the fuel economy is also wrong.
    pub fn validate(tank_size_input: &str, mpg_input: &str) -> Result<Self, ValidationError> {
        let tank_size_gallons =
            parse_positive(tank_size_input).ok_or_else(|| ValidationError::InvalidTankSize {
                input: tank_size_input.to_string(),
            })?;
        let fuel_economy_mpg =
            parse_positive(mpg_input).ok_or_else(|| ValidationError::InvalidFuelEconomy {
                input: mpg_input.to_string(),
            })?;

        Ok(Self {
            tank_size_gallons,
            fuel_economy_mpg,
        })
    }

    /// A profile can be deserialized or built literally, bypassing `new`
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_positive(self.tank_size_gallons) && is_positive(self.fuel_economy_mpg)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn parse_positive(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| is_positive(*value))
}
