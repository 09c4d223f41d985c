//! Derived distance and cost metrics for a single station

use serde::Serialize;

use super::distance::distance_miles;
use crate::models::{Coordinates, FuelType, StationRecord, VehicleProfile};

/// A station record plus the metrics derived for one ranking request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRecord {
    #[serde(flatten)]
    pub record: StationRecord,
    /// Great-circle miles from the user, when both positions are known
    pub distance_miles: Option<f64>,
    /// Cost of filling the whole tank at this station
    pub fill_cost: Option<f64>,
    /// Fuel burned driving one way to the station, priced at this station
    pub drive_cost: Option<f64>,
    /// `fill_cost + drive_cost`
    pub total_cost: Option<f64>,
}

impl AnnotatedRecord {
    /// Price of the selected grade at this station
    #[must_use]
    pub fn price(&self, fuel_type: FuelType) -> Option<f64> {
        self.record.price_for(fuel_type)
    }
}

/// Compute every derived metric for `record`.
///
/// A profile failing [`VehicleProfile::is_valid`] is treated as absent, so no
/// cost is ever derived from a zero or negative tank size or fuel economy.
/// A user location with a NaN or infinite part is treated as absent too.
#[must_use]
pub fn annotate(
    record: &StationRecord,
    user_location: Option<Coordinates>,
    fuel_type: FuelType,
    vehicle: Option<&VehicleProfile>,
) -> AnnotatedRecord {
    let vehicle = vehicle.filter(|profile| profile.is_valid());

    let distance = user_location
        .filter(Coordinates::is_finite)
        .zip(record.coordinates())
        .map(|(from, to)| distance_miles(from, to));
    let price = record.price_for(fuel_type);

    let fill_cost = vehicle
        .zip(price)
        .map(|(profile, price)| profile.tank_size_gallons * price);

    let drive_cost = match (distance, price, vehicle) {
        (Some(miles), Some(price), Some(profile)) => {
            Some((miles / profile.fuel_economy_mpg) * price)
        }
        _ => None,
    };

    let total_cost = fill_cost.zip(drive_cost).map(|(fill, drive)| fill + drive);

    AnnotatedRecord {
        record: record.clone(),
        distance_miles: distance,
        fill_cost,
        drive_cost,
        total_cost,
    }
}
