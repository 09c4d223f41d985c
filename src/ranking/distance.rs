//! Great-circle distance between two coordinate pairs

use crate::models::Coordinates;

/// Metres to statute miles
pub const METERS_TO_MILES: f64 = 0.000_621_371;

const METERS_PER_KILOMETER: f64 = 1000.0;

/// Haversine distance in miles on a sphere of radius 6,371,000 m.
///
/// Inputs are in degrees. Identical points yield 0.
#[must_use]
pub fn distance_miles(from: Coordinates, to: Coordinates) -> f64 {
    let kilometers = haversine::distance(from.into(), to.into(), haversine::Units::Kilometers);
    kilometers * METERS_PER_KILOMETER * METERS_TO_MILES
}
