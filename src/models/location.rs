//! Geographic coordinate model

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
///
/// Used both for the user's position and for a station's position.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both parts are finite numbers
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Build coordinates from two optional parts.
    ///
    /// Returns `None` unless both parts are present and finite; a half-known
    /// position counts as unknown.
    #[must_use]
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Self::new(lat, lon)).filter(Self::is_finite),
            _ => None,
        }
    }

    /// Format as a "lat, lon" string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl From<Coordinates> for haversine::Location {
    fn from(value: Coordinates) -> Self {
        haversine::Location {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}
