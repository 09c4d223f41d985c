//! Station price records as stored in the remote price table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{Coordinates, FuelType};

/// One station's price and location data for a given fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub station_name: String,
    /// Street address; `None` means display the city only
    #[serde(default, deserialize_with = "blank_as_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub regular: Option<f64>,
    #[serde(default)]
    pub midgrade: Option<f64>,
    #[serde(default)]
    pub premium: Option<f64>,
    #[serde(default)]
    pub diesel: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_url: Option<String>,
    /// When the scrape that produced this row ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub regular_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub midgrade_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub premium_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub diesel_updated: Option<String>,
    /// Set on city-level marker rows written when a scrape failed
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub scrape_error: Option<String>,
}

impl StationRecord {
    /// Create a record with no address, coordinates or prices
    #[must_use]
    pub fn new(id: i64, city: impl Into<String>, station_name: impl Into<String>) -> Self {
        Self {
            id,
            city: city.into(),
            station_name: station_name.into(),
            address: None,
            latitude: None,
            longitude: None,
            regular: None,
            midgrade: None,
            premium: None,
            diesel: None,
            station_url: None,
            run_timestamp: None,
            regular_updated: None,
            midgrade_updated: None,
            premium_updated: None,
            diesel_updated: None,
            scrape_error: None,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn with_price(mut self, fuel_type: FuelType, price: f64) -> Self {
        match fuel_type {
            FuelType::Regular => self.regular = Some(price),
            FuelType::Midgrade => self.midgrade = Some(price),
            FuelType::Premium => self.premium = Some(price),
            FuelType::Diesel => self.diesel = Some(price),
        }
        self
    }

    /// Station position, or `None` unless both latitude and longitude are known
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    /// Price for the given grade, `None` when unknown at this station
    #[must_use]
    pub fn price_for(&self, fuel_type: FuelType) -> Option<f64> {
        match fuel_type {
            FuelType::Regular => self.regular,
            FuelType::Midgrade => self.midgrade,
            FuelType::Premium => self.premium,
            FuelType::Diesel => self.diesel,
        }
    }

    /// "Updated ..." note scraped alongside the given grade's price
    #[must_use]
    pub fn updated_for(&self, fuel_type: FuelType) -> Option<&str> {
        match fuel_type {
            FuelType::Regular => self.regular_updated.as_deref(),
            FuelType::Midgrade => self.midgrade_updated.as_deref(),
            FuelType::Premium => self.premium_updated.as_deref(),
            FuelType::Diesel => self.diesel_updated.as_deref(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_table_row() {
        let json = r#"{
            "id": 17,
            "run_timestamp": "2025-01-04T18:22:05.123456+00:00",
            "run_label": "2025-01-04_18-22-05",
            "city": "La Mirada",
            "station_id": "12345",
            "station_name": "Costco",
            "station_url": "https://www.gasbuddy.com/station/12345",
            "address": "14902 Firestone Blvd",
            "latitude": 33.9053,
            "longitude": -117.9874,
            "regular": 4.29,
            "midgrade": null,
            "premium": 4.69,
            "diesel": null,
            "scrape_error": null
        }"#;

        let record: StationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 17);
        assert_eq!(record.station_name, "Costco");
        assert_eq!(record.address.as_deref(), Some("14902 Firestone Blvd"));
        assert_eq!(record.price_for(FuelType::Regular), Some(4.29));
        assert_eq!(record.price_for(FuelType::Midgrade), None);
        assert_eq!(record.price_for(FuelType::Premium), Some(4.69));
        assert!(record.run_timestamp.is_some());
        assert!(record.scrape_error.is_none());
        assert_eq!(
            record.coordinates(),
            Some(Coordinates::new(33.9053, -117.9874))
        );
    }

    #[test]
    fn test_blank_address_is_absent() {
        let json = r#"{"id": 1, "city": "Brea", "station_name": "Arco", "address": "   "}"#;
        let record: StationRecord = serde_json::from_str(json).unwrap();
        assert!(record.address.is_none());
    }

    #[test]
    fn test_half_known_coordinates_are_absent() {
        let json = r#"{"id": 2, "city": "Brea", "station_name": "Arco", "latitude": 33.9}"#;
        let record: StationRecord = serde_json::from_str(json).unwrap();
        assert!(record.coordinates().is_none());
    }

    #[test]
    fn test_all_null_record_is_valid() {
        let json = r#"{
            "id": 3, "city": null, "station_name": null, "address": null,
            "latitude": null, "longitude": null,
            "regular": null, "midgrade": null, "premium": null, "diesel": null
        }"#;
        let record: StationRecord = serde_json::from_str(json).unwrap();
        assert!(record.city.is_empty());
        assert!(record.address.is_none());
        for fuel in FuelType::ALL {
            assert!(record.price_for(fuel).is_none());
        }
        assert!(record.coordinates().is_none());
    }

    #[test]
    fn test_builder_sets_prices() {
        let record = StationRecord::new(9, "Whittier", "Shell")
            .with_price(FuelType::Diesel, 5.19)
            .with_price(FuelType::Regular, 4.59);
        assert_eq!(record.price_for(FuelType::Diesel), Some(5.19));
        assert_eq!(record.price_for(FuelType::Regular), Some(4.59));
        assert_eq!(record.price_for(FuelType::Premium), None);
    }
}
