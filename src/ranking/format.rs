//! Display helpers shared by the CLI table and the JSON API

use serde::Serialize;

use super::annotate::AnnotatedRecord;
use super::rank::sort_key;
use crate::models::{FuelType, SortMode, StationRecord};

/// Shown wherever a metric is absent
pub const NOT_AVAILABLE: &str = "N/A";

#[must_use]
pub fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| NOT_AVAILABLE.to_string(), |p| format!("${p:.2}"))
}

#[must_use]
pub fn format_cost(cost: Option<f64>) -> String {
    format_price(cost)
}

#[must_use]
pub fn format_distance(miles: Option<f64>) -> String {
    miles.map_or_else(|| NOT_AVAILABLE.to_string(), |m| format!("{m:.1} mi"))
}

/// "address, city", or just the city when the station has no address
#[must_use]
pub fn location_line(record: &StationRecord) -> String {
    match record.address.as_deref() {
        Some(address) if !record.city.is_empty() => format!("{address}, {}", record.city),
        Some(address) => address.to_string(),
        None => record.city.clone(),
    }
}

/// The formatted metric the active mode ranks on
#[must_use]
pub fn sort_key_label(annotated: &AnnotatedRecord, fuel_type: FuelType, sort_mode: SortMode) -> String {
    let key = sort_key(annotated, fuel_type, sort_mode);
    match sort_mode {
        SortMode::Closest => format_distance(key),
        SortMode::Best => format_cost(key),
        SortMode::Cheapest | SortMode::MostExpensive => format_price(key),
    }
}

/// Pre-rendered strings for one ranked station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationLabels {
    pub location: String,
    pub price: String,
    pub distance: String,
    pub fill_cost: String,
    pub drive_cost: String,
    pub total_cost: String,
    pub sort_key: String,
}

impl StationLabels {
    #[must_use]
    pub fn new(annotated: &AnnotatedRecord, fuel_type: FuelType, sort_mode: SortMode) -> Self {
        Self {
            location: location_line(&annotated.record),
            price: format_price(annotated.price(fuel_type)),
            distance: format_distance(annotated.distance_miles),
            fill_cost: format_cost(annotated.fill_cost),
            drive_cost: format_cost(annotated.drive_cost),
            total_cost: format_cost(annotated.total_cost),
            sort_key: sort_key_label(annotated, fuel_type, sort_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::annotate;
    use crate::models::{Coordinates, VehicleProfile};

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(4.5)), "$4.50");
        assert_eq!(format_price(Some(3.999)), "$4.00");
        assert_eq!(format_price(None), "N/A");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(Some(6.583)), "6.6 mi");
        assert_eq!(format_distance(Some(0.0)), "0.0 mi");
        assert_eq!(format_distance(None), "N/A");
    }

    #[test]
    fn test_location_line() {
        let with_address = StationRecord::new(1, "Fullerton", "76").with_address("100 Harbor Blvd");
        assert_eq!(location_line(&with_address), "100 Harbor Blvd, Fullerton");

        let city_only = StationRecord::new(2, "Fullerton", "76");
        assert_eq!(location_line(&city_only), "Fullerton");
    }

    #[test]
    fn test_labels_follow_sort_mode() {
        let record = StationRecord::new(1, "Cerritos", "Mobil")
            .with_coordinates(34.0, -118.0)
            .with_price(FuelType::Premium, 5.25);
        let profile = VehicleProfile::new(10.0, 25.0).unwrap();
        let annotated = annotate(
            &record,
            Some(Coordinates::new(33.9053, -117.9874)),
            FuelType::Premium,
            Some(&profile),
        );

        let cheapest = StationLabels::new(&annotated, FuelType::Premium, SortMode::Cheapest);
        assert_eq!(cheapest.sort_key, "$5.25");
        assert_eq!(cheapest.fill_cost, "$52.50");

        let closest = StationLabels::new(&annotated, FuelType::Premium, SortMode::Closest);
        assert_eq!(closest.sort_key, "6.6 mi");

        let best = StationLabels::new(&annotated, FuelType::Premium, SortMode::Best);
        assert_eq!(best.sort_key, best.total_cost);
    }

    #[test]
    fn test_labels_for_missing_metrics() {
        let record = StationRecord::new(7, "Brea", "Unknown");
        let annotated = annotate(&record, None, FuelType::Regular, None);
        let labels = StationLabels::new(&annotated, FuelType::Regular, SortMode::Best);
        assert_eq!(labels.price, "N/A");
        assert_eq!(labels.distance, "N/A");
        assert_eq!(labels.total_cost, "N/A");
        assert_eq!(labels.location, "Brea");
    }
}
