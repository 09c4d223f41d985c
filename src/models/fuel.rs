//! Fuel grade and sort mode selections

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fuel grade whose price drives filtering, sorting and cost math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[default]
    Regular,
    Midgrade,
    Premium,
    Diesel,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Regular,
        FuelType::Midgrade,
        FuelType::Premium,
        FuelType::Diesel,
    ];

    /// Wire name, matching the price column in the station table
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Regular => "regular",
            FuelType::Midgrade => "midgrade",
            FuelType::Premium => "premium",
            FuelType::Diesel => "diesel",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FuelType::Regular => "Regular",
            FuelType::Midgrade => "Midgrade",
            FuelType::Premium => "Premium",
            FuelType::Diesel => "Diesel",
        };
        f.write_str(label)
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == wanted)
            .ok_or_else(|| {
                format!("Unknown fuel type '{s}'. Must be one of: regular, midgrade, premium, diesel")
            })
    }
}

/// Ordering requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Cheapest,
    MostExpensive,
    Closest,
    Best,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Cheapest,
        SortMode::MostExpensive,
        SortMode::Closest,
        SortMode::Best,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Cheapest => "cheapest",
            SortMode::MostExpensive => "most_expensive",
            SortMode::Closest => "closest",
            SortMode::Best => "best",
        }
    }

    /// Whether the keyed group is ordered largest first
    #[must_use]
    pub fn is_descending(&self) -> bool {
        matches!(self, SortMode::MostExpensive)
    }

    /// Whether this mode needs the user's position to produce any key
    #[must_use]
    pub fn needs_location(&self) -> bool {
        matches!(self, SortMode::Closest | SortMode::Best)
    }

    /// Whether this mode needs a vehicle profile to produce any key
    #[must_use]
    pub fn needs_vehicle(&self) -> bool {
        matches!(self, SortMode::Best)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortMode::Cheapest => "Cheapest",
            SortMode::MostExpensive => "Most expensive",
            SortMode::Closest => "Closest",
            SortMode::Best => "Best value",
        };
        f.write_str(label)
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown sort mode '{s}'. Must be one of: cheapest, most_expensive, closest, best"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("regular", FuelType::Regular)]
    #[case("Midgrade", FuelType::Midgrade)]
    #[case(" premium ", FuelType::Premium)]
    #[case("DIESEL", FuelType::Diesel)]
    fn test_parse_fuel_type(#[case] input: &str, #[case] expected: FuelType) {
        assert_eq!(input.parse::<FuelType>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_fuel_type() {
        let err = "e85".parse::<FuelType>().unwrap_err();
        assert!(err.contains("e85"));
    }

    #[rstest]
    #[case("cheapest", SortMode::Cheapest)]
    #[case("most_expensive", SortMode::MostExpensive)]
    #[case("most-expensive", SortMode::MostExpensive)]
    #[case("Closest", SortMode::Closest)]
    #[case("best", SortMode::Best)]
    fn test_parse_sort_mode(#[case] input: &str, #[case] expected: SortMode) {
        assert_eq!(input.parse::<SortMode>().unwrap(), expected);
    }

    #[test]
    fn test_sort_mode_serde_names() {
        let json = serde_json::to_string(&SortMode::MostExpensive).unwrap();
        assert_eq!(json, "\"most_expensive\"");
        let mode: SortMode = serde_json::from_str("\"best\"").unwrap();
        assert_eq!(mode, SortMode::Best);
    }

    #[test]
    fn test_prerequisites() {
        assert!(!SortMode::Cheapest.needs_location());
        assert!(SortMode::Closest.needs_location());
        assert!(!SortMode::Closest.needs_vehicle());
        assert!(SortMode::Best.needs_location() && SortMode::Best.needs_vehicle());
        assert!(SortMode::MostExpensive.is_descending());
        assert!(!SortMode::Cheapest.is_descending());
    }
}
