//! Data models for the FuelRank application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates
//! - Fuel: Fuel grade and sort mode selections
//! - Station: Raw station price records from the price table
//! - Vehicle: Tank size and fuel economy profile

pub mod fuel;
pub mod location;
pub mod station;
pub mod vehicle;

// Re-export all public types for convenient access
pub use fuel::{FuelType, SortMode};
pub use location::Coordinates;
pub use station::StationRecord;
pub use vehicle::VehicleProfile;
