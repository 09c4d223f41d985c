//! `FuelRank` - find the cheapest, closest or best-value gas nearby
//!
//! This library provides the station ranking engine together with the
//! station sources, configuration and HTTP API built around it.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod ranking;
pub mod source;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use config::FuelRankConfig;
pub use error::{FuelRankError, ValidationError};
pub use models::{Coordinates, FuelType, SortMode, StationRecord, VehicleProfile};
pub use ranking::{AnnotatedRecord, RankOptions, annotate, distance_miles, rank, rank_with};
pub use source::{JsonFileSource, StaticSource, StationProvider, SupabaseSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, FuelRankError>;
