//! Ranking engine
//!
//! Pure, synchronous functions turning raw station records into an ordered,
//! annotated view:
//! - Distance: haversine miles between two coordinate pairs
//! - Annotate: per-station distance, fill, drive and total cost
//! - Rank: partition by sort-key presence, then stable sort
//! - Format: display strings for prices, distances and costs

pub mod annotate;
pub mod distance;
pub mod format;
pub mod rank;

pub use annotate::{AnnotatedRecord, annotate};
pub use distance::distance_miles;
pub use format::{StationLabels, format_cost, format_distance, format_price, location_line};
pub use rank::{RankOptions, rank, rank_with, sort_key};
