//! Partition-then-sort ranking of annotated stations

use std::cmp::Ordering;

use tracing::debug;

use super::annotate::{AnnotatedRecord, annotate};
use crate::models::{Coordinates, FuelType, SortMode, StationRecord, VehicleProfile};

/// Everything a ranking request depends on besides the records themselves
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RankOptions {
    pub user_location: Option<Coordinates>,
    pub fuel_type: FuelType,
    pub sort_mode: SortMode,
    pub vehicle: Option<VehicleProfile>,
}

/// Metric the given mode orders on, or `None` when it cannot be derived
#[must_use]
pub fn sort_key(annotated: &AnnotatedRecord, fuel_type: FuelType, sort_mode: SortMode) -> Option<f64> {
    match sort_mode {
        SortMode::Closest => annotated.distance_miles,
        SortMode::Best => annotated.total_cost,
        SortMode::Cheapest | SortMode::MostExpensive => annotated.price(fuel_type),
    }
}

/// Annotate and order `records` for display.
///
/// Records with a sort key come first, stably sorted (descending only for
/// `MostExpensive`); records without one follow in their input order. The
/// output always has one entry per input record. A mode whose inputs are
/// missing leaves every record keyless, which keeps the input order.
#[must_use]
pub fn rank(
    records: &[StationRecord],
    user_location: Option<Coordinates>,
    fuel_type: FuelType,
    sort_mode: SortMode,
    vehicle: Option<&VehicleProfile>,
) -> Vec<AnnotatedRecord> {
    let (mut keyed, unkeyed): (Vec<_>, Vec<_>) = records
        .iter()
        .map(|record| {
            let annotated = annotate(record, user_location, fuel_type, vehicle);
            let key = sort_key(&annotated, fuel_type, sort_mode);
            (key, annotated)
        })
        .partition(|(key, _)| key.is_some());

    debug!(
        fuel = fuel_type.as_str(),
        sort = sort_mode.as_str(),
        keyed = keyed.len(),
        unkeyed = unkeyed.len(),
        "Ranking stations"
    );

    // `sort_by` is stable, so equal keys keep their input order
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare_keys(*a, *b);
        if sort_mode.is_descending() {
            ordering.reverse()
        } else {
            ordering
        }
    });

    keyed
        .into_iter()
        .chain(unkeyed)
        .map(|(_, annotated)| annotated)
        .collect()
}

/// [`rank`] driven by a bundled [`RankOptions`]
#[must_use]
pub fn rank_with(records: &[StationRecord], options: &RankOptions) -> Vec<AnnotatedRecord> {
    rank(
        records,
        options.user_location,
        options.fuel_type,
        options.sort_mode,
        options.vehicle.as_ref(),
    )
}

fn compare_keys(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        _ => Ordering::Equal,
    }
}
