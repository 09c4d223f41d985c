//! Station source module
//!
//! Providers that load raw station rows, plus the cleanup applied to fetched
//! rows before they reach the ranking engine:
//! - Supabase: hosted price table over its REST interface
//! - File: a JSON array of rows on disk
//! - Static: rows already in memory

pub mod file;
pub mod supabase;

use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::Result;
use crate::models::StationRecord;

pub use file::{JsonFileSource, StaticSource};
pub use supabase::SupabaseSource;

/// Anything that can hand back the current set of station rows
#[async_trait]
pub trait StationProvider: Send + Sync {
    /// Fetch every station row, already cleaned by [`prepare_records`]
    async fn fetch_stations(&self) -> Result<Vec<StationRecord>>;
}

/// Drop scrape-error marker rows and duplicate stations.
pub fn prepare_records(rows: Vec<StationRecord>) -> Vec<StationRecord> {
    let total = rows.len();
    let stations: Vec<StationRecord> = rows
        .into_iter()
        .filter(|row| match &row.scrape_error {
            Some(error) => {
                warn!(city = %row.city, "Skipping scrape error row: {}", error);
                false
            }
            None => true,
        })
        .collect();

    let deduped = dedupe_by_station_and_address(stations);
    debug!("Prepared {} of {} fetched rows", deduped.len(), total);
    deduped
}

/// Keep the first row per (station name, address), compared case-insensitively.
///
/// Rows missing either a name or an address cannot be matched and are kept.
pub fn dedupe_by_station_and_address(rows: Vec<StationRecord>) -> Vec<StationRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();

    rows.into_iter()
        .filter(|row| {
            let name = row.station_name.trim();
            let address = row.address.as_deref().map(str::trim).unwrap_or_default();
            if name.is_empty() || address.is_empty() {
                return true;
            }
            seen.insert((name.to_lowercase(), address.to_lowercase()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, address: Option<&str>) -> StationRecord {
        let record = StationRecord::new(id, "La Mirada", name);
        match address {
            Some(address) => record.with_address(address),
            None => record,
        }
    }

    fn ids(rows: &[StationRecord]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_dedupe_is_case_insensitive_and_keeps_first() {
        let rows = vec![
            row(1, "Costco", Some("14902 Firestone Blvd")),
            row(2, "COSTCO ", Some("14902 firestone blvd")),
            row(3, "Costco", Some("2655 Beach Blvd")),
        ];
        assert_eq!(ids(&dedupe_by_station_and_address(rows)), vec![1, 3]);
    }

    #[test]
    fn test_dedupe_keeps_rows_missing_name_or_address() {
        let rows = vec![
            row(1, "Arco", None),
            row(2, "Arco", None),
            row(3, "", Some("100 Main St")),
            row(4, "", Some("100 Main St")),
        ];
        assert_eq!(ids(&dedupe_by_station_and_address(rows)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_prepare_drops_scrape_errors() {
        let mut error_row = row(2, "ERROR", None);
        error_row.scrape_error = Some("timeout waiting for station list".to_string());

        let rows = vec![
            row(1, "Shell", Some("1 Imperial Hwy")),
            error_row,
            row(3, "Shell", Some("1 imperial hwy")),
            row(4, "Mobil", Some("9 Valley View Ave")),
        ];
        assert_eq!(ids(&prepare_records(rows)), vec![1, 4]);
    }
}
