use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{StationProvider, prepare_records};
use crate::models::StationRecord;
use crate::{FuelRankError, Result};

/// Station rows exported to a JSON file (an array of table rows)
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StationProvider for JsonFileSource {
    async fn fetch_stations(&self) -> Result<Vec<StationRecord>> {
        debug!("Loading station rows from {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path).await?;

        let rows: Vec<StationRecord> = serde_json::from_str(&contents).map_err(|e| {
            FuelRankError::parse(format!("{}: {e}", self.path.display()))
        })?;

        info!("Loaded {} station rows from {}", rows.len(), self.path.display());
        Ok(prepare_records(rows))
    }
}

/// Fixed rows held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    rows: Vec<StationRecord>,
}

impl StaticSource {
    #[must_use]
    pub fn new(rows: Vec<StationRecord>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl StationProvider for StaticSource {
    async fn fetch_stations(&self) -> Result<Vec<StationRecord>> {
        Ok(prepare_records(self.rows.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_rows(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_json_file_drops_error_rows_and_duplicates() {
        let file = write_rows(
            r#"[
                {"id": 1, "city": "Norwalk", "station_name": "Arco", "address": "1 Main St", "regular": 4.09},
                {"id": 2, "city": "Norwalk", "station_name": "ARCO", "address": "1 main st", "regular": 4.19},
                {"id": 3, "city": "Downey", "station_name": null, "scrape_error": "blocked"}
            ]"#,
        );

        let rows = JsonFileSource::new(file.path()).fetch_stations().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].regular, Some(4.09));
    }

    #[tokio::test]
    async fn test_json_file_parse_error() {
        let file = write_rows(r#"{"id": 1}"#);
        let err = JsonFileSource::new(file.path()).fetch_stations().await.unwrap_err();
        assert!(matches!(err, FuelRankError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = JsonFileSource::new("/nonexistent/stations.json")
            .fetch_stations()
            .await
            .unwrap_err();
        assert!(matches!(err, FuelRankError::Io { .. }));
    }

    #[tokio::test]
    async fn test_static_source_prepares_rows() {
        let mut broken = StationRecord::new(2, "Whittier", "");
        broken.scrape_error = Some("timeout".to_string());
        let source = StaticSource::new(vec![StationRecord::new(1, "Whittier", "Shell"), broken]);

        let rows = source.fetch_stations().await.unwrap();
        assert_eq!(rows.len(), 1);
    }
}
