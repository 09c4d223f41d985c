use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::{
    config::DefaultsConfig,
    models::{Coordinates, FuelType, SortMode, VehicleProfile},
    ranking::{AnnotatedRecord, StationLabels, rank},
    source::StationProvider,
};

#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn StationProvider>,
    defaults: DefaultsConfig,
}

impl AppState {
    pub fn new(provider: Arc<dyn StationProvider>, defaults: DefaultsConfig) -> Self {
        Self { provider, defaults }
    }
}

/// Query string of `GET /api/stations`.
///
/// Numeric fields stay strings so bad input gets a JSON error naming the
/// field instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct StationQuery {
    pub fuel: Option<String>,
    pub sort: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub tank: Option<String>,
    pub mpg: Option<String>,
}

#[derive(Serialize)]
pub struct ApiStation {
    #[serde(flatten)]
    pub station: AnnotatedRecord,
    pub labels: StationLabels,
}

#[derive(Serialize)]
pub struct StationsResponse {
    pub fuel_type: FuelType,
    pub sort_mode: SortMode,
    pub count: usize,
    pub stations: Vec<ApiStation>,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest {
        message: String,
        field: Option<&'static str>,
    },
    Upstream(String),
}

impl ApiError {
    fn bad_request(message: impl Into<String>, field: &'static str) -> Self {
        Self::BadRequest {
            message: message.into(),
            field: Some(field),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest { message, field } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message, "field": field })),
            )
                .into_response(),
            ApiError::Upstream(message) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(get_stations))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn get_stations(
    State(state): State<AppState>,
    Query(query): Query<StationQuery>,
) -> Result<Json<StationsResponse>, ApiError> {
    let fuel_type = match &query.fuel {
        Some(fuel) => fuel
            .parse::<FuelType>()
            .map_err(|e| ApiError::bad_request(e, "fuel"))?,
        None => state.defaults.fuel_type,
    };
    let sort_mode = match &query.sort {
        Some(sort) => sort
            .parse::<SortMode>()
            .map_err(|e| ApiError::bad_request(e, "sort"))?,
        None => state.defaults.sort_mode,
    };
    let user_location = parse_location(&query)?;
    let vehicle = parse_vehicle(&query)?;

    let records = state.provider.fetch_stations().await.map_err(|e| {
        warn!("Station fetch failed: {}", e);
        ApiError::Upstream(e.user_message())
    })?;

    let ranked = rank(
        &records,
        user_location,
        fuel_type,
        sort_mode,
        vehicle.as_ref(),
    );
    info!(
        "Ranked {} stations by {} ({})",
        ranked.len(),
        sort_mode.as_str(),
        fuel_type.as_str()
    );

    let stations: Vec<ApiStation> = ranked
        .into_iter()
        .map(|station| ApiStation {
            labels: StationLabels::new(&station, fuel_type, sort_mode),
            station,
        })
        .collect();

    Ok(Json(StationsResponse {
        fuel_type,
        sort_mode,
        count: stations.len(),
        stations,
    }))
}

fn parse_location(query: &StationQuery) -> Result<Option<Coordinates>, ApiError> {
    match (query.lat.as_deref(), query.lon.as_deref()) {
        (Some(lat), Some(lon)) => {
            let degrees = |value: &str| value.trim().parse::<f64>().ok();
            Coordinates::from_parts(degrees(lat), degrees(lon))
                .map(Some)
                .ok_or_else(|| {
                    ApiError::bad_request(
                        format!("Invalid location '{lat}, {lon}': coordinates must be finite numbers"),
                        "location",
                    )
                })
        }
        (None, None) => Ok(None),
        _ => Err(ApiError::bad_request(
            "Both lat and lon are required for a location",
            "location",
        )),
    }
}

fn parse_vehicle(query: &StationQuery) -> Result<Option<VehicleProfile>, ApiError> {
    match (query.tank.as_deref(), query.mpg.as_deref()) {
        (Some(tank), Some(mpg)) => VehicleProfile::validate(tank, mpg)
            .map(Some)
            .map_err(|e| ApiError::BadRequest {
                field: Some(e.field()),
                message: e.to_string(),
            }),
        (None, None) => Ok(None),
        (None, Some(_)) => Err(ApiError::bad_request(
            "Tank size is required with fuel economy",
            "tank_size",
        )),
        (Some(_), None) => Err(ApiError::bad_request(
            "Fuel economy is required with tank size",
            "fuel_economy",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_requires_both() {
        let query = StationQuery {
            lat: Some("33.9".into()),
            ..StationQuery::default()
        };
        assert!(matches!(
            parse_location(&query),
            Err(ApiError::BadRequest { field: Some("location"), .. })
        ));

        let query = StationQuery {
            lat: Some("33.9".into()),
            lon: Some(" -117.9".into()),
            ..StationQuery::default()
        };
        assert_eq!(
            parse_location(&query).unwrap(),
            Some(Coordinates::new(33.9, -117.9))
        );
    }

    #[test]
    fn test_parse_location_rejects_bad_numbers() {
        for (lat, lon) in [("abc", "-117.9"), ("33.9", ""), ("NaN", "-117.9"), ("33.9", "inf")] {
            let query = StationQuery {
                lat: Some(lat.into()),
                lon: Some(lon.into()),
                ..StationQuery::default()
            };
            assert!(matches!(
                parse_location(&query),
                Err(ApiError::BadRequest { field: Some("location"), .. })
            ));
        }
    }

    #[test]
    fn test_parse_vehicle_reports_field() {
        let query = StationQuery {
            tank: Some("12".into()),
            mpg: Some("0".into()),
            ..StationQuery::default()
        };
        assert!(matches!(
            parse_vehicle(&query),
            Err(ApiError::BadRequest { field: Some("fuel_economy"), .. })
        ));

        let query = StationQuery {
            tank: Some("12".into()),
            mpg: Some("30".into()),
            ..StationQuery::default()
        };
        assert_eq!(
            parse_vehicle(&query).unwrap(),
            Some(VehicleProfile::new(12.0, 30.0).unwrap())
        );
    }

    #[test]
    fn test_parse_vehicle_absent() {
        assert_eq!(parse_vehicle(&StationQuery::default()).unwrap(), None);
    }
}
