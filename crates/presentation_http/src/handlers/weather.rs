//! Forecast relay handlers
//!
//! Both handlers share the upstream call and report assembly; they differ
//! in where the location comes from, where `updateTime` comes from, and
//! the `MappingPolicy` they format fields with. Those divergences are
//! intentional and must not be unified.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use integration_cwa::{
    DYNAMIC_ROUTE_POLICY, FIXED_ROUTE_POLICY, WeatherReport, build_report, normalize_location,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Success envelope for forecast responses
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub success: bool,
    pub data: WeatherReport,
}

/// Forecast for the fixed location
///
/// GET /weather/kaohsiung
///
/// Ignores all request input and queries the configured fixed location.
/// `updateTime` is the upstream dataset description, a static string.
#[instrument(skip(state))]
pub async fn kaohsiung_forecast(
    State(state): State<AppState>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let location_name = state.config.cwa.fixed_location.clone();

    let records = state
        .forecast_client
        .fetch_forecast(&location_name)
        .await
        .map_err(|e| {
            warn!(error = %e, "取得天氣資料失敗");
            ApiError::from(e)
        })?;

    let Some(location) = records.location.first() else {
        return Err(ApiError::NotFound("無法取得高雄市天氣資料".to_string()));
    };

    let report = build_report(
        location,
        records.dataset_description.clone(),
        &FIXED_ROUTE_POLICY,
    );
    info!(city = %report.city, slices = report.forecasts.len(), "Forecast assembled");

    Ok(Json(ForecastResponse {
        success: true,
        data: report,
    }))
}

/// Forecast for a location named in the path
///
/// GET /weather/{location_name}
///
/// The upstream only matches full county/city names, so the informal 台
/// prefix is rewritten to 臺 before querying. `updateTime` is the wall
/// clock at response time, unlike the fixed route.
#[instrument(skip(state), fields(location = %location_name))]
pub async fn forecast_by_location(
    State(state): State<AppState>,
    Path(location_name): Path<String>,
) -> Result<Json<ForecastResponse>, ApiError> {
    if location_name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "請在路徑中提供地點名稱，例如 /weather/臺北市".to_string(),
        ));
    }

    let normalized = normalize_location(&location_name);

    let records = state
        .forecast_client
        .fetch_forecast(&normalized)
        .await
        .map_err(|e| {
            warn!(error = %e, "取得天氣資料失敗");
            ApiError::from(e)
        })?;

    let Some(location) = records.location.first() else {
        return Err(ApiError::NotFound(format!(
            "無法取得 {normalized} 的天氣資料，請確認地點名稱是否正確 (需為縣市全名)"
        )));
    };

    let report = build_report(location, Utc::now().to_rfc3339(), &DYNAMIC_ROUTE_POLICY);
    info!(city = %report.city, slices = report.forecasts.len(), "Forecast assembled");

    Ok(Json(ForecastResponse {
        success: true,
        data: report,
    }))
}
