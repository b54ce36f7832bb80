//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// The literal kaohsiung route is registered before the dynamic capture;
/// axum also ranks the literal segment above `{location_name}`, so the
/// fixed handler keeps precedence either way.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Forecast relay
        .route(
            "/weather/kaohsiung",
            get(handlers::weather::kaohsiung_forecast),
        )
        .route(
            "/weather/{location_name}",
            get(handlers::weather::forecast_by_location),
        )
        // Attach state
        .with_state(state)
}
