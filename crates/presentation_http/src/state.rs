//! Application state shared across handlers

use std::sync::Arc;

use integration_cwa::ForecastClient;

use crate::config::AppConfig;

/// Shared application state
///
/// Everything is request-scoped downstream of this; the state itself is
/// just cheaply cloned handles.
#[derive(Clone)]
pub struct AppState {
    /// Upstream forecast client
    pub forecast_client: Arc<dyn ForecastClient>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("forecast_client", &"<ForecastClient>")
            .field("config", &self.config)
            .finish()
    }
}
