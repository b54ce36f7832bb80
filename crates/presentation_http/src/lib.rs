//! CWA weather relay HTTP presentation layer
//!
//! Routes location-based forecast queries to the CWA open-data API and
//! reshapes the response into a flat report per time slice.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
