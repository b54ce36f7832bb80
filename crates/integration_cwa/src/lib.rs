//! CWA open-data weather integration
//!
//! Client for the Central Weather Administration open-data platform
//! (<https://opendata.cwa.gov.tw>). Queries the 36-hour general forecast
//! dataset (F-C0032-001) and flattens the element-oriented response into
//! one forecast window per time slice.

pub mod client;
pub mod models;
pub mod report;

pub use client::{CwaClient, CwaConfig, CwaError, FORECAST_36H_DATASET, ForecastClient};
pub use models::{
    CwaResponse, ElementKind, ForecastWindow, Location, Parameter, Records, TimeSlot,
    WeatherElement, WeatherReport,
};
pub use report::{
    DYNAMIC_ROUTE_POLICY, FIXED_ROUTE_POLICY, MappingPolicy, build_report, normalize_location,
};
