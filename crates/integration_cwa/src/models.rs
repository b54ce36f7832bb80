//! CWA forecast data models
//!
//! Upstream schema for the F-C0032-001 dataset
//! (`records.location[].weatherElement[].time[].parameter`) and the
//! flattened report types the relay returns to its own clients.

use serde::{Deserialize, Serialize};

/// Weather element tags recognized in the 36-hour forecast dataset
///
/// The dataset carries one array per element; any tag outside this set is
/// silently ignored when assembling a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Wx - weather description text
    Weather,
    /// PoP - probability of precipitation (percentage)
    RainProbability,
    /// MinT - minimum temperature
    MinTemperature,
    /// MaxT - maximum temperature
    MaxTemperature,
    /// CI - comfort index description
    ComfortIndex,
    /// WS - wind speed level text
    WindSpeed,
}

impl ElementKind {
    /// Map an upstream `elementName` tag to its kind
    ///
    /// Returns `None` for unrecognized tags so callers skip them instead
    /// of failing.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Wx" => Some(Self::Weather),
            "PoP" => Some(Self::RainProbability),
            "MinT" => Some(Self::MinTemperature),
            "MaxT" => Some(Self::MaxTemperature),
            "CI" => Some(Self::ComfortIndex),
            "WS" => Some(Self::WindSpeed),
            _ => None,
        }
    }
}

/// Top-level F-C0032-001 response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct CwaResponse {
    pub records: Records,
}

/// Forecast records for one query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Records {
    /// Static dataset description, e.g. "三十六小時天氣預報"
    #[serde(default)]
    pub dataset_description: String,

    /// Matched locations; empty when the queried name is unknown upstream
    #[serde(default)]
    pub location: Vec<Location>,
}

/// Forecast data for a single county/city
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_name: String,

    #[serde(default)]
    pub weather_element: Vec<WeatherElement>,
}

/// One weather element (Wx, PoP, ...) with its time-indexed values
///
/// All elements of one location share the same time-slice count and order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherElement {
    pub element_name: String,

    #[serde(default)]
    pub time: Vec<TimeSlot>,
}

/// One forecast period of one element
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(default)]
    pub start_time: String,

    #[serde(default)]
    pub end_time: String,

    #[serde(default)]
    pub parameter: Parameter,
}

/// Labeled value of one element in one period
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(default)]
    pub parameter_name: String,
}

/// One flattened forecast window in a relay response
///
/// All six attributes default to the empty string when the upstream omits
/// the corresponding element. Serialized in camelCase to match the wire
/// shape the relay's clients expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastWindow {
    pub start_time: String,
    pub end_time: String,
    pub weather: String,
    pub rain: String,
    pub min_temp: String,
    pub max_temp: String,
    pub comfort: String,
    pub wind_speed: String,
}

/// Flattened forecast for one location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city: String,
    pub update_time: String,
    /// Chronological, one entry per upstream time slice (typically 2-3)
    pub forecasts: Vec<ForecastWindow>,
}
