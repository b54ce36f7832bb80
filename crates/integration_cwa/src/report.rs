//! Forecast report assembly
//!
//! Flattens the element-oriented upstream arrays into one `ForecastWindow`
//! per time slice. The two relay routes format a few fields differently;
//! those differences are intentional and carried as an explicit
//! `MappingPolicy` instead of duplicated mapping code.

use crate::models::{ElementKind, ForecastWindow, Location, WeatherReport};

/// Formatting differences between the two relay routes
#[derive(Debug, Clone, Copy)]
pub struct MappingPolicy {
    /// Substituted for an empty rain probability before the percent sign
    pub empty_rain_default: &'static str,
    /// Appended to min/max temperature values
    pub temp_suffix: &'static str,
}

/// Policy of the fixed-location route: empty rain stays empty (yielding a
/// bare "%"), temperatures carry the full "°C" suffix.
pub const FIXED_ROUTE_POLICY: MappingPolicy = MappingPolicy {
    empty_rain_default: "",
    temp_suffix: "°C",
};

/// Policy of the path-parameterized route: empty rain becomes "0%",
/// temperatures carry a bare "°" suffix.
pub const DYNAMIC_ROUTE_POLICY: MappingPolicy = MappingPolicy {
    empty_rain_default: "0",
    temp_suffix: "°",
};

/// Replace the informal 台 with the formal 臺 throughout a location name
///
/// The upstream API only matches full county/city names spelled with the
/// formal variant, while users commonly type the colloquial one.
#[must_use]
pub fn normalize_location(name: &str) -> String {
    name.replace('台', "臺")
}

/// Build a flattened report from one upstream location
///
/// The window count follows the first element's time array; every element
/// is read at the same index. Elements with unrecognized tags are skipped,
/// and an element whose time array is shorter than the first one leaves
/// its field at the default empty string.
#[must_use]
pub fn build_report(
    location: &Location,
    update_time: String,
    policy: &MappingPolicy,
) -> WeatherReport {
    let elements = &location.weather_element;
    let slot_count = elements.first().map_or(0, |element| element.time.len());

    let mut forecasts = Vec::with_capacity(slot_count);
    for index in 0..slot_count {
        let mut window = ForecastWindow::default();

        if let Some(slot) = elements.first().and_then(|element| element.time.get(index)) {
            window.start_time = slot.start_time.clone();
            window.end_time = slot.end_time.clone();
        }

        for element in elements {
            let Some(kind) = ElementKind::from_tag(&element.element_name) else {
                continue;
            };
            let Some(slot) = element.time.get(index) else {
                continue;
            };
            let value = slot.parameter.parameter_name.as_str();

            match kind {
                ElementKind::Weather => window.weather = value.to_string(),
                ElementKind::RainProbability => {
                    let value = if value.is_empty() {
                        policy.empty_rain_default
                    } else {
                        value
                    };
                    window.rain = format!("{value}%");
                },
                ElementKind::MinTemperature => {
                    window.min_temp = format!("{value}{}", policy.temp_suffix);
                },
                ElementKind::MaxTemperature => {
                    window.max_temp = format!("{value}{}", policy.temp_suffix);
                },
                ElementKind::ComfortIndex => window.comfort = value.to_string(),
                ElementKind::WindSpeed => window.wind_speed = value.to_string(),
            }
        }

        forecasts.push(window);
    }

    WeatherReport {
        city: location.location_name.clone(),
        update_time,
        forecasts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    /// Sample location with all six element tags over `slots` time slices
    fn sample_location(slots: usize) -> Location {
        const WINDOWS: [(&str, &str); 3] = [
            ("2026-08-23 12:00:00", "2026-08-23 18:00:00"),
            ("2026-08-23 18:00:00", "2026-08-24 06:00:00"),
            ("2026-08-24 06:00:00", "2026-08-24 18:00:00"),
        ];

        let time = |values: &[&str]| {
            serde_json::json!(
                values
                    .iter()
                    .take(slots)
                    .zip(WINDOWS)
                    .map(|(v, (start, end))| {
                        serde_json::json!({
                            "startTime": start,
                            "endTime": end,
                            "parameter": { "parameterName": v }
                        })
                    })
                    .collect::<Vec<_>>()
            )
        };

        serde_json::from_value(serde_json::json!({
            "locationName": "臺北市",
            "weatherElement": [
                { "elementName": "Wx", "time": time(&["多雲", "陰", "短暫陣雨"]) },
                { "elementName": "PoP", "time": time(&["10", "30", "60"]) },
                { "elementName": "MinT", "time": time(&["26", "25", "24"]) },
                { "elementName": "MaxT", "time": time(&["33", "31", "29"]) },
                { "elementName": "CI", "time": time(&["悶熱", "舒適", "舒適"]) },
                { "elementName": "WS", "time": time(&["微風", "微風", "強風"]) }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn report_has_one_window_per_time_slice() {
        let location = sample_location(3);
        let report = build_report(&location, "desc".to_string(), &FIXED_ROUTE_POLICY);

        assert_eq!(report.city, "臺北市");
        assert_eq!(report.update_time, "desc");
        assert_eq!(report.forecasts.len(), 3);

        for window in &report.forecasts {
            assert!(!window.weather.is_empty());
            assert!(!window.rain.is_empty());
            assert!(!window.min_temp.is_empty());
            assert!(!window.max_temp.is_empty());
            assert!(!window.comfort.is_empty());
            assert!(!window.wind_speed.is_empty());
        }
    }

    #[test]
    fn windows_read_matching_time_index_from_every_element() {
        let location = sample_location(3);
        let report = build_report(&location, String::new(), &FIXED_ROUTE_POLICY);

        assert_eq!(report.forecasts[0].weather, "多雲");
        assert_eq!(report.forecasts[0].rain, "10%");
        assert_eq!(report.forecasts[2].weather, "短暫陣雨");
        assert_eq!(report.forecasts[2].rain, "60%");
        assert_eq!(report.forecasts[2].min_temp, "24°C");
        assert_eq!(report.forecasts[2].wind_speed, "強風");
    }

    #[test]
    fn fixed_policy_formats_units() {
        let location = sample_location(1);
        let report = build_report(&location, String::new(), &FIXED_ROUTE_POLICY);

        assert_eq!(report.forecasts[0].rain, "10%");
        assert_eq!(report.forecasts[0].min_temp, "26°C");
        assert_eq!(report.forecasts[0].max_temp, "33°C");
        // Text fields pass through verbatim
        assert_eq!(report.forecasts[0].weather, "多雲");
        assert_eq!(report.forecasts[0].comfort, "悶熱");
        assert_eq!(report.forecasts[0].wind_speed, "微風");
    }

    #[test]
    fn dynamic_policy_uses_bare_degree_suffix() {
        let location = sample_location(1);
        let report = build_report(&location, String::new(), &DYNAMIC_ROUTE_POLICY);

        assert_eq!(report.forecasts[0].min_temp, "26°");
        assert_eq!(report.forecasts[0].max_temp, "33°");
    }

    #[test]
    fn empty_rain_value_keeps_route_asymmetry() {
        let mut location = sample_location(1);
        let pop = location
            .weather_element
            .iter_mut()
            .find(|element| element.element_name == "PoP")
            .unwrap();
        pop.time[0].parameter.parameter_name = String::new();

        // Fixed route appends "%" to the empty value as-is
        let fixed = build_report(&location, String::new(), &FIXED_ROUTE_POLICY);
        assert_eq!(fixed.forecasts[0].rain, "%");

        // Dynamic route substitutes a zero first
        let dynamic = build_report(&location, String::new(), &DYNAMIC_ROUTE_POLICY);
        assert_eq!(dynamic.forecasts[0].rain, "0%");
    }

    #[test]
    fn unrecognized_element_tags_are_ignored() {
        let mut location = sample_location(2);
        location.weather_element.push(
            serde_json::from_value(serde_json::json!({
                "elementName": "UVI",
                "time": [
                    {
                        "startTime": "2026-08-23 12:00:00",
                        "endTime": "2026-08-23 18:00:00",
                        "parameter": { "parameterName": "11" }
                    }
                ]
            }))
            .unwrap(),
        );

        let report = build_report(&location, String::new(), &FIXED_ROUTE_POLICY);
        assert_eq!(report.forecasts.len(), 2);
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("11"));
        assert!(!json.contains("UVI"));
    }

    #[test]
    fn short_element_array_leaves_field_default() {
        let mut location = sample_location(3);
        let ws = location
            .weather_element
            .iter_mut()
            .find(|element| element.element_name == "WS")
            .unwrap();
        ws.time.truncate(1);

        let report = build_report(&location, String::new(), &FIXED_ROUTE_POLICY);
        assert_eq!(report.forecasts.len(), 3);
        assert_eq!(report.forecasts[0].wind_speed, "微風");
        assert!(report.forecasts[1].wind_speed.is_empty());
        assert!(report.forecasts[2].wind_speed.is_empty());
    }

    #[test]
    fn location_without_elements_yields_empty_forecasts() {
        let location: Location =
            serde_json::from_value(serde_json::json!({ "locationName": "臺北市" })).unwrap();
        let report = build_report(&location, "now".to_string(), &DYNAMIC_ROUTE_POLICY);

        assert_eq!(report.city, "臺北市");
        assert_eq!(report.update_time, "now");
        assert!(report.forecasts.is_empty());
    }

    #[test]
    fn normalize_rewrites_informal_variant() {
        assert_eq!(normalize_location("台北市"), "臺北市");
        assert_eq!(normalize_location("台南市"), "臺南市");
        // Every occurrence is replaced
        assert_eq!(normalize_location("台台"), "臺臺");
    }

    #[test]
    fn normalize_keeps_formal_variant_unchanged() {
        assert_eq!(normalize_location("臺北市"), "臺北市");
        assert_eq!(normalize_location("桃園市"), "桃園市");
        assert_eq!(normalize_location(""), "");
    }
}
