use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::TransformError;
use crate::transform::wind::{self, WindReading};

/// Placeholder shown for optional fields the payload did not include.
pub const MISSING: &str = "-";

/// Wind slot group of the display view. `reading` is present exactly when
/// the payload carried a bearing.
#[derive(Debug, Clone, PartialEq)]
pub struct WindView {
    pub degrees: Option<f64>,
    pub reading: Option<WindReading>,
    pub speed: String,
    pub gust: String,
}

/// Display-ready weather record, one field per named output slot group.
///
/// Built from a payload that already went through
/// [`transform_response`](crate::transform::transform_response), so the
/// temperature, time, pressure and humidity fields are display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub observed_at: String,
    /// "Clear, clear sky" style summary from the first weather entry.
    pub condition: String,
    pub icon_url: Option<String>,
    /// Every field of the transformed `main` record, stringified. The
    /// renderer owns the slot list and defaults absent slots to "-".
    pub details: BTreeMap<String, String>,
    pub visibility: String,
    pub sunrise: String,
    pub sunset: String,
    pub wind: WindView,
}

impl WeatherView {
    /// Build the display view from a transformed payload.
    ///
    /// `name`, `dt`, `main` and the first `weather` entry are required;
    /// everything else degrades to the "-" placeholder.
    pub fn from_payload(payload: &Value) -> Result<Self, TransformError> {
        let city = required_str(payload, "name")?.to_string();
        let observed_at = required_str(payload, "dt")?.to_string();

        let main = payload
            .get("main")
            .and_then(Value::as_object)
            .ok_or(TransformError::MissingField("main"))?;

        let entry = payload
            .get("weather")
            .and_then(Value::as_array)
            .and_then(|list| list.first())
            .ok_or(TransformError::MissingField("weather"))?;
        let summary = entry
            .get("main")
            .and_then(Value::as_str)
            .ok_or(TransformError::MissingField("weather.main"))?;
        let description = entry
            .get("description")
            .and_then(Value::as_str)
            .ok_or(TransformError::MissingField("weather.description"))?;

        let icon_url = entry
            .get("icon")
            .and_then(Value::as_str)
            .map(|code| format!("https://openweathermap.org/img/wn/{code}@2x.png"));

        let details = main
            .iter()
            .map(|(key, val)| (key.clone(), display_value(val)))
            .collect();

        let visibility = payload
            .get("visibility")
            .and_then(Value::as_f64)
            .map_or_else(|| MISSING.to_string(), |meters| format!("{} km", meters / 1000.0));

        let sys = payload.get("sys");
        let wind_rec = payload.get("wind");
        let degrees = wind_rec.and_then(|w| w.get("deg")).and_then(Value::as_f64);

        Ok(Self {
            city,
            observed_at,
            condition: format!("{summary}, {description}"),
            icon_url,
            details,
            visibility,
            sunrise: optional_str(sys, "sunrise"),
            sunset: optional_str(sys, "sunset"),
            wind: WindView {
                degrees,
                reading: degrees.map(wind::resolve),
                speed: speed_field(wind_rec, "speed"),
                gust: speed_field(wind_rec, "gust"),
            },
        })
    }
}

fn required_str<'a>(payload: &'a Value, field: &'static str) -> Result<&'a str, TransformError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .ok_or(TransformError::MissingField(field))
}

fn optional_str(record: Option<&Value>, field: &str) -> String {
    record
        .and_then(|r| r.get(field))
        .and_then(Value::as_str)
        .map_or_else(|| MISSING.to_string(), str::to_string)
}

fn speed_field(record: Option<&Value>, field: &str) -> String {
    record
        .and_then(|r| r.get(field))
        .and_then(Value::as_f64)
        .map_or_else(|| MISSING.to_string(), |v| format!("{v} m/s"))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
