//! The response-transformation pipeline.
//!
//! Raw service payloads arrive as nested JSON. The pipeline renames a fixed
//! set of keys, converts temperatures and timestamps into display strings,
//! and suffixes pressure and humidity with their units. Every pass is pure
//! and returns a new tree; nothing here touches presentation state.

pub mod keys;
pub mod units;
pub mod wind;

use chrono::FixedOffset;
use serde_json::Value;

/// Run the full pipeline over a raw payload: key normalization, temperature
/// and time conversion, then unit suffixes for `main.pressure` ("<n>hPa")
/// and `main.humidity` ("<n>%").
pub fn transform_response(raw: &Value, tz: FixedOffset) -> Value {
    let value = keys::normalize_keys(raw);
    let value = units::convert_temperatures(&value);
    let mut value = units::convert_times(&value, tz);

    if let Some(main) = value.get_mut("main").and_then(Value::as_object_mut) {
        if let Some(Value::Number(n)) = main.get("pressure").cloned() {
            main.insert("pressure".to_string(), Value::String(format!("{n}hPa")));
        }
        if let Some(Value::Number(n)) = main.get("humidity").cloned() {
            main.insert("humidity".to_string(), Value::String(format!("{n}%")));
        }
    }

    value
}
