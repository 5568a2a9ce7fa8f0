use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::model::MISSING;

/// Keys whose values hold temperatures in Kelvin, after key normalization.
const TEMPERATURE_KEYS: &[&str] = &["temp", "feelsLike", "tempMax", "tempMin"];

/// Keys whose values hold Unix-second timestamps.
const UNIX_TIME_KEYS: &[&str] = &["sunrise", "sunset", "dt"];

/// The display contract subtracts 272.15, not the textbook 273.15.
const KELVIN_DISPLAY_OFFSET_CENTI: i64 = 27215;

/// Format a Kelvin reading as Celsius with 3 significant digits, e.g.
/// `300.0` becomes `"27.9 °C"`.
///
/// Rounding happens on centi-degree integers so that a decimal tie like
/// 27.85 rounds up instead of tripping over its 27.849999… binary form.
pub fn kelvin_to_celsius(kelvin: f64) -> String {
    let centi = (kelvin * 100.0).round() as i64 - KELVIN_DISPLAY_OFFSET_CENTI;
    format!("{} °C", to_precision_3(centi))
}

/// Format Unix seconds as a zero-padded 24-hour wall-clock string in the
/// given timezone. Out-of-range timestamps yield the display placeholder.
pub fn unix_to_local_time(ts: i64, tz: FixedOffset) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|utc| utc.with_timezone(&tz).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Convert every temperature-keyed number in the tree to a Celsius string.
pub fn convert_temperatures(value: &Value) -> Value {
    map_record_values(value, &|key, val| match val.as_f64() {
        Some(kelvin) if TEMPERATURE_KEYS.contains(&key) => {
            Value::String(kelvin_to_celsius(kelvin))
        }
        _ => val.clone(),
    })
}

/// Convert every time-keyed number in the tree to a wall-clock string.
pub fn convert_times(value: &Value, tz: FixedOffset) -> Value {
    map_record_values(value, &|key, val| match val.as_i64() {
        Some(ts) if UNIX_TIME_KEYS.contains(&key) => Value::String(unix_to_local_time(ts, tz)),
        _ => val.clone(),
    })
}

// Descends into record values only; arrays pass through untouched, matching
// the key-renaming pass.
fn map_record_values(value: &Value, convert: &dyn Fn(&str, &Value) -> Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| {
                    let converted = if val.is_object() {
                        map_record_values(val, convert)
                    } else {
                        convert(key, val)
                    };
                    (key.clone(), converted)
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Format `centi` hundredths as a decimal with exactly 3 significant digits,
/// rounding half away from zero.
fn to_precision_3(centi: i64) -> String {
    if centi == 0 {
        return "0.00".to_string();
    }

    let sign = if centi < 0 { "-" } else { "" };
    let mut mantissa = centi.unsigned_abs();
    let mut exp: i32 = -2;

    let digits = mantissa.ilog10() + 1;
    if digits > 3 {
        let pow = 10u64.pow(digits - 3);
        let (quot, rem) = (mantissa / pow, mantissa % pow);
        mantissa = quot + u64::from(rem * 2 >= pow);
        exp += (digits - 3) as i32;
        // a carry like 999.5 needs one more digit dropped
        if mantissa == 1000 {
            mantissa /= 10;
            exp += 1;
        }
    }
    while mantissa < 100 {
        mantissa *= 10;
        exp -= 1;
    }

    let mantissa = mantissa.to_string();
    if exp >= 0 {
        format!("{sign}{mantissa}{}", "0".repeat(exp as usize))
    } else {
        let frac = (-exp) as usize;
        if frac < 3 {
            format!("{sign}{}.{}", &mantissa[..3 - frac], &mantissa[3 - frac..])
        } else {
            format!("{sign}0.{}{}", "0".repeat(frac - 3), mantissa)
        }
    }
}
