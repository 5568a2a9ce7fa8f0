use serde_json::Value;

/// Fixed rename table applied to the raw payload before any unit conversion.
const KEY_RENAMES: &[(&str, &str)] = &[
    ("feels_like", "feelsLike"),
    ("grnd_level", "grndLevel"),
    ("sea_level", "seaLevel"),
    ("temp_max", "tempMax"),
    ("temp_min", "tempMin"),
];

fn renamed(key: &str) -> &str {
    KEY_RENAMES
        .iter()
        .find(|(from, _)| *from == key)
        .map_or(key, |(_, to)| *to)
}

/// Rename mapped keys at every nesting depth, leaving every other key and the
/// overall structure intact. Returns a new tree; the input is not mutated.
///
/// Only record values are descended into. Array elements pass through as-is,
/// so records nested inside arrays (the `weather` list) keep their original
/// keys. None of those records carry renameable fields, and the display
/// layer reads them by their raw names.
pub fn normalize_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| (renamed(key).to_string(), normalize_keys(val)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renames_mapped_keys_at_every_depth() {
        let input = json!({"main": {"temp_max": 1, "sea_level": {"temp_min": 2}}});
        let expected = json!({"main": {"tempMax": 1, "seaLevel": {"tempMin": 2}}});

        assert_eq!(normalize_keys(&input), expected);
    }

    #[test]
    fn unmapped_keys_are_untouched() {
        let input = json!({"name": "Athens", "visibility": 10000, "main": {"temp": 300}});

        assert_eq!(normalize_keys(&input), input);
    }

    #[test]
    fn does_not_descend_into_arrays() {
        let input = json!({"weather": [{"temp_max": 1}], "temp_max": 2});
        let expected = json!({"weather": [{"temp_max": 1}], "tempMax": 2});

        assert_eq!(normalize_keys(&input), expected);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = json!({"temp_max": 1});
        let _ = normalize_keys(&input);

        assert_eq!(input, json!({"temp_max": 1}));
    }
}
