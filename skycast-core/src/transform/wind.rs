//! Wind-direction bucketing: 16 cardinal labels over 22.5° sectors, each
//! mapped to one of 8 arrow icons.

/// Cardinal labels clockwise from North.
pub const CARDINAL_LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR_WIDTH: f64 = 22.5;

/// A resolved wind direction: the cardinal label and its arrow icon id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindReading {
    pub label: &'static str,
    pub icon: &'static str,
}

/// Resolve a wind bearing to its cardinal label and arrow icon.
///
/// Sector 0 is centered on North, so anything from 348.75° up through 11.25°
/// resolves to N. Input is normalized with a floored modulo first; negative
/// bearings and values at or above 360° are safe.
pub fn resolve(degrees: f64) -> WindReading {
    let normalized = degrees.rem_euclid(360.0);
    let sector = ((normalized + SECTOR_WIDTH / 2.0) / SECTOR_WIDTH).floor() as usize % 16;
    let label = CARDINAL_LABELS[sector];

    WindReading { label, icon: arrow_icon(label) }
}

// Bootstrap icon classes. Arrows point where the wind blows to, so a north
// wind gets the downward arrow; each diagonal arrow covers the three labels
// around it.
fn arrow_icon(label: &str) -> &'static str {
    match label {
        "N" => "bi-arrow-down",
        "NNE" | "NE" | "ENE" => "bi-arrow-down-left",
        "E" => "bi-arrow-left",
        "ESE" | "SE" | "SSE" => "bi-arrow-up-left",
        "S" => "bi-arrow-up",
        "SSW" | "SW" | "WSW" => "bi-arrow-up-right",
        "W" => "bi-arrow-right",
        _ => "bi-arrow-down-right",
    }
}
