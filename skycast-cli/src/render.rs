use std::collections::BTreeMap;

use skycast_core::{MISSING, WeatherView, WindView};

/// One method per named output slot group. The transformation core never
/// writes output itself; anything that can display these slots can act as
/// the renderer.
pub trait Renderer {
    fn caption(&mut self, city: &str, observed_at: &str);
    fn conditions(&mut self, summary: &str, icon_url: Option<&str>);
    fn details(&mut self, details: &BTreeMap<String, String>);
    fn visibility(&mut self, visibility: &str);
    fn sun_times(&mut self, sunrise: &str, sunset: &str);
    fn wind(&mut self, wind: &WindView);
}

/// Detail slots shown under the main reading. Each is looked up by key in
/// the transformed `main` record and falls back to "-" when absent.
pub const DETAIL_SLOTS: &[&str] = &[
    "temp", "feelsLike", "tempMin", "tempMax", "pressure", "humidity", "seaLevel", "grndLevel",
];

/// Push the whole view through a renderer, slot group by slot group.
pub fn render(renderer: &mut dyn Renderer, view: &WeatherView) {
    renderer.caption(&view.city, &view.observed_at);
    renderer.conditions(&view.condition, view.icon_url.as_deref());
    renderer.details(&view.details);
    renderer.visibility(&view.visibility);
    renderer.sun_times(&view.sunrise, &view.sunset);
    renderer.wind(&view.wind);
}

fn detail_slot<'a>(details: &'a BTreeMap<String, String>, slot: &str) -> &'a str {
    details.get(slot).map_or(MISSING, String::as_str)
}

/// Writes each slot group as a line on stdout.
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn caption(&mut self, city: &str, observed_at: &str) {
        println!("Weather data at {observed_at} for the city {city}");
    }

    fn conditions(&mut self, summary: &str, icon_url: Option<&str>) {
        match icon_url {
            Some(url) => println!("{summary}  [{url}]"),
            None => println!("{summary}"),
        }
    }

    fn details(&mut self, details: &BTreeMap<String, String>) {
        for slot in DETAIL_SLOTS {
            println!("  {slot}: {}", detail_slot(details, slot));
        }
    }

    fn visibility(&mut self, visibility: &str) {
        println!("Visibility: {visibility}");
    }

    fn sun_times(&mut self, sunrise: &str, sunset: &str) {
        println!("Sunrise: {sunrise}");
        println!("Sunset: {sunset}");
    }

    fn wind(&mut self, wind: &WindView) {
        match (wind.reading, wind.degrees) {
            (Some(reading), Some(degrees)) => {
                println!("Wind: {} ({degrees}°) [{}]", reading.label, reading.icon);
            }
            _ => println!("Wind: {MISSING}"),
        }
        println!("Wind speed: {}", wind.speed);
        println!("Wind gust: {}", wind.gust);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;
    use skycast_core::transform_response;

    /// Captures one string per slot write so tests can assert on ordering
    /// and placeholder behavior.
    #[derive(Default)]
    struct RecordingRenderer {
        lines: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn caption(&mut self, city: &str, observed_at: &str) {
            self.lines.push(format!("caption:{city}@{observed_at}"));
        }

        fn conditions(&mut self, summary: &str, icon_url: Option<&str>) {
            self.lines.push(format!("conditions:{summary}:{}", icon_url.unwrap_or(MISSING)));
        }

        fn details(&mut self, details: &BTreeMap<String, String>) {
            for slot in DETAIL_SLOTS {
                self.lines.push(format!("{slot}={}", detail_slot(details, slot)));
            }
        }

        fn visibility(&mut self, visibility: &str) {
            self.lines.push(format!("visibility:{visibility}"));
        }

        fn sun_times(&mut self, sunrise: &str, sunset: &str) {
            self.lines.push(format!("sun:{sunrise}/{sunset}"));
        }

        fn wind(&mut self, wind: &WindView) {
            let label = wind.reading.map_or(MISSING, |r| r.label);
            self.lines.push(format!("wind:{label}:{}:{}", wind.speed, wind.gust));
        }
    }

    #[test]
    fn renders_every_slot_group_with_placeholders() {
        let raw = json!({
            "main": {"temp": 300.0, "pressure": 1013, "humidity": 50},
            "wind": {"deg": 0, "speed": 3},
            "sys": {"sunrise": 0, "sunset": 0},
            "dt": 0,
            "name": "Athens",
            "weather": [{"main": "Clear", "description": "clear sky", "icon": "01d"}],
            "visibility": 10000
        });
        let payload = transform_response(&raw, FixedOffset::east_opt(0).unwrap());
        let view = skycast_core::WeatherView::from_payload(&payload).unwrap();

        let mut recorder = RecordingRenderer::default();
        render(&mut recorder, &view);

        assert_eq!(recorder.lines[0], "caption:Athens@00:00:00");
        assert_eq!(
            recorder.lines[1],
            "conditions:Clear, clear sky:https://openweathermap.org/img/wn/01d@2x.png"
        );
        assert!(recorder.lines.contains(&"temp=27.9 °C".to_string()));
        assert!(recorder.lines.contains(&"pressure=1013hPa".to_string()));
        assert!(recorder.lines.contains(&"humidity=50%".to_string()));
        // slots with no matching key fall back to the placeholder
        assert!(recorder.lines.contains(&"seaLevel=-".to_string()));
        assert!(recorder.lines.contains(&"grndLevel=-".to_string()));
        assert!(recorder.lines.contains(&"visibility:10 km".to_string()));
        assert!(recorder.lines.contains(&"sun:00:00:00/00:00:00".to_string()));
        assert!(recorder.lines.contains(&"wind:N:3 m/s:-".to_string()));
    }
}
