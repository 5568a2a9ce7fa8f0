use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;

/// Default endpoint for current-weather lookups.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Upstream gets this long to answer before the request counts as failed.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Explicit client configuration; nothing is read from ambient globals.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    /// Country qualifier appended to every lookup, e.g. "Athens,GR".
    pub country: String,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(api_key: String, country: String) -> Self {
        Self { api_key, country, base_url: DEFAULT_BASE_URL.to_string() }
    }
}

/// Anything that can look up the raw current-weather payload for a city.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_by_city(&self, city: &str) -> Result<Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    config: ClientConfig,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn fetch_by_city(&self, city: &str) -> Result<Value, FetchError> {
        let query = format!("{},{}", city, self.config.country);
        debug!(city, "requesting current weather");

        let res = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("q", query.as_str()),
                ("limit", "1"),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        classify_response(status, body)
    }
}

/// Map the HTTP outcome onto the fetch-error taxonomy: 404 means the city
/// does not exist upstream; any other non-success status, or a body that
/// fails to decode, is a service failure.
fn classify_response(status: StatusCode, body: String) -> Result<Value, FetchError> {
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::CityNotFound);
    }
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus { status, body: truncate_body(&body) });
    }

    Ok(serde_json::from_str(&body)?)
}

// The body is upstream-controlled, so cut on a char boundary rather than a
// byte offset.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StaticSource(Value);

    #[async_trait]
    impl WeatherSource for StaticSource {
        async fn fetch_by_city(&self, _city: &str) -> Result<Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn sources_are_swappable_behind_the_trait() {
        let source: Box<dyn WeatherSource> =
            Box::new(StaticSource(json!({"name": "Athens"})));
        let payload = source.fetch_by_city("Athens").await.unwrap();

        assert_eq!(payload["name"], "Athens");
    }

    #[test]
    fn not_found_status_means_city_not_found() {
        let err = classify_response(
            StatusCode::NOT_FOUND,
            r#"{"cod":"404","message":"city not found"}"#.to_string(),
        )
        .unwrap_err();

        assert!(err.is_city_not_found());
    }

    #[test]
    fn other_error_statuses_are_service_failures() {
        let err = classify_response(StatusCode::UNAUTHORIZED, "bad key".to_string()).unwrap_err();

        match err {
            FetchError::UnexpectedStatus { status, body } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(body, "bad key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn undecodable_body_is_a_service_failure() {
        let err = classify_response(StatusCode::OK, "<html>".to_string()).unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
        assert!(!err.is_city_not_found());
    }

    #[test]
    fn success_returns_the_payload() {
        let value =
            classify_response(StatusCode::OK, r#"{"name":"Athens"}"#.to_string()).unwrap();

        assert_eq!(value["name"], "Athens");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let err = classify_response(StatusCode::BAD_GATEWAY, body).unwrap_err();

        match err {
            FetchError::UnexpectedStatus { body, .. } => {
                assert_eq!(body.len(), 203);
                assert!(body.ends_with("..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        // a multibyte char straddling the cutoff must not panic the slice
        let body = format!("{}€ and more", "x".repeat(199));
        let err = classify_response(StatusCode::BAD_GATEWAY, body).unwrap_err();

        match err {
            FetchError::UnexpectedStatus { body, .. } => {
                assert_eq!(body.chars().count(), 203);
                assert!(body.ends_with("€..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
