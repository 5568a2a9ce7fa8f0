use thiserror::Error;

/// Failures while talking to the weather service.
///
/// `CityNotFound` is the only variant a user can fix by retyping their
/// query; every other variant is surfaced as a generic service failure.
/// The two groups get distinct, mutually exclusive messages.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no match for that city")]
    CityNotFound,

    /// Send failure: timeout, connection error, TLS problem.
    #[error("weather service request failed")]
    Http(#[from] reqwest::Error),

    #[error("weather service returned status {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed weather service response")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// True for the "no such city" case, which gets its own banner.
    pub fn is_city_not_found(&self) -> bool {
        matches!(self, FetchError::CityNotFound)
    }
}

/// Failures while extracting the display view from a transformed payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("weather payload is missing required field `{0}`")]
    MissingField(&'static str),
}
