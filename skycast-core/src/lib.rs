//! Core library for the `skycast` weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The response-transformation pipeline (key renaming, unit conversion,
//!   wind-direction bucketing)
//! - The display view-model and the weather-service client
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod transform;

pub use client::{ClientConfig, OpenWeatherClient, WeatherSource};
pub use config::Config;
pub use error::{FetchError, TransformError};
pub use model::{MISSING, WeatherView, WindView};
pub use transform::transform_response;
pub use transform::wind::WindReading;
