use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use skycast_core::{
    ClientConfig, Config, FetchError, OpenWeatherClient, WeatherSource, WeatherView,
    transform_response,
};

use crate::render::{ConsoleRenderer, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and lookup preferences.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Athens".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    let country = Text::new("Country qualifier for city lookups:")
        .with_default(&config.country)
        .prompt()
        .context("Failed to read country qualifier")?;
    let utc_offset = Text::new("UTC offset for displayed times:")
        .with_default(&config.utc_offset)
        .prompt()
        .context("Failed to read UTC offset")?;

    config.set_api_key(api_key);
    config.country = country;
    config.utc_offset = utc_offset;
    // reject a bad offset before it lands on disk
    config.timezone()?;
    config.save()?;

    println!("Configuration written to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> Result<()> {
    let city = city.trim();
    if city.is_empty() {
        bail!("City name must not be empty.");
    }

    let config = Config::load()?;
    let tz = config.timezone()?;
    let client = OpenWeatherClient::new(ClientConfig::new(
        config.api_key()?.to_string(),
        config.country.clone(),
    ))?;

    // The two failure groups get distinct banners and never show together.
    let raw = match client.fetch_by_city(city).await {
        Ok(raw) => raw,
        Err(FetchError::CityNotFound) => {
            bail!("City not found. Check the spelling and try again.");
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context("The weather service could not be reached. Try again later."));
        }
    };

    let payload = transform_response(&raw, tz);
    let view = WeatherView::from_payload(&payload)?;

    render(&mut ConsoleRenderer, &view);
    Ok(())
}
