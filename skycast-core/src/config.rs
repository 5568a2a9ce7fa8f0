use anyhow::{Context, Result, anyhow};
use chrono::FixedOffset;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

fn default_country() -> String {
    "GR".to_string()
}

fn default_utc_offset() -> String {
    "+03:00".to_string()
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeather API key; the one required secret.
    pub api_key: Option<String>,

    /// Country qualifier appended to every city lookup, e.g. "Athens,GR".
    #[serde(default = "default_country")]
    pub country: String,

    /// UTC offset used when formatting sunrise/sunset/observation times,
    /// e.g. "+03:00". Displayed times never depend on the machine's
    /// ambient timezone.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            country: default_country(),
            utc_offset: default_utc_offset(),
        }
    }
}

impl Config {
    /// The configured API key, or a hint on how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure` and enter your OpenWeather API key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// The configured display timezone as a fixed UTC offset.
    pub fn timezone(&self) -> Result<FixedOffset> {
        self.utc_offset.parse().map_err(|_| {
            anyhow!(
                "Invalid utc_offset '{}' in config; expected an offset like \"+03:00\".",
                self.utc_offset
            )
        })
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
