use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Current weather endpoint.
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Service name the OpenWeather API key is stored under.
pub const OPENWEATHER_SERVICE: &str = "openweather";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Overrides [`DEFAULT_WEATHER_URL`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_url: Option<String>,

    /// Directory holding `<icon-code>.png` files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_dir: Option<PathBuf>,

    /// Example TOML:
    /// [api_keys]
    /// openweather = "..."
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
}

impl Config {
    /// Load config from the platform config directory, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "openweather", "openweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set or replace the API key stored for a service.
    pub fn upsert_api_key(&mut self, service: &str, api_key: String) {
        self.api_keys.insert(service.to_string(), api_key);
    }

    /// Returns the API key for a service, if present.
    pub fn api_key(&self, service: &str) -> Option<&str> {
        self.api_keys.get(service).map(String::as_str)
    }

    pub fn weather_url(&self) -> &str {
        self.weather_url.as_deref().unwrap_or(DEFAULT_WEATHER_URL)
    }

    /// Icon directory, defaulting to the `img` directory shipped with this crate.
    pub fn icon_dir(&self) -> PathBuf {
        self.icon_dir.clone().unwrap_or_else(default_icon_dir)
    }
}

pub fn default_icon_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("img")
}
