use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, error, warn};

use crate::{
    Config, WeatherError, WeatherResponse,
    config::{DEFAULT_WEATHER_URL, OPENWEATHER_SERVICE, default_icon_dir},
    credentials::{ConfigCredentialStore, CredentialStore},
    transport::{ReqwestTransport, Transport},
};

/// Wrapper around the OpenWeather current weather API.
///
/// 1. Create a client.
/// 2. Call [`get_weather`](Self::get_weather) with a city name, a zip code or
///    `City,CountryCode` (e.g. `London,UK`).
/// 3. Read the last response through [`formatted_response`](Self::formatted_response),
///    [`weather_icon_file`](Self::weather_icon_file) or [`weather_json`](Self::weather_json).
///
/// The API key is fetched from the credential store on the first lookup.
#[derive(Debug)]
pub struct WeatherClient {
    credentials: Box<dyn CredentialStore>,
    transport: Box<dyn Transport>,
    weather_url: String,
    icon_dir: PathBuf,
    api_key: String,
    last_response: Option<WeatherResponse>,
}

impl WeatherClient {
    pub fn new(credentials: Box<dyn CredentialStore>, transport: Box<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            icon_dir: default_icon_dir(),
            api_key: String::new(),
            last_response: None,
        }
    }

    /// Client reading its key from the config file at `path`, with the
    /// endpoint and icon directory overrides from `config` applied.
    pub fn from_config(config: &Config, path: impl Into<PathBuf>) -> Self {
        Self::new(
            Box::new(ConfigCredentialStore::new(path)),
            Box::new(ReqwestTransport::new()),
        )
        .with_weather_url(config.weather_url())
        .with_icon_dir(config.icon_dir())
    }

    pub fn with_weather_url(mut self, url: impl Into<String>) -> Self {
        self.weather_url = url.into();
        self
    }

    pub fn with_icon_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.icon_dir = dir.into();
        self
    }

    /// Fetch the OpenWeather API key from the credential store.
    ///
    /// Callers do not need to invoke this; [`get_weather`](Self::get_weather)
    /// does so when no key is cached yet.
    pub fn initialize(&mut self) -> Result<(), WeatherError> {
        self.credentials
            .read()
            .map_err(|e| WeatherError::Credentials(format!("{e:#}")))?;
        self.api_key = self
            .credentials
            .api_key(OPENWEATHER_SERVICE)
            .unwrap_or_default();
        self.credentials.clear();

        if self.api_key.is_empty() {
            error!("Cannot find {OPENWEATHER_SERVICE} API key");
            return Err(WeatherError::MissingApiKey {
                service: OPENWEATHER_SERVICE.to_string(),
            });
        }

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn ensure_initialized(&mut self) -> Result<(), WeatherError> {
        if self.is_initialized() {
            return Ok(());
        }
        self.initialize()
    }

    /// Look up the current weather for `city` and cache the JSON response.
    ///
    /// The previous response is dropped first, so on error nothing is cached.
    pub async fn get_weather(&mut self, city: &str) -> Result<(), WeatherError> {
        self.last_response = None;
        self.ensure_initialized()?;

        debug!(city, "fetching current weather");
        let query = [
            ("APPID", self.api_key.as_str()),
            ("q", city),
            ("units", "imperial"),
        ];
        let json = self.transport.get_json(&self.weather_url, &query).await?;

        self.last_response = Some(WeatherResponse::new(json));
        Ok(())
    }

    /// Three-line description of the last response, for example:
    ///
    /// ```text
    /// City: Houston
    /// Conditions: scattered clouds
    /// Temperature (F): 94.93
    /// ```
    ///
    /// Empty before the first successful lookup.
    pub fn formatted_response(&self) -> String {
        self.last_response
            .as_ref()
            .map(WeatherResponse::summary)
            .unwrap_or_default()
    }

    /// Local `<icon_dir>/<icon-code>.png` path for the last response's conditions.
    /// The file is not checked for existence.
    pub fn weather_icon_file(&self) -> Option<PathBuf> {
        let response = self.last_response.as_ref().filter(|r| !r.is_empty())?;

        match response.icon_code() {
            Some(code) => Some(self.icon_dir.join(format!("{code}.png"))),
            None => {
                warn!("weather response has no icon code");
                None
            }
        }
    }

    /// Raw JSON of the last response.
    pub fn weather_json(&self) -> Option<&Value> {
        self.last_response.as_ref().map(WeatherResponse::as_json)
    }
}
