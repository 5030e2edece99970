use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::Password;
use openweather_core::{Config, WeatherClient, config::OPENWEATHER_SERVICE};
use std::path::{Path, PathBuf};
use tracing::info;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "openweather", version, about = "Current weather from OpenWeather")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, zip code or "City,CountryCode" (e.g. "London,UK").
        city: String,

        /// Also print the raw JSON response.
        #[arg(long)]
        json: bool,

        /// Also print the local icon file for the current conditions.
        #[arg(long)]
        icon: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };

        match self.command {
            Command::Configure => configure(&config_path),
            Command::Show { city, json, icon } => show(&config_path, &city, json, icon).await,
        }
    }
}

fn configure(config_path: &Path) -> Result<()> {
    let mut config = Config::load_from(config_path)?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.upsert_api_key(OPENWEATHER_SERVICE, api_key.trim().to_string());
    config.save_to(config_path)?;

    info!(path = %config_path.display(), "saved API key");
    println!("Saved OpenWeather API key to {}", config_path.display());
    Ok(())
}

async fn show(config_path: &Path, city: &str, json: bool, icon: bool) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let mut client = WeatherClient::from_config(&config, config_path);

    client
        .get_weather(city)
        .await
        .with_context(|| format!("Failed to get weather for '{city}'"))?;

    println!("{}", client.formatted_response());

    if icon {
        match client.weather_icon_file() {
            Some(path) => println!("Icon: {}", path.display()),
            None => println!("Icon: none"),
        }
    }

    if let Some(raw) = client.weather_json().filter(|_| json) {
        println!("{}", serde_json::to_string_pretty(raw)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_flags() {
        let cli = Cli::try_parse_from(["openweather", "show", "London,UK", "--json", "--icon"]).unwrap();

        assert!(cli.config.is_none());
        match cli.command {
            Command::Show { city, json, icon } => {
                assert_eq!(city, "London,UK");
                assert!(json);
                assert!(icon);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["openweather", "configure", "--config", "/tmp/ow.toml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ow.toml")));
        assert!(matches!(cli.command, Command::Configure));
    }

    #[test]
    fn show_requires_city() {
        assert!(Cli::try_parse_from(["openweather", "show"]).is_err());
    }
}
