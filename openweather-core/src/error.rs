use thiserror::Error;

/// Errors returned by [`WeatherClient`](crate::WeatherClient) and its collaborators.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The credential store has no (or an empty) key for the service.
    #[error(
        "Cannot find {service} API key.\n\
         Hint: run `openweather configure` and enter your API key."
    )]
    MissingApiKey { service: String },

    /// The credential store could not be read.
    #[error("Failed to read credentials: {0}")]
    Credentials(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("Request to OpenWeather failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not JSON.
    #[error("Failed to parse OpenWeather response (status {status}): {source}")]
    InvalidJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
