use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, warn};

use crate::WeatherError;

/// Issues GET requests and decodes the JSON body.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, WeatherError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, WeatherError> {
        debug!(url, "sending GET request");

        let res = self.http.get(url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        // OpenWeather reports errors such as an unknown city as a JSON body, keep it.
        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "OpenWeather returned an error status");
        }

        serde_json::from_str(&body).map_err(|source| WeatherError::InvalidJson {
            status: status.as_u16(),
            source,
        })
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
