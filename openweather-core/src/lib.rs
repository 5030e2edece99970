//! Core library for the `openweather` CLI.
//!
//! This crate defines:
//! - The [`WeatherClient`] wrapper around the OpenWeather current weather API
//! - Credential store and HTTP transport abstractions it depends on
//! - Configuration handling and the cached response type
//!
//! It is used by `openweather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod transport;

pub use client::WeatherClient;
pub use config::Config;
pub use credentials::{ConfigCredentialStore, CredentialStore};
pub use error::WeatherError;
pub use model::WeatherResponse;
pub use transport::{ReqwestTransport, Transport};
