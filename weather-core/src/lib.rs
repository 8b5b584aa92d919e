//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Credential resolution (`-k` flag, `.env`, `API_KEY`)
//! - Location validation & normalization
//! - The OpenWeather current-weather client
//! - The error taxonomy shared with the CLI
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod openweather;

pub use error::Error;
pub use location::Location;
pub use model::WeatherReport;
pub use openweather::OpenWeatherClient;
