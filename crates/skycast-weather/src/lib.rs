//! Open-Meteo collaborator for Skycast
//!
//! Provides the forecast snapshot types, the weather-code description
//! table and the HTTP client the dashboard fetches through.

pub mod client;
pub mod types;

pub use client::OpenMeteoClient;
pub use types::*;
