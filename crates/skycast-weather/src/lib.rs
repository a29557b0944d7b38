//! Weather data access for SkyCast
//!
//! Provides geocoding and forecast data via the Open-Meteo APIs, plus the
//! WMO weather-code lookup table shared by the presentation and summary
//! layers.

pub mod conditions;
pub mod geocode;
pub mod provider;
pub mod types;

pub use conditions::WeatherInfo;
pub use geocode::GeocodeClient;
pub use provider::ForecastClient;
pub use types::*;
