//! SkyCast orchestrator
//!
//! Sequences geocoding, forecast fetch, and summary generation into one
//! view model, and exposes the coarse request state the presentation
//! layer renders from.

pub mod orchestrator;
pub mod view_model;

pub use orchestrator::{Dashboard, Phase, WeatherRequest};
pub use view_model::WeatherViewModel;
