use serde::{Deserialize, Serialize};

const GEOCODING_API_URL: &str = "https://geocoding-api.open-meteo.com/v1";
const FORECAST_API_URL: &str = "https://api.open-meteo.com/v1";
const LLM_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Top-level configuration for the dashboard services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Geocoding provider settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Forecast provider settings
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Language-model summary settings
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the geocoding API
    pub base_url: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: GEOCODING_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Base URL of the forecast API
    pub base_url: String,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: FORECAST_API_URL.to_string(),
        }
    }
}

/// Language-model completion service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Base URL of the completion API
    pub base_url: String,

    /// Model identifier to request
    pub model: String,

    /// API key (read from SKYCAST_LLM_API_KEY when not set explicitly)
    pub api_key: Option<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            base_url: LLM_API_URL.to_string(),
            model: std::env::var("SKYCAST_LLM_MODEL")
                .unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            api_key: std::env::var("SKYCAST_LLM_API_KEY").ok(),
        }
    }
}

impl SummaryConfig {
    /// Check if credentials are configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
