//! Forecast client for the Open-Meteo forecast API.
//!
//! Unit preferences pass through to the provider verbatim; no conversion
//! happens here. A present date range switches the request into
//! historical mode (daily aggregates only).

use std::time::Duration;

use serde::Deserialize;
use skycast_core::{Error, ForecastConfig};
use tracing::instrument;

use crate::types::{
    CurrentConditions, DailySeries, DateRange, ForecastSnapshot, HourlySeries, ResolvedLocation,
    UnitPreferences,
};

const REQUEST_TIMEOUT_SECS: u64 = 10;

const CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m";
const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,wind_speed_10m";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: reqwest::Client,
    base_url: String,
}

impl ForecastClient {
    /// Create a client against the configured forecast endpoint.
    ///
    /// # Errors
    /// Returns [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ForecastConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch forecast data for a resolved location.
    ///
    /// Without a range: current conditions plus hourly and daily series.
    /// With a range: daily aggregates for the inclusive span; `current`
    /// and `hourly` are undefined in the returned snapshot.
    ///
    /// # Errors
    /// [`Error::Upstream`] when the provider answers with an error payload,
    /// [`Error::Transport`] on network failure. Never retried.
    #[instrument(skip(self, location), fields(location = %location.display_name), level = "info")]
    pub async fn fetch(
        &self,
        location: &ResolvedLocation,
        units: &UnitPreferences,
        range: Option<&DateRange>,
    ) -> Result<ForecastSnapshot, Error> {
        let mut url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}&hourly={}&daily={}&timezone=auto&temperature_unit={}&wind_speed_unit={}",
            self.base_url,
            location.latitude,
            location.longitude,
            CURRENT_FIELDS,
            HOURLY_FIELDS,
            DAILY_FIELDS,
            units.temperature.as_param(),
            units.wind_speed.as_param(),
        );

        if let Some(range) = range {
            url.push_str(&format!(
                "&start_date={}&end_date={}",
                range.from().format("%Y-%m-%d"),
                range.to().format("%Y-%m-%d"),
            ));
        }

        // The provider reports errors as a JSON payload (often with a 4xx
        // status), so parse the body before judging the status code.
        let response = self.client.get(&url).send().await?;
        let body: ForecastResponse = response.json().await?;

        if body.error {
            let reason = body
                .reason
                .unwrap_or_else(|| "Failed to fetch weather data.".to_string());
            tracing::warn!("Forecast provider rejected request: {}", reason);
            return Err(Error::Upstream(reason));
        }

        let daily = body
            .daily
            .ok_or_else(|| Error::Upstream("Forecast response missing daily data.".to_string()))?;

        Ok(ForecastSnapshot {
            current: body.current,
            hourly: body.hourly,
            daily,
            timezone: body.timezone,
        })
    }
}

/// Wire shape of a forecast response, covering both the data and the
/// `{error, reason}` failure envelope.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    error: bool,
    reason: Option<String>,
    current: Option<CurrentConditions>,
    hourly: Option<HourlySeries>,
    daily: Option<DailySeries>,
    timezone: Option<String>,
}
