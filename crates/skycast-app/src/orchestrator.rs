//! Request orchestration: geocode, fetch, summarize, assemble.
//!
//! The four network-bound steps run strictly in sequence; the caller
//! observes only the coarse phase. A monotonically increasing sequence
//! token guards against a stale in-flight result clobbering a newer one,
//! since in-flight requests are never cancelled.

use skycast_ai::SummaryClient;
use skycast_core::{Config, Error};
use skycast_weather::{DateRange, ForecastClient, GeocodeClient, LocationQuery, UnitPreferences};

use crate::view_model::{build_summary_input, WeatherViewModel};

/// Coarse request state observed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// One submission from the presentation layer.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub query: Option<LocationQuery>,
    pub units: UnitPreferences,
    pub range: Option<DateRange>,
}

/// Owns the request state machine and the single view-model slot.
#[derive(Debug)]
pub struct Dashboard {
    geocoder: GeocodeClient,
    forecast: ForecastClient,
    summarizer: SummaryClient,
    phase: Phase,
    view_model: Option<WeatherViewModel>,
    error_message: Option<String>,
    sequence: u64,
}

impl Dashboard {
    /// Create a dashboard wired to the configured providers.
    ///
    /// # Errors
    /// Returns [`Error::Transport`] if an HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            geocoder: GeocodeClient::new(&config.geocoding)?,
            forecast: ForecastClient::new(&config.forecast)?,
            summarizer: SummaryClient::new(&config.summary)?,
            phase: Phase::Idle,
            view_model: None,
            error_message: None,
            sequence: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The assembled view model, present only in `Ready`.
    pub fn view_model(&self) -> Option<&WeatherViewModel> {
        self.view_model.as_ref()
    }

    /// User-facing message for the last failure, present only in `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Run one full request cycle and apply the outcome.
    pub async fn submit(&mut self, request: WeatherRequest) {
        let token = self.begin_request();
        let result = self.run(&request).await;
        self.complete_request(token, result);
    }

    /// Enter `Loading`, clearing the previous view model and error, and
    /// issue the sequence token for this request.
    pub fn begin_request(&mut self) -> u64 {
        self.sequence += 1;
        self.phase = Phase::Loading;
        self.view_model = None;
        self.error_message = None;
        self.sequence
    }

    /// Apply a finished request's outcome. Results carrying a token other
    /// than the latest are stale and discarded without touching state.
    pub fn complete_request(&mut self, token: u64, result: Result<WeatherViewModel, Error>) {
        if token != self.sequence {
            tracing::debug!(token, latest = self.sequence, "Discarding stale result");
            return;
        }

        match result {
            Ok(view_model) => {
                self.phase = Phase::Ready;
                self.view_model = Some(view_model);
            }
            Err(e) => {
                tracing::warn!("Weather request failed: {}", e);
                self.phase = Phase::Failed;
                self.error_message = Some(e.user_message());
            }
        }
    }

    /// The linear request sequence: validate, geocode, fetch, summarize.
    async fn run(&self, request: &WeatherRequest) -> Result<WeatherViewModel, Error> {
        let query = request.query.as_ref().ok_or_else(|| {
            Error::InvalidInput(
                "Please enter a location or select a point on the map.".to_string(),
            )
        })?;

        let location = self.geocoder.resolve(query).await?;
        let snapshot = self
            .forecast
            .fetch(&location, &request.units, request.range.as_ref())
            .await?;

        // Historical mode carries no narrative summary.
        if request.range.is_some() {
            return Ok(WeatherViewModel {
                location_name: location.display_name,
                snapshot,
                summary: None,
            });
        }

        let input = build_summary_input(&location.display_name, &snapshot)?;
        let summary = self.summarizer.summarize(&input).await?;

        Ok(WeatherViewModel {
            location_name: location.display_name,
            snapshot,
            summary: Some(summary),
        })
    }
}
