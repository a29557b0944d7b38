use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skycast_core::Error;

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Query-string token the forecast provider expects.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }
}

/// Wind speed unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindSpeedUnit {
    #[default]
    Kmh,
    Mph,
}

impl WindSpeedUnit {
    /// Query-string token the forecast provider expects.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Kmh => "kmh",
            Self::Mph => "mph",
        }
    }
}

/// Unit preferences supplied by the caller, constant for one request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UnitPreferences {
    pub temperature: TemperatureUnit,
    pub wind_speed: WindSpeedUnit,
}

/// How the user identified the location: a free-text name or explicit
/// coordinates. Presence is structural, so a legitimate latitude or
/// longitude of 0.0 is never mistaken for "not provided".
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Name(String),
    Coordinates { latitude: f64, longitude: f64 },
}

/// Canonical location produced by the geocoding step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Inclusive date range switching the forecast client into historical mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `from > to`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] when the range is inverted.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, Error> {
        if from > to {
            return Err(Error::InvalidInput(format!(
                "Invalid date range: {} is after {}",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }
}

/// Current conditions as reported by the forecast provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub time: String,
    pub temperature_2m: f64,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
}

/// Hourly series: parallel arrays, index-aligned by provider contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    pub wind_speed_10m: Vec<f64>,
}

/// Daily series: parallel arrays, index-aligned by provider contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
}

/// Forecast data for one location.
///
/// `current` and `hourly` are absent in historical mode; consumers must
/// not read them then. Array alignment inside each series is trusted from
/// the provider, not revalidated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub current: Option<CurrentConditions>,
    pub hourly: Option<HourlySeries>,
    pub daily: DailySeries,
    pub timezone: Option<String>,
}
