//! Presentation-ready view model and the summary-input assembly.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use skycast_ai::{DailyEntry, HourlyEntry, SummaryInput};
use skycast_core::Error;
use skycast_weather::{ForecastSnapshot, WeatherInfo};

/// How many hourly points feed the summary prompt (one day).
const SUMMARY_HOURLY_POINTS: usize = 24;

/// The single object handed to the presentation layer. Created once per
/// successful request and replaced wholesale on the next one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherViewModel {
    /// Canonical name from the geocoder, not the raw user input.
    pub location_name: String,
    pub snapshot: ForecastSnapshot,
    /// Absent only in historical mode.
    pub summary: Option<String>,
}

/// Build the structured summary input from a forecast-mode snapshot.
///
/// Temperatures and wind speeds are rounded to the nearest integer,
/// precipitation probability passes through, and daily weather codes are
/// mapped to their descriptions.
pub(crate) fn build_summary_input(
    location_name: &str,
    snapshot: &ForecastSnapshot,
) -> Result<SummaryInput, Error> {
    let current = snapshot.current.as_ref().ok_or_else(|| {
        Error::Upstream("Forecast response missing current conditions.".to_string())
    })?;
    let hourly = snapshot
        .hourly
        .as_ref()
        .ok_or_else(|| Error::Upstream("Forecast response missing hourly data.".to_string()))?;

    let hourly_forecast = hourly
        .time
        .iter()
        .zip(&hourly.temperature_2m)
        .zip(&hourly.precipitation_probability)
        .zip(&hourly.wind_speed_10m)
        .take(SUMMARY_HOURLY_POINTS)
        .map(|(((time, temperature), precipitation), wind_speed)| HourlyEntry {
            time: hour_label(time),
            temperature: round_whole(*temperature),
            precipitation: *precipitation,
            wind_speed: round_whole(*wind_speed),
        })
        .collect();

    let daily = &snapshot.daily;
    let daily_forecast = daily
        .time
        .iter()
        .zip(&daily.temperature_2m_max)
        .zip(&daily.temperature_2m_min)
        .zip(&daily.weather_code)
        .map(|(((time, high), low), code)| DailyEntry {
            time: weekday_label(time),
            temperature_high: round_whole(*high),
            temperature_low: round_whole(*low),
            description: WeatherInfo::classify(*code).description.to_string(),
        })
        .collect();

    Ok(SummaryInput {
        location: location_name.to_string(),
        current_temperature: round_whole(current.temperature_2m),
        hourly_forecast,
        daily_forecast,
    })
}

/// Nearest-integer rounding for prompt values. Idempotent: rounding an
/// already-rounded value yields the same value.
fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// "2024-06-01T13:00" -> "1 PM". Unparseable timestamps pass through raw.
fn hour_label(time: &str) -> String {
    match NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M") {
        Ok(dt) => dt.format("%-I %p").to_string(),
        Err(_) => time.to_string(),
    }
}

/// "2024-06-03" -> "Mon". Unparseable dates pass through raw.
fn weekday_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%a").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::{CurrentConditions, DailySeries, HourlySeries};

    fn forecast_snapshot() -> ForecastSnapshot {
        ForecastSnapshot {
            current: Some(CurrentConditions {
                time: "2024-06-01T12:15".into(),
                temperature_2m: 21.6,
                weather_code: 2,
                wind_speed_10m: 11.2,
            }),
            hourly: Some(HourlySeries {
                time: (0..30)
                    .map(|h| format!("2024-06-{:02}T{:02}:00", 1 + h / 24, h % 24))
                    .collect(),
                temperature_2m: (0..30).map(|h| 15.0 + h as f64 * 0.4).collect(),
                precipitation_probability: vec![25.0; 30],
                wind_speed_10m: vec![10.5; 30],
            }),
            daily: DailySeries {
                time: vec!["2024-06-01".into(), "2024-06-02".into()],
                weather_code: vec![0, 61],
                temperature_2m_max: vec![23.5, 19.4],
                temperature_2m_min: vec![14.4, 12.6],
            },
            timezone: Some("Europe/Berlin".into()),
        }
    }

    #[test]
    fn test_summary_input_caps_hourly_at_24_points() {
        let input = build_summary_input("Berlin, Germany", &forecast_snapshot()).unwrap();
        assert_eq!(input.hourly_forecast.len(), 24);
    }

    #[test]
    fn test_summary_input_rounds_temperatures_and_wind() {
        let input = build_summary_input("Berlin, Germany", &forecast_snapshot()).unwrap();
        assert_eq!(input.current_temperature, 22);
        assert_eq!(input.hourly_forecast[0].temperature, 15);
        assert_eq!(input.hourly_forecast[0].wind_speed, 11);
        // Precipitation probability passes through unrounded.
        assert!((input.hourly_forecast[0].precipitation - 25.0).abs() < f64::EPSILON);
        assert_eq!(input.daily_forecast[0].temperature_high, 24);
        assert_eq!(input.daily_forecast[1].temperature_low, 13);
    }

    #[test]
    fn test_summary_input_maps_codes_to_descriptions() {
        let input = build_summary_input("Berlin, Germany", &forecast_snapshot()).unwrap();
        assert_eq!(input.daily_forecast[0].description, "Clear sky");
        assert_eq!(input.daily_forecast[1].description, "Slight rain");
    }

    #[test]
    fn test_summary_input_uses_canonical_location_name() {
        let input = build_summary_input("Berlin, Germany", &forecast_snapshot()).unwrap();
        assert_eq!(input.location, "Berlin, Germany");
    }

    #[test]
    fn test_missing_hourly_section_is_upstream_error() {
        let mut snapshot = forecast_snapshot();
        snapshot.hourly = None;
        let result = build_summary_input("Berlin, Germany", &snapshot);
        assert!(matches!(result, Err(Error::Upstream(_))));
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for value in [-7.5, -0.4, 0.0, 0.5, 3.49, 3.5, 21.6, 100.0] {
            let once = round_whole(value);
            let twice = round_whole(once as f64);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_hour_label_uses_12_hour_clock() {
        assert_eq!(hour_label("2024-06-01T13:00"), "1 PM");
        assert_eq!(hour_label("2024-06-01T00:00"), "12 AM");
        assert_eq!(hour_label("2024-06-01T12:00"), "12 PM");
    }

    #[test]
    fn test_weekday_label_is_short_weekday() {
        assert_eq!(weekday_label("2024-01-01"), "Mon");
        assert_eq!(weekday_label("2024-01-07"), "Sun");
    }

    #[test]
    fn test_unparseable_times_pass_through() {
        assert_eq!(hour_label("not-a-time"), "not-a-time");
        assert_eq!(weekday_label("not-a-date"), "not-a-date");
    }
}
