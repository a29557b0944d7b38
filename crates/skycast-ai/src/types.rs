use serde::{Deserialize, Serialize};

/// One hourly forecast point, pre-rounded for the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// 12-hour clock label, e.g. "1 PM"
    pub time: String,
    pub temperature: i64,
    pub precipitation: f64,
    pub wind_speed: i64,
}

/// One daily forecast point, pre-rounded for the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Short weekday label, e.g. "Mon"
    pub time: String,
    pub temperature_high: i64,
    pub temperature_low: i64,
    pub description: String,
}

/// Structured snapshot the summary prompt is rendered from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryInput {
    pub location: String,
    pub current_temperature: i64,
    pub hourly_forecast: Vec<HourlyEntry>,
    pub daily_forecast: Vec<DailyEntry>,
}
