//! Fixed prompt template for the weather summary.
//!
//! Input fields are substituted verbatim; the two forecast sequences are
//! iterated into bullet lines. No dynamic evaluation of any kind.

use std::fmt::Write as _;

use crate::types::SummaryInput;

/// Render the summary prompt for one forecast snapshot.
pub fn render(input: &SummaryInput) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You are a weather reporter. Your job is to summarize the weather \
         for a location, given current conditions and forecast data.",
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Location: {}", input.location);
    let _ = writeln!(
        prompt,
        "Current Temperature: {}°C",
        input.current_temperature
    );
    let _ = writeln!(prompt);

    let _ = writeln!(prompt, "Hourly Forecast:");
    for entry in &input.hourly_forecast {
        let _ = writeln!(
            prompt,
            "  - {}: {}°C, {}mm precipitation, {} km/h wind",
            entry.time, entry.temperature, entry.precipitation, entry.wind_speed,
        );
    }
    let _ = writeln!(prompt);

    let _ = writeln!(prompt, "Daily Forecast:");
    for entry in &input.daily_forecast {
        let _ = writeln!(
            prompt,
            "  - {}: High {}°C, Low {}°C, {}",
            entry.time, entry.temperature_high, entry.temperature_low, entry.description,
        );
    }
    let _ = writeln!(prompt);

    let _ = write!(
        prompt,
        "Write a concise summary of the weather. Reason about whether to \
         describe current temperatures or future events like storms, if any exist.",
    );

    prompt
}
