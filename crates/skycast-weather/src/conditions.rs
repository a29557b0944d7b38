//! WMO weather-code lookup table.
//!
//! Total over all inputs: codes outside the published table map to the
//! "Unknown" fallback instead of failing.
//! See: https://open-meteo.com/en/docs#weathervariables

/// Human-readable description and icon key for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

impl WeatherInfo {
    /// Classify a WMO weather code.
    pub fn classify(code: i32) -> Self {
        let (description, icon) = match code {
            0 => ("Clear sky", "sun"),
            1 => ("Mainly clear", "cloud_sun"),
            2 => ("Partly cloudy", "cloud"),
            3 => ("Overcast", "cloud"),
            45 => ("Fog", "cloud_fog"),
            48 => ("Depositing rime fog", "cloud_fog"),
            51 => ("Light drizzle", "cloud_drizzle"),
            53 => ("Moderate drizzle", "cloud_drizzle"),
            55 => ("Dense drizzle", "cloud_drizzle"),
            56 => ("Light freezing drizzle", "cloud_drizzle"),
            57 => ("Dense freezing drizzle", "cloud_drizzle"),
            61 => ("Slight rain", "cloud_rain"),
            63 => ("Moderate rain", "cloud_rain"),
            65 => ("Heavy rain", "cloud_rain"),
            66 => ("Light freezing rain", "cloud_rain"),
            67 => ("Heavy freezing rain", "cloud_rain"),
            71 => ("Slight snow fall", "cloud_snow"),
            73 => ("Moderate snow fall", "cloud_snow"),
            75 => ("Heavy snow fall", "cloud_snow"),
            77 => ("Snow grains", "cloud_snow"),
            80 => ("Slight rain showers", "cloud_rain"),
            81 => ("Moderate rain showers", "cloud_rain"),
            82 => ("Violent rain showers", "cloud_rain"),
            85 => ("Slight snow showers", "cloud_snow"),
            86 => ("Heavy snow showers", "cloud_snow"),
            95 => ("Thunderstorm", "cloud_lightning"),
            96 => ("Thunderstorm with slight hail", "cloud_lightning"),
            99 => ("Thunderstorm with heavy hail", "cloud_lightning"),
            _ => ("Unknown", "cloud"),
        };
        Self { description, icon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sky() {
        let info = WeatherInfo::classify(0);
        assert_eq!(info.description, "Clear sky");
        assert_eq!(info.icon, "sun");
    }

    #[test]
    fn test_every_tabled_code_has_documented_description() {
        let table = [
            (0, "Clear sky"),
            (1, "Mainly clear"),
            (2, "Partly cloudy"),
            (3, "Overcast"),
            (45, "Fog"),
            (48, "Depositing rime fog"),
            (51, "Light drizzle"),
            (53, "Moderate drizzle"),
            (55, "Dense drizzle"),
            (56, "Light freezing drizzle"),
            (57, "Dense freezing drizzle"),
            (61, "Slight rain"),
            (63, "Moderate rain"),
            (65, "Heavy rain"),
            (66, "Light freezing rain"),
            (67, "Heavy freezing rain"),
            (71, "Slight snow fall"),
            (73, "Moderate snow fall"),
            (75, "Heavy snow fall"),
            (77, "Snow grains"),
            (80, "Slight rain showers"),
            (81, "Moderate rain showers"),
            (82, "Violent rain showers"),
            (85, "Slight snow showers"),
            (86, "Heavy snow showers"),
            (95, "Thunderstorm"),
            (96, "Thunderstorm with slight hail"),
            (99, "Thunderstorm with heavy hail"),
        ];
        for (code, description) in table {
            assert_eq!(WeatherInfo::classify(code).description, description);
        }
    }

    #[test]
    fn test_unknown_codes_hit_fallback() {
        for code in [-1, 4, 42, 100, 999, i32::MIN, i32::MAX] {
            let info = WeatherInfo::classify(code);
            assert_eq!(info.description, "Unknown");
            assert_eq!(info.icon, "cloud");
        }
    }

    #[test]
    fn test_showers_share_rain_icon() {
        assert_eq!(WeatherInfo::classify(80).icon, "cloud_rain");
        assert_eq!(WeatherInfo::classify(61).icon, "cloud_rain");
    }
}
