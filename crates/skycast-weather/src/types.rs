use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Display suffix for temperatures in this unit
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Weather condition categories mapped from free-form condition labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    PartlyCloudy,
}

impl WeatherCondition {
    /// Map a condition label to a category, case-insensitively.
    /// Unknown labels fall back to `Sunny` so presentation never errors
    /// on data the pipeline passed through unvalidated.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "sunny" => Self::Sunny,
            "cloudy" => Self::Cloudy,
            "rainy" => Self::Rainy,
            "partly cloudy" => Self::PartlyCloudy,
            _ => Self::Sunny,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::PartlyCloudy => "Partly Cloudy",
        }
    }

    /// Get icon name for the presentation layer
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Sunny => "sun",
            Self::Cloudy => "cloud",
            Self::Rainy => "cloud_rain",
            Self::PartlyCloudy => "cloud_sun",
        }
    }
}

/// Current conditions for a city.
///
/// Always canonical: celsius temperatures, wind in kph, humidity in
/// percent. The condition label is carried opaquely; the pipeline never
/// validates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_speed_kph: f64,
    pub feels_like_c: f64,
}

/// Daily forecast entry in canonical celsius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub high_c: f64,
    pub low_c: f64,
    pub condition: String,
}

/// Complete weather data bundle produced by a data source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

/// Weather data source errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("City name is empty")]
    EmptyCity,
}

impl WeatherError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::EmptyCity => "Please enter a city name.",
        }
    }
}
