//! Mock weather data source.
//!
//! Stands in for a real weather API client: produces a randomized
//! canonical-unit bundle for a city after a simulated fetch delay. A
//! real provider would slot in behind the same `fetch` shape.

use std::time::Duration;

use chrono::{Days, Local};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{CurrentConditions, ForecastDay, WeatherBundle, WeatherError};

const CONDITION_LABELS: [&str; 4] = ["Sunny", "Cloudy", "Rainy", "Partly Cloudy"];
const FORECAST_DAYS: u64 = 5;

/// Randomized weather source with configurable simulated latency
#[derive(Debug, Clone, Default)]
pub struct MockWeatherSource {
    delay: Duration,
}

impl MockWeatherSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated network latency applied to every fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Produce a weather bundle for a city.
    ///
    /// Output always honors the source contract: celsius temperatures,
    /// humidity within 0-100, non-negative wind, and exactly five
    /// forecast days starting tomorrow.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::EmptyCity`] when the city name is empty
    /// or whitespace-only.
    pub async fn fetch(&self, city: &str) -> Result<WeatherBundle, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut rng = rand::thread_rng();

        let current = CurrentConditions {
            location: city.to_string(),
            temperature_c: f64::from(rng.gen_range(10..40)),
            condition: random_condition(&mut rng),
            humidity_pct: rng.gen_range(30..70),
            wind_speed_kph: f64::from(rng.gen_range(5..25)),
            feels_like_c: f64::from(rng.gen_range(12..42)),
        };

        let today = Local::now().date_naive();
        let forecast = (1..=FORECAST_DAYS)
            .map(|offset| {
                let date = today.checked_add_days(Days::new(offset)).unwrap_or(today);
                ForecastDay {
                    date: date.format("%a, %b %-d").to_string(),
                    high_c: f64::from(rng.gen_range(15..40)),
                    low_c: f64::from(rng.gen_range(5..20)),
                    condition: random_condition(&mut rng),
                }
            })
            .collect();

        tracing::debug!("Generated weather bundle for {}", city);

        Ok(WeatherBundle { current, forecast })
    }
}

fn random_condition<R: Rng>(rng: &mut R) -> String {
    CONDITION_LABELS
        .choose(rng)
        .copied()
        .unwrap_or("Sunny")
        .to_string()
}
