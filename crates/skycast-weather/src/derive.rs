//! Display derivation: convert a canonical weather snapshot and its
//! forecast into the user's chosen unit.
//!
//! Derived values are never persisted; callers rebuild them on every
//! render pass.

use serde::Serialize;

use crate::convert::convert;
use crate::types::{CurrentConditions, ForecastDay, TemperatureUnit};

/// Current conditions with temperatures in the display unit
#[derive(Debug, Clone, Serialize)]
pub struct DisplaySnapshot {
    pub location: String,
    pub temperature: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_speed_kph: f64,
    pub feels_like: f64,
    pub unit: TemperatureUnit,
}

/// Forecast entry with temperatures in the display unit
#[derive(Debug, Clone, Serialize)]
pub struct DisplayForecastDay {
    pub date: String,
    pub high: f64,
    pub low: f64,
    pub condition: String,
}

/// Derive a display-ready snapshot and forecast from canonical data.
///
/// Only temperature fields are converted; everything else passes
/// through unchanged, including condition labels the pipeline does not
/// recognize. The output forecast preserves the length and ordering of
/// the input. Pure; with `TemperatureUnit::Celsius` the temperature
/// fields are identical to the input.
pub fn derive(
    current: &CurrentConditions,
    forecast: &[ForecastDay],
    unit: TemperatureUnit,
) -> (DisplaySnapshot, Vec<DisplayForecastDay>) {
    let snapshot = DisplaySnapshot {
        location: current.location.clone(),
        temperature: convert(current.temperature_c, TemperatureUnit::Celsius, unit),
        condition: current.condition.clone(),
        humidity_pct: current.humidity_pct,
        wind_speed_kph: current.wind_speed_kph,
        feels_like: convert(current.feels_like_c, TemperatureUnit::Celsius, unit),
        unit,
    };

    let days = forecast
        .iter()
        .map(|day| DisplayForecastDay {
            date: day.date.clone(),
            high: convert(day.high_c, TemperatureUnit::Celsius, unit),
            low: convert(day.low_c, TemperatureUnit::Celsius, unit),
            condition: day.condition.clone(),
        })
        .collect();

    (snapshot, days)
}
