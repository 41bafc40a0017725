use std::time::Duration;

use anyhow::Result;
use skycast_core::{FilePreferencesStore, PreferencesManager};
use skycast_weather::{alerts, derive, MockWeatherSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    skycast_core::init()?;

    let store = FilePreferencesStore::default_location()?;
    let prefs = PreferencesManager::new(Box::new(store));
    let unit = prefs.preferences().temperature_unit;

    let city = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "New York".to_string());

    let source = MockWeatherSource::new().with_delay(Duration::from_millis(300));
    let bundle = match source.fetch(&city).await {
        Ok(bundle) => bundle,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(());
        }
    };

    tracing::info!("Weather data loaded for {}", city);

    // Alerts are evaluated on the canonical snapshot before display
    // conversion so thresholds stay unit-independent.
    let alerts = alerts::evaluate(&bundle.current);
    let (current, forecast) = derive::derive(&bundle.current, &bundle.forecast, unit);

    println!("{}", current.location);
    println!(
        "  {}{}  {}  (feels like {}{})",
        current.temperature,
        unit.symbol(),
        current.condition,
        current.feels_like,
        unit.symbol()
    );
    println!(
        "  Humidity {}%  Wind {} km/h",
        current.humidity_pct, current.wind_speed_kph
    );

    println!("\n5-Day Forecast");
    for day in &forecast {
        println!(
            "  {}  {}  {}{} / {}{}",
            day.date,
            day.condition,
            day.high,
            unit.symbol(),
            day.low,
            unit.symbol()
        );
    }

    if !alerts.is_empty() {
        println!("\nWeather Alerts");
        for alert in &alerts {
            println!("  [{:?}] {}", alert.severity, alert.message);
        }
    }

    Ok(())
}
