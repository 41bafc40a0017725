//! Weather domain for Skycast
//!
//! Canonical-unit weather types, display-unit derivation, rule-based
//! alerts, and the mock data source that stands in for a real weather
//! API client.

pub mod alerts;
pub mod convert;
pub mod derive;
pub mod source;
pub mod types;

pub use types::*;
pub use alerts::{Alert, AlertCategory, Severity};
pub use derive::{DisplayForecastDay, DisplaySnapshot};
pub use source::MockWeatherSource;
