//! Rule-based weather alerts.
//!
//! A fixed, ordered table of independent threshold rules is evaluated
//! against the canonical (celsius/kph/percent) snapshot. Thresholds are
//! fixed in canonical units, so the engine must be handed the
//! pre-conversion snapshot; firing behavior never depends on the user's
//! display unit. Result ordering matches the table, and an empty result
//! is a normal outcome, not an error.

use serde::Serialize;

use crate::types::CurrentConditions;

/// Temperature above which the extreme-heat alert fires, in celsius.
pub const EXTREME_HEAT_C: f64 = 35.0;
/// Temperature below which the freezing alert fires, in celsius.
pub const FREEZING_C: f64 = 0.0;
/// Wind speed above which the strong-wind alert fires, in kph.
pub const STRONG_WIND_KPH: f64 = 25.0;
/// Humidity above which the high-humidity alert fires, in percent.
pub const HIGH_HUMIDITY_PCT: u8 = 80;

/// Alert priority tier, used only for presentation styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Which aspect of the conditions an alert concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Temperature,
    Wind,
    Humidity,
    General,
}

/// A single weather warning, created fresh on every evaluation pass
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: String,
    pub category: AlertCategory,
    pub message: String,
    pub severity: Severity,
}

struct Rule {
    id: &'static str,
    category: AlertCategory,
    severity: Severity,
    message: &'static str,
    fires: fn(&CurrentConditions) -> bool,
}

fn extreme_heat(current: &CurrentConditions) -> bool {
    current.temperature_c > EXTREME_HEAT_C
}

fn freezing(current: &CurrentConditions) -> bool {
    current.temperature_c < FREEZING_C
}

fn strong_wind(current: &CurrentConditions) -> bool {
    current.wind_speed_kph > STRONG_WIND_KPH
}

fn high_humidity(current: &CurrentConditions) -> bool {
    current.humidity_pct > HIGH_HUMIDITY_PCT
}

fn rain_expected(current: &CurrentConditions) -> bool {
    current.condition.to_lowercase().contains("rain")
}

// Evaluation (and result) order is the order of this table. The two
// temperature rules are mutually exclusive by construction.
const RULES: [Rule; 5] = [
    Rule {
        id: "temp-high",
        category: AlertCategory::Temperature,
        severity: Severity::High,
        message: "Extremely hot weather! Stay hydrated and avoid prolonged sun exposure.",
        fires: extreme_heat,
    },
    Rule {
        id: "temp-low",
        category: AlertCategory::Temperature,
        severity: Severity::High,
        message: "Freezing temperature! Dress warmly and be careful on roads.",
        fires: freezing,
    },
    Rule {
        id: "wind-high",
        category: AlertCategory::Wind,
        severity: Severity::Medium,
        message: "Strong winds expected. Secure loose objects and drive carefully.",
        fires: strong_wind,
    },
    Rule {
        id: "humidity-high",
        category: AlertCategory::Humidity,
        severity: Severity::Low,
        message: "High humidity levels. Stay cool and drink plenty of water.",
        fires: high_humidity,
    },
    Rule {
        id: "rain-alert",
        category: AlertCategory::General,
        severity: Severity::Medium,
        message: "Rain expected. Carry an umbrella and drive safely.",
        fires: rain_expected,
    },
];

/// Evaluate all alert rules against a canonical snapshot.
///
/// Pure, idempotent, and total: every rule is checked independently,
/// multiple alerts may fire at once, and zero alerts is a valid result.
pub fn evaluate(current: &CurrentConditions) -> Vec<Alert> {
    RULES
        .iter()
        .filter(|rule| (rule.fires)(current))
        .map(|rule| Alert {
            id: rule.id.to_string(),
            category: rule.category,
            message: rule.message.to_string(),
            severity: rule.severity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(temperature_c: f64, wind: f64, humidity: u8, condition: &str) -> CurrentConditions {
        CurrentConditions {
            location: "Testville".to_string(),
            temperature_c,
            condition: condition.to_string(),
            humidity_pct: humidity,
            wind_speed_kph: wind,
            feels_like_c: temperature_c,
        }
    }

    #[test]
    fn test_extreme_heat_fires_alone() {
        let alerts = evaluate(&conditions(40.0, 10.0, 50, "Sunny"));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "temp-high");
        assert_eq!(alerts[0].category, AlertCategory::Temperature);
        assert_eq!(alerts[0].severity, Severity::High);
    }

    #[test]
    fn test_freezing_fires_alone_and_never_with_heat() {
        let alerts = evaluate(&conditions(-5.0, 10.0, 50, "Cloudy"));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "temp-low");
        assert_eq!(alerts[0].severity, Severity::High);
        assert!(alerts.iter().all(|a| a.id != "temp-high"));
    }

    #[test]
    fn test_multiple_alerts_in_rule_order() {
        let alerts = evaluate(&conditions(20.0, 30.0, 90, "Rainy"));
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].category, AlertCategory::Wind);
        assert_eq!(alerts[0].severity, Severity::Medium);
        assert_eq!(alerts[1].category, AlertCategory::Humidity);
        assert_eq!(alerts[1].severity, Severity::Low);
        assert_eq!(alerts[2].category, AlertCategory::General);
        assert_eq!(alerts[2].severity, Severity::Medium);
        assert!(alerts.iter().all(|a| a.category != AlertCategory::Temperature));
    }

    #[test]
    fn test_calm_conditions_yield_no_alerts() {
        let alerts = evaluate(&conditions(20.0, 10.0, 50, "Sunny"));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_thresholds_are_exclusive_at_the_boundary() {
        assert!(evaluate(&conditions(35.0, 25.0, 80, "Sunny")).is_empty());
        assert!(evaluate(&conditions(0.0, 10.0, 50, "Cloudy")).is_empty());
    }

    #[test]
    fn test_rain_match_is_case_insensitive_substring() {
        assert_eq!(evaluate(&conditions(20.0, 10.0, 50, "RAINY")).len(), 1);
        assert_eq!(evaluate(&conditions(20.0, 10.0, 50, "Light rain")).len(), 1);
        assert_eq!(
            evaluate(&conditions(20.0, 10.0, 50, "Light rain"))[0].id,
            "rain-alert"
        );
        assert!(evaluate(&conditions(20.0, 10.0, 50, "Drizzle")).is_empty());
    }

    #[test]
    fn test_all_rules_can_fire_together() {
        let alerts = evaluate(&conditions(40.0, 30.0, 90, "Rainy"));
        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["temp-high", "wind-high", "humidity-high", "rain-alert"]);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let input = conditions(40.0, 30.0, 90, "Rainy");
        let first = evaluate(&input);
        let second = evaluate(&input);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.message, b.message);
        }
    }
}
