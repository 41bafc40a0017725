//! Temperature conversion between the canonical celsius representation
//! and display units.

use crate::types::TemperatureUnit;

/// Convert a temperature between units.
///
/// Cross-unit conversions round to the nearest whole degree with
/// round-half-away-from-zero semantics (`f64::round`). Same-unit
/// conversion returns the value unchanged, without rounding. Total over
/// all real inputs; no error conditions.
pub fn convert(temp: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
            (temp * 9.0 / 5.0 + 32.0).round()
        }
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
            ((temp - 32.0) * 5.0 / 9.0).round()
        }
        _ => temp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::{Celsius, Fahrenheit};

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(convert(21.4, Celsius, Celsius), 21.4);
        assert_eq!(convert(70.6, Fahrenheit, Fahrenheit), 70.6);
        assert_eq!(convert(-12.0, Celsius, Celsius), -12.0);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(convert(0.0, Celsius, Fahrenheit), 32.0);
        assert_eq!(convert(20.0, Celsius, Fahrenheit), 68.0);
        assert_eq!(convert(100.0, Celsius, Fahrenheit), 212.0);
        assert_eq!(convert(-10.0, Celsius, Fahrenheit), 14.0);
        assert_eq!(convert(-40.0, Celsius, Fahrenheit), -40.0);
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(convert(32.0, Fahrenheit, Celsius), 0.0);
        assert_eq!(convert(68.0, Fahrenheit, Celsius), 20.0);
        assert_eq!(convert(100.0, Fahrenheit, Celsius), 38.0);
        assert_eq!(convert(-40.0, Fahrenheit, Celsius), -40.0);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 20.3C = 68.54F
        assert_eq!(convert(20.3, Celsius, Fahrenheit), 69.0);
        // 2.5C = 36.5F, exact halves round away from zero
        assert_eq!(convert(2.5, Celsius, Fahrenheit), 37.0);
        // -22.5C = -8.5F
        assert_eq!(convert(-22.5, Celsius, Fahrenheit), -9.0);
    }

    #[test]
    fn test_round_trip_within_one_degree() {
        let mut c = -50.0;
        while c <= 50.0 {
            let back = convert(convert(c, Celsius, Fahrenheit), Fahrenheit, Celsius);
            assert!(
                (back - c).abs() <= 1.0,
                "round trip of {c} drifted to {back}"
            );
            c += 1.0;
        }
    }
}
