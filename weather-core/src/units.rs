//! Unit conversion and display formatting.
//!
//! The data model stores exactly one canonical unit per quantity (Celsius,
//! kph); everything here is pure derivation for presentation.

/// Temperature display unit. Presentation-only and session-local; the stored
/// value is always Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn toggle(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }
}

/// Convert m/s (the forecast service's wind unit) to kph at ingestion time.
pub fn ms_to_kph(ms: f64) -> f64 {
    ms * 3.6
}

/// Render a stored-Celsius temperature in the requested unit, rounded to the
/// nearest whole degree. Rounding applies to the display string only; the
/// stored value is never changed.
pub fn format_temperature(celsius: f64, unit: Unit) -> String {
    match unit {
        Unit::Celsius => format!("{}°C", celsius.round() as i64),
        Unit::Fahrenheit => format!("{}°F", (celsius * 9.0 / 5.0 + 32.0).round() as i64),
    }
}

pub fn format_humidity(humidity: f64) -> String {
    format!("{}%", humidity.round() as i64)
}

/// Wind is always displayed in its stored unit.
pub fn format_wind(wind_kph: f64) -> String {
    format!("{} kph", wind_kph.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_to_fahrenheit_round_trip() {
        assert_eq!(format_temperature(20.0, Unit::Celsius), "20°C");
        assert_eq!(format_temperature(20.0, Unit::Fahrenheit), "68°F");
        // toggling back re-derives the identical string, no drift
        let unit = Unit::Celsius.toggle().toggle();
        assert_eq!(unit, Unit::Celsius);
        assert_eq!(format_temperature(20.0, unit), "20°C");
    }

    #[test]
    fn display_rounds_to_nearest_whole_degree() {
        assert_eq!(format_temperature(18.3, Unit::Celsius), "18°C");
        assert_eq!(format_temperature(18.6, Unit::Celsius), "19°C");
        assert_eq!(format_temperature(-0.4, Unit::Celsius), "0°C");
    }

    #[test]
    fn wind_normalizes_from_ms() {
        assert_eq!(ms_to_kph(10.0), 36.0);
        assert_eq!(ms_to_kph(0.0), 0.0);
    }

    #[test]
    fn humidity_and_wind_keep_their_stored_units() {
        assert_eq!(format_humidity(64.4), "64%");
        assert_eq!(format_wind(14.4), "14 kph");
    }
}
