//! Mapping from WMO weather codes to display text and icon tokens.

/// Human description of a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub text: &'static str,
    pub icon: &'static str,
}

/// Fallback for any code outside the known table.
pub const UNKNOWN: Condition = Condition {
    text: "Unknown",
    icon: "❔",
};

/// Map a weather code to display text and an icon token.
///
/// Total over all codes: anything outside the table yields [`UNKNOWN`],
/// never an error.
pub fn describe(code: u16) -> Condition {
    let (text, icon) = match code {
        0 => ("Clear sky", "☀️"),
        1 => ("Mainly clear", "🌤️"),
        2 => ("Partly cloudy", "⛅"),
        3 => ("Overcast", "☁️"),
        45 => ("Fog", "🌫️"),
        48 => ("Depositing rime fog", "🌫️"),
        51 => ("Light drizzle", "🌦️"),
        53 => ("Drizzle", "🌦️"),
        55 => ("Dense drizzle", "🌧️"),
        61 => ("Slight rain", "🌦️"),
        63 => ("Rain", "🌧️"),
        65 => ("Heavy rain", "🌧️"),
        71 => ("Slight snow", "🌨️"),
        73 => ("Snow", "🌨️"),
        75 => ("Heavy snow", "❄️"),
        80 => ("Rain showers", "🌦️"),
        81 => ("Heavy showers", "🌧️"),
        82 => ("Violent showers", "⛈️"),
        95 => ("Thunderstorm", "⛈️"),
        96 => ("Thunderstorm w/ hail", "⛈️"),
        99 => ("Severe thunderstorm", "⛈️"),
        _ => return UNKNOWN,
    };
    Condition { text, icon }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_their_labels() {
        assert_eq!(describe(0).text, "Clear sky");
        assert_eq!(describe(2).text, "Partly cloudy");
        assert_eq!(describe(63).text, "Rain");
        assert_eq!(describe(95).icon, "⛈️");
    }

    #[test]
    fn unknown_codes_get_the_fixed_fallback() {
        for code in [4, 42, 100, 9999, u16::MAX] {
            assert_eq!(describe(code), UNKNOWN);
        }
    }
}
