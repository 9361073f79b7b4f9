//! Temperature display units inferred from the destination text

/// Label used for historical weather records without a typical range
pub const HISTORICAL_AVERAGE: &str = "Historical average";

/// Prefix for temperatures that come from historical data rather than a forecast
pub const TYPICAL_PREFIX: &str = "Typical:";

/// Whether a destination reads like a US location.
///
/// Matches "usa" / "united states" anywhere (case-insensitive) or a trailing
/// `", XX"` state code.
#[must_use]
pub fn is_us_destination(destination: &str) -> bool {
    let lowered = destination.to_lowercase();
    if lowered.contains("usa") || lowered.contains("united states") {
        return true;
    }
    has_state_code_suffix(destination)
}

fn has_state_code_suffix(destination: &str) -> bool {
    let trimmed = destination.trim_end();
    let Some(code_start) = trimmed.len().checked_sub(2) else {
        return false;
    };
    let Some(code) = trimmed.get(code_start..) else {
        return false;
    };
    if !code.chars().all(|c| c.is_ascii_uppercase()) {
        return false;
    }

    trimmed[..code_start].trim_end().ends_with(',')
}

/// `Math.round` semantics: halves round towards positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Render a Celsius reading in the units a traveller to `destination` expects
#[must_use]
pub fn display_temperature(celsius: f64, destination: &str) -> String {
    if is_us_destination(destination) {
        format!("{}°F", round_half_up(celsius_to_fahrenheit(celsius)))
    } else {
        format!("{}°C", round_half_up(celsius))
    }
}

/// Rendered reading plus the note shown under it.
///
/// Historical records get the "Typical:" prefix and either their range text
/// or the generic historical label.
#[must_use]
pub fn display_day_temperature(
    celsius: f64,
    destination: &str,
    historical: bool,
    typical_range: Option<&str>,
) -> (String, Option<String>) {
    let reading = display_temperature(celsius, destination);
    if !historical {
        return (reading, None);
    }

    let note = typical_range
        .filter(|range| !range.trim().is_empty())
        .map_or_else(|| HISTORICAL_AVERAGE.to_string(), str::to_string);
    (format!("{TYPICAL_PREFIX} {reading}"), Some(note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("New York, NY", true)]
    #[case("Austin,TX", true)]
    #[case("Miami, FL ", true)]
    #[case("Chicago, USA", true)]
    #[case("Seattle, United States", true)]
    #[case("Paris, France", false)]
    #[case("Tokyo", false)]
    #[case("London, uk", false)]
    #[case("NY", false)]
    #[case("Berlin DE", false)]
    fn test_us_destination_detection(#[case] destination: &str, #[case] expected: bool) {
        assert_eq!(is_us_destination(destination), expected);
    }

    #[rstest]
    #[case(20.0, "Paris, France", "20°C")]
    #[case(20.0, "New York, NY", "68°F")]
    #[case(0.0, "Boston, MA", "32°F")]
    #[case(0.0, "Oslo, Norway", "0°C")]
    #[case(21.5, "Rome, Italy", "22°C")]
    #[case(-2.5, "Reykjavik, Iceland", "-2°C")]
    #[case(-40.0, "Fairbanks, AK", "-40°F")]
    fn test_display_temperature(
        #[case] celsius: f64,
        #[case] destination: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(display_temperature(celsius, destination), expected);
    }

    #[test]
    fn test_round_half_up_matches_math_round() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.6), -1);
        assert_eq!(round_half_up(67.99), 68);
    }

    #[test]
    fn test_historical_reading_uses_range() {
        let (reading, note) =
            display_day_temperature(18.0, "Lisbon, Portugal", true, Some("15-22°C"));
        assert_eq!(reading, "Typical: 18°C");
        assert_eq!(note.as_deref(), Some("15-22°C"));
    }

    #[test]
    fn test_historical_reading_without_range() {
        let (reading, note) = display_day_temperature(25.0, "Denver, CO", true, None);
        assert_eq!(reading, "Typical: 77°F");
        assert_eq!(note.as_deref(), Some(HISTORICAL_AVERAGE));
    }

    #[test]
    fn test_forecast_reading_has_no_note() {
        let (reading, note) = display_day_temperature(12.0, "Dublin, Ireland", false, Some("x"));
        assert_eq!(reading, "12°C");
        assert!(note.is_none());
    }
}
