//! Display formatting for times and gaps in summary payloads.

/// Placeholder shown when a lap time is not available.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats a lap time in milliseconds as `M:SS.mmm`.
///
/// # Returns
/// - `"M:SS.mmm"` - e.g. `89_400` becomes `"1:29.400"`
/// - `"N/A"` - No time was recorded
pub fn format_lap_time(milliseconds: Option<i64>) -> String {
    match milliseconds {
        Some(ms) if ms >= 0 => {
            let minutes = ms / 60_000;
            let seconds = (ms % 60_000) / 1_000;
            let millis = ms % 1_000;
            format!("{}:{:02}.{:03}", minutes, seconds, millis)
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a time difference in milliseconds as `+S.mmms`.
///
/// Only strictly positive differences are shown; zero or negative differences render
/// as an empty string.
pub fn format_gap(milliseconds: i64) -> String {
    if milliseconds <= 0 {
        return String::new();
    }

    format!("+{}.{:03}s", milliseconds / 1_000, milliseconds % 1_000)
}

/// Rounds a value half away from zero to the given number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lap_times_with_padding() {
        assert_eq!(format_lap_time(Some(89_400)), "1:29.400");
        assert_eq!(format_lap_time(Some(5_007)), "0:05.007");
        assert_eq!(format_lap_time(Some(600_000)), "10:00.000");
    }

    #[test]
    fn missing_lap_time_is_not_available() {
        assert_eq!(format_lap_time(None), "N/A");
        assert_eq!(format_lap_time(Some(-1)), "N/A");
    }

    #[test]
    fn formats_positive_gaps_only() {
        assert_eq!(format_gap(807), "+0.807s");
        assert_eq!(format_gap(61_005), "+61.005s");
        assert_eq!(format_gap(0), "");
        assert_eq!(format_gap(-250), "");
    }

    #[test]
    fn rounds_to_places() {
        assert_eq!(round_to(1.0 / 3.0, 2), 0.33);
        assert_eq!(round_to(2.675_1, 2), 2.68);
        assert_eq!(round_to(1.5, 0), 2.0);
    }
}
