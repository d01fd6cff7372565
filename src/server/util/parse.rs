//! Parsing of raw column values from the imported race data.
//!
//! The source dataset marks missing values with the literal `\N`. Numeric columns that
//! can hold the marker are stored as text and converted here; anything that is not a
//! clean integer is treated as absent rather than zero.

/// Missing-value marker used by the imported dataset.
pub const MISSING_VALUE: &str = "\\N";

/// Parses an integer from a raw text column.
///
/// # Arguments
/// - `raw` - The stored text, if any
///
/// # Returns
/// - `Some(i64)` - The value parsed as an integer (surrounding whitespace ignored)
/// - `None` - NULL, empty, the `\N` marker, or any non-integer text
pub fn parse_optional_int(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if raw.is_empty() || raw == MISSING_VALUE {
        return None;
    }

    raw.parse::<i64>().ok()
}

/// Normalizes a display string, turning the missing-value marker into `None`.
///
/// # Arguments
/// - `raw` - The stored text, if any
///
/// # Returns
/// - `Some(String)` - The original text when it carries a value
/// - `None` - NULL, blank, or the `\N` marker
pub fn present_text(raw: Option<String>) -> Option<String> {
    raw.filter(|value| {
        let trimmed = value.trim();
        !trimmed.is_empty() && trimmed != MISSING_VALUE
    })
}

/// Parses a lap time display string such as `1:26.202` into milliseconds.
///
/// Accepts `M:SS.mmm` and plain `SS.mmm`; the fractional part may have one to three
/// digits.
///
/// # Returns
/// - `Some(i64)` - The time in milliseconds
/// - `None` - The text is not a lap time
pub fn parse_lap_time(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (minutes, rest) = match raw.split_once(':') {
        Some((minutes, rest)) => (minutes.parse::<i64>().ok()?, rest),
        None => (0, raw),
    };
    let (seconds, fraction) = rest.split_once('.').unwrap_or((rest, "0"));

    if seconds.is_empty() || fraction.is_empty() || fraction.len() > 3 {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let seconds = seconds.parse::<i64>().ok()?;
    let millis = fraction.parse::<i64>().ok()? * 10_i64.pow(3 - fraction.len() as u32);

    if minutes < 0 || seconds < 0 || (minutes > 0 && seconds >= 60) {
        return None;
    }

    minutes
        .checked_mul(60_000)?
        .checked_add(seconds.checked_mul(1_000)?)?
        .checked_add(millis)
}
