//! Finishing and running positions.

use crate::server::util::parse::parse_optional_int;

/// A position in a race classification or on a lap.
///
/// Raw positions come from text columns that may hold the `\N` marker, non-numeric
/// status codes, or other malformed values. Only integers of 1 or more count as a
/// classified position; everything else is `Unclassified` and is never treated as
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Classified(i32),
    Unclassified,
}

impl Position {
    /// Parses a raw position column.
    ///
    /// # Arguments
    /// - `raw` - The stored text, if any
    ///
    /// # Returns
    /// - `Position::Classified(n)` - The text is an integer `n >= 1`
    /// - `Position::Unclassified` - Anything else
    pub fn parse(raw: Option<&str>) -> Self {
        match parse_optional_int(raw).and_then(|value| i32::try_from(value).ok()) {
            Some(value) if value >= 1 => Self::Classified(value),
            _ => Self::Unclassified,
        }
    }

    /// Numeric value of a classified position.
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Classified(value) => Some(*value),
            Self::Unclassified => None,
        }
    }

    /// Whether this is the race winner's position (value equal to 1).
    pub fn is_winner(&self) -> bool {
        matches!(self, Self::Classified(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_classified_positions() {
        assert_eq!(Position::parse(Some("1")), Position::Classified(1));
        assert_eq!(Position::parse(Some("20")), Position::Classified(20));
        assert_eq!(Position::parse(Some(" 3 ")), Position::Classified(3));
    }

    #[test]
    fn marker_and_status_codes_are_unclassified() {
        assert_eq!(Position::parse(None), Position::Unclassified);
        assert_eq!(Position::parse(Some("\\N")), Position::Unclassified);
        assert_eq!(Position::parse(Some("R")), Position::Unclassified);
        assert_eq!(Position::parse(Some("")), Position::Unclassified);
    }

    #[test]
    fn out_of_range_values_are_unclassified() {
        assert_eq!(Position::parse(Some("0")), Position::Unclassified);
        assert_eq!(Position::parse(Some("-1")), Position::Unclassified);
        assert_eq!(Position::parse(Some("99999999999")), Position::Unclassified);
    }

    #[test]
    fn compares_numerically_not_textually() {
        // "10" sorts before "2" as text but is a lower finishing position.
        let tenth = Position::parse(Some("10"));
        let second = Position::parse(Some("2"));
        assert!(tenth.value() > second.value());

        assert!(Position::parse(Some("01")).is_winner());
        assert!(!Position::parse(Some("10")).is_winner());
        assert!(!Position::Unclassified.is_winner());
    }
}
