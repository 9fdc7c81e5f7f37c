//! Match clock parsing.
//!
//! Canonical timestamps are fixed-width `HH:MM:SS.fff` strings. Only the
//! minute (characters 3-4) and second (characters 6-7) columns are read; the
//! hour column and the fraction are ignored.

use std::fmt;

const MINUTES: std::ops::Range<usize> = 3..5;
const SECONDS: std::ops::Range<usize> = 6..8;

/// Minutes and seconds of elapsed playing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MatchClock {
    pub minutes: u32,
    pub seconds: u32,
}

impl MatchClock {
    /// Parse the minute and second columns of a canonical timestamp.
    ///
    /// Returns `None` when the string does not follow the fixed layout.
    pub fn parse(timestamp: &str) -> Option<Self> {
        let bytes = timestamp.as_bytes();
        if bytes.len() < SECONDS.end || bytes[2] != b':' || bytes[5] != b':' {
            return None;
        }
        Some(Self { minutes: two_digits(bytes, MINUTES)?, seconds: two_digits(bytes, SECONDS)? })
    }

    pub fn from_elapsed(total_seconds: u32) -> Self {
        Self { minutes: total_seconds / 60, seconds: total_seconds % 60 }
    }

    /// `60 * minutes + seconds`.
    pub fn elapsed_seconds(&self) -> u32 {
        60 * self.minutes + self.seconds
    }
}

fn two_digits(bytes: &[u8], range: std::ops::Range<usize>) -> Option<u32> {
    let digits = &bytes[range];
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(digits.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0')))
}

/// Elapsed seconds of a canonical timestamp, or `None` if out of layout.
pub fn elapsed_seconds(timestamp: &str) -> Option<u32> {
    MatchClock::parse(timestamp).map(|clock| clock.elapsed_seconds())
}

/// Renders as `MM'SS`, the label used next to commentary lines.
impl fmt::Display for MatchClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}'{:02}", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reads_fixed_columns() {
        let clock = MatchClock::parse("00:12:34.567").unwrap();
        assert_eq!(clock, MatchClock { minutes: 12, seconds: 34 });
        assert_eq!(clock.elapsed_seconds(), 754);
    }

    #[test]
    fn test_hour_and_fraction_are_ignored() {
        assert_eq!(elapsed_seconds("01:00:05.000"), Some(5));
        assert_eq!(elapsed_seconds("00:00:05.999"), Some(5));
        assert_eq!(elapsed_seconds("00:00:05"), Some(5));
    }

    #[test]
    fn test_out_of_layout_timestamps_are_rejected() {
        assert_eq!(MatchClock::parse(""), None);
        assert_eq!(MatchClock::parse("0:00:05.000"), None);
        assert_eq!(MatchClock::parse("00-00-05.000"), None);
        assert_eq!(MatchClock::parse("00:0a:05.000"), None);
        assert_eq!(MatchClock::parse("00:+1:05.000"), None);
        assert_eq!(MatchClock::parse("00:00:5"), None);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(MatchClock::from_elapsed(0).to_string(), "00'00");
        assert_eq!(MatchClock::from_elapsed(80).to_string(), "01'20");
        assert_eq!(MatchClock::from_elapsed(5999).to_string(), "99'59");
    }

    #[test]
    fn test_from_elapsed_roundtrips_through_seconds() {
        for secs in [0, 59, 60, 61, 2700, 5400] {
            assert_eq!(MatchClock::from_elapsed(secs).elapsed_seconds(), secs);
        }
    }
}
