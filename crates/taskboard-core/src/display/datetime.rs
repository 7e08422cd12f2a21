//! DateTime display utilities.
//!
//! Wrapper types that format timestamps in the system time zone and due
//! dates in a short human-readable form.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a due date as e.g. `Jan 5, 2024`.
pub struct DueDate<'a>(pub &'a Date);

impl<'a> fmt::Display for DueDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_due_date_format() {
        assert_eq!(DueDate(&date(2024, 1, 5)).to_string(), "Jan 5, 2024");
        assert_eq!(DueDate(&date(2024, 12, 25)).to_string(), "Dec 25, 2024");
    }
}
