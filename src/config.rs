//! Search configuration and validation of user supplied values

use crate::emit::OutputFormat;
use crate::error::{Error, Result};
use std::num::IntErrorKind;
use std::time::Duration;

/// Largest exponent scanned when no limit is given
pub const DEFAULT_LIMIT: u64 = 50;

/// Pause in seconds after each emitted perfect number when no pace is given
pub const DEFAULT_PACE_SECONDS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// inclusive upper bound on the exponent p
    limit: u64,

    /// pause after each emission, zero disables pacing
    pace: Duration,

    format: OutputFormat,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            pace: Duration::from_secs_f64(DEFAULT_PACE_SECONDS),
            format: OutputFormat::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    #[inline]
    pub fn pace(&self) -> Duration {
        self.pace
    }

    #[inline]
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Parse an exponent limit. Negative, fractional and non-numeric input is rejected rather
/// than coerced.
pub fn parse_limit(input: &str) -> Result<u64> {
    let input = input.trim();
    input.parse::<u64>().map_err(|source| match source.kind().clone() {
        IntErrorKind::PosOverflow => Error::LimitTooLarge(input.to_owned()),
        _ if is_negative_integer(input) => Error::NegativeLimit(input.to_owned()),
        _ => Error::InvalidLimit {
            input: input.to_owned(),
            source,
        },
    })
}

/// Parse a pause duration given in (possibly fractional) seconds
pub fn parse_pace(input: &str) -> Result<Duration> {
    let input = input.trim();
    let seconds = input
        .parse::<f64>()
        .map_err(|_| Error::InvalidPace(input.to_owned()))?;
    Duration::try_from_secs_f64(seconds).map_err(|_| Error::InvalidPace(input.to_owned()))
}

fn is_negative_integer(input: &str) -> bool {
    match input.strip_prefix('-') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_test() {
        let config = SearchConfig::default();
        assert_eq!(config.limit(), 50);
        assert_eq!(config.pace(), Duration::from_secs(1));
        assert_eq!(config.format(), OutputFormat::Plain);

        let config = config
            .with_limit(13)
            .with_pace(Duration::ZERO)
            .with_format(OutputFormat::Json);
        assert_eq!(config.limit(), 13);
        assert!(config.pace().is_zero());
        assert_eq!(config.format(), OutputFormat::Json);
    }

    #[test]
    fn parse_limit_test() {
        assert_eq!(parse_limit("0").unwrap(), 0);
        assert_eq!(parse_limit("50").unwrap(), 50);
        assert_eq!(parse_limit(" 13\n").unwrap(), 13);
        assert_eq!(parse_limit("18446744073709551615").unwrap(), u64::MAX);

        assert!(matches!(parse_limit("-5"), Err(Error::NegativeLimit(s)) if s == "-5"));
        assert!(matches!(
            parse_limit("18446744073709551616"),
            Err(Error::LimitTooLarge(_))
        ));
        assert!(matches!(
            parse_limit("10000000000000000000000"),
            Err(Error::LimitTooLarge(_))
        ));
        for input in ["", "abc", "5.5", "1e3", "-", "--5", "0x10"] {
            assert!(
                matches!(parse_limit(input), Err(Error::InvalidLimit { .. })),
                "parse_limit on {:?}",
                input
            );
        }
    }

    #[test]
    fn parse_pace_test() {
        assert_eq!(parse_pace("1").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_pace("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_pace("0.25").unwrap(), Duration::from_millis(250));

        for input in ["-1", "NaN", "inf", "soon", ""] {
            assert!(
                matches!(parse_pace(input), Err(Error::InvalidPace(_))),
                "parse_pace on {:?}",
                input
            );
        }
    }

    #[test]
    fn error_message_test() {
        let err = parse_limit("-3").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid limit `-3`: the exponent limit must not be negative"
        );
        let err = parse_limit("ten").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid limit `ten`: expected a non-negative integer"
        );
    }
}
