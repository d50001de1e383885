use std::num::ParseIntError;

/// Errors raised while configuring or running a search
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid limit `{input}`: expected a non-negative integer")]
    InvalidLimit {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid limit `{0}`: the exponent limit must not be negative")]
    NegativeLimit(String),
    #[error("invalid limit `{0}`: the exponent limit must not exceed 18446744073709551615")]
    LimitTooLarge(String),
    #[error("invalid pace `{0}`: expected a non-negative, finite number of seconds")]
    InvalidPace(String),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
