use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors for user-supplied values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency must be a 3-letter ISO code: '{value}'")]
    InvalidCurrency { value: String },

    #[error("day count must be at least 1")]
    ZeroDays,

    #[error("utc offset must look like +03:00: '{value}'")]
    InvalidUtcOffset { value: String },
}

/// Charset detection or conversion failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown charset label '{label}'")]
    UnknownCharset { label: String },

    #[error("body is not valid {encoding}")]
    Malformed { encoding: &'static str },
}

/// Failure while downloading the feed. The first one aborts the whole fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to resolve feed timezone: {0}")]
    Timezone(#[source] ValidationError),

    #[error("request for {date} failed: {source}")]
    Transport {
        date: String,
        #[source]
        source: HttpError,
    },

    #[error("request for {date} returned status {status}")]
    Status { date: String, status: u16 },

    #[error("response for {date} could not be decoded: {source}")]
    Decode {
        date: String,
        #[source]
        source: DecodeError,
    },

    #[error("response for {date} is not a rate sheet: {source}")]
    Xml {
        date: String,
        #[source]
        source: quick_xml::DeError,
    },
}

/// A raw rate string that is not a comma-decimal number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{raw}' is not a comma-decimal number")]
pub struct ParseRateError {
    pub raw: String,
}

/// Failure while flattening rate sheets into records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid rate for {currency} on {date}: {source}")]
    InvalidRate {
        date: String,
        currency: String,
        #[source]
        source: ParseRateError,
    },

    #[error("invalid nominal '{raw}' for {currency} on {date}")]
    InvalidNominal {
        date: String,
        currency: String,
        raw: String,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    #[error("no rate records to aggregate")]
    NoRecords,
}

/// Top-level error type for the report pipeline.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}
