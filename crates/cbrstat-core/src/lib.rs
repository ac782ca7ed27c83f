//! # cbrstat core
//!
//! Fetching, normalization and aggregation of the Central Bank of Russia
//! daily exchange-rate feed.
//!
//! ## Overview
//!
//! The crate is organized as three sequential stages:
//!
//! - **Fetcher** downloads one XML rate sheet per day, walking backward from
//!   today in the feed's timezone
//! - **Normalizer** flattens the sheets into numeric rate records
//! - **Aggregator** reports the maximum, minimum and mean record
//!
//! Every stage returns a `Result`; [`pipeline::build_report`] chains them and
//! stops at the first error.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregator`] | Max/min/mean report over rate records |
//! | [`charset`] | Byte-to-text decoding with charset sniffing |
//! | [`domain`] | Records, reports, currency codes, feed calendar |
//! | [`error`] | Error types for every stage |
//! | [`feed`] | XML rate sheet structures and parser |
//! | [`fetcher`] | Day-by-day feed download |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`normalizer`] | Comma-decimal conversion and record flattening |
//! | [`pipeline`] | Stage driver |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use cbrstat_core::{build_report, FetchConfig, RateFetcher, ReportRequest, ReqwestHttpClient};
//! use time::OffsetDateTime;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = RateFetcher::new(Arc::new(ReqwestHttpClient::new()), FetchConfig::default());
//!     let request = ReportRequest::new(90)?;
//!     let report = build_report(&fetcher, &request, OffsetDateTime::now_utc()).await?;
//!     println!("max {:.2} on {}", report.max.value, report.max.date);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │  RateFetcher    │────▶│ HttpClient       │
//! │                 │     │ (reqwest/script) │
//! └────────┬────────┘     └──────────────────┘
//!          │ bytes        ┌──────────────────┐
//!          ├─────────────▶│ TextDecoder      │
//!          │              └──────────────────┘
//!          ▼
//! ┌─────────────────┐
//! │ RateSheet (XML) │
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ normalize       │────▶│ summarize        │
//! └─────────────────┘     └──────────────────┘
//! ```

pub mod aggregator;
pub mod charset;
pub mod domain;
pub mod error;
pub mod feed;
pub mod fetcher;
pub mod http_client;
pub mod normalizer;
pub mod pipeline;

// Stages
pub use aggregator::summarize;
pub use fetcher::{FetchConfig, RateFetcher, CBR_DAILY_URL, DEFAULT_DAYS, DEFAULT_USER_AGENT};
pub use normalizer::{normalize, parse_rate, select_currency, RateMode};
pub use pipeline::{build_report, ReportRequest};

// Charset decoding
pub use charset::{SniffingDecoder, TextDecoder, Utf8Decoder};

// Domain models
pub use domain::{request_date, CurrencyCode, FeedClock, RateRecord, RateReport, MOSCOW_OFFSET};

// Feed structures
pub use feed::{parse_rate_sheet, RateEntry, RateSheet};

// Error types
pub use error::{
    AggregateError, CoreError, DecodeError, FetchError, NormalizeError, ParseRateError,
    ValidationError,
};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, ScriptedHttpClient,
};
