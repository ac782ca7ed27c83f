//! # Domain Models
//!
//! Types shared by the fetch, normalize and aggregate stages.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RateRecord`] | One currency's value on one day |
//! | [`RateReport`] | Maximum, minimum and mean over a record set |
//! | [`CurrencyCode`] | Validated ISO character code used for filtering |
//! | [`FeedClock`] | Fixed UTC offset the feed's calendar is read in |

mod calendar;
mod currency;
mod models;

pub use calendar::{request_date, FeedClock, MOSCOW_OFFSET};
pub use currency::CurrencyCode;
pub use models::{RateRecord, RateReport};
