use time::format_description;
use time::{Date, Duration, OffsetDateTime, UtcOffset};

use crate::ValidationError;

/// Moscow has stayed on UTC+3 without daylight saving since 2014.
pub const MOSCOW_OFFSET: &str = "+03:00";

const OFFSET_FORMAT: &str = "[offset_hour sign:mandatory]:[offset_minute]";

/// Calendar of the feed: "today" is resolved at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedClock {
    offset: UtcOffset,
}

impl FeedClock {
    /// Parses an offset such as `+03:00` or `-05:30`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidUtcOffset {
            value: value.to_owned(),
        };
        let format = format_description::parse(OFFSET_FORMAT).map_err(|_| invalid())?;
        let offset = UtcOffset::parse(value.trim(), &format).map_err(|_| invalid())?;

        Ok(Self { offset })
    }

    pub const fn offset(self) -> UtcOffset {
        self.offset
    }

    pub fn today(self, now: OffsetDateTime) -> Date {
        now.to_offset(self.offset).date()
    }

    /// `days` calendar dates ending today, newest first.
    pub fn trailing_days(self, now: OffsetDateTime, days: u32) -> Vec<Date> {
        let today = self.today(now);
        (0..days)
            .map_while(|back| today.checked_sub(Duration::days(i64::from(back))))
            .collect()
    }
}

/// Formats a date the way the feed's `date_req` parameter expects: `DD/MM/YYYY`.
pub fn request_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}
