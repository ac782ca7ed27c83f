//! Day-by-day download of the daily rate sheet.
//!
//! Requests run strictly one after another. The first failure of any kind
//! aborts the fetch and no partial result is returned.

use std::sync::Arc;

use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use crate::charset::{SniffingDecoder, TextDecoder};
use crate::domain::{request_date, FeedClock, MOSCOW_OFFSET};
use crate::error::FetchError;
use crate::feed::{parse_rate_sheet, RateSheet};
use crate::http_client::{HttpClient, HttpRequest};

pub const CBR_DAILY_URL: &str = "http://www.cbr.ru/scripts/XML_daily.asp";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; MyGoApp/1.0)";
pub const DEFAULT_DAYS: u32 = 90;

/// Endpoint and request settings for [`RateFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Offset "today" is resolved in, e.g. `+03:00`.
    pub utc_offset: String,
    pub timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(CBR_DAILY_URL),
            user_agent: String::from(DEFAULT_USER_AGENT),
            utc_offset: String::from(MOSCOW_OFFSET),
            timeout_ms: 10_000,
        }
    }
}

/// Downloads and parses rate sheets through an injected transport.
#[derive(Clone)]
pub struct RateFetcher {
    http_client: Arc<dyn HttpClient>,
    decoder: Arc<dyn TextDecoder>,
    config: FetchConfig,
}

impl RateFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, config: FetchConfig) -> Self {
        Self {
            http_client,
            decoder: Arc::new(SniffingDecoder),
            config,
        }
    }

    pub fn with_decoder(mut self, decoder: Arc<dyn TextDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn request_url(&self, date: Date) -> String {
        format!("{}?date_req={}", self.config.base_url, request_date(date))
    }

    /// Fetches `days` sheets for today and the preceding days, newest first.
    pub async fn fetch(
        &self,
        now: OffsetDateTime,
        days: u32,
    ) -> Result<Vec<RateSheet>, FetchError> {
        let clock = FeedClock::parse(&self.config.utc_offset).map_err(FetchError::Timezone)?;
        let dates = clock.trailing_days(now, days);

        info!(
            days = dates.len(),
            base_url = %self.config.base_url,
            "fetching daily rate sheets"
        );

        let mut sheets = Vec::with_capacity(dates.len());
        for date in dates {
            sheets.push(self.fetch_day(date).await?);
        }

        info!(sheets = sheets.len(), "rate sheets fetched");
        Ok(sheets)
    }

    /// Fetches and parses the sheet requested for one calendar date.
    pub async fn fetch_day(&self, date: Date) -> Result<RateSheet, FetchError> {
        let date_req = request_date(date);
        let request = HttpRequest::get(self.request_url(date))
            .with_header("user-agent", self.config.user_agent.as_str())
            .with_timeout_ms(self.config.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|source| {
            FetchError::Transport {
                date: date_req.clone(),
                source,
            }
        })?;

        if !response.is_success() {
            return Err(FetchError::Status {
                date: date_req,
                status: response.status,
            });
        }

        let text = self
            .decoder
            .decode(&response.body, response.content_type.as_deref())
            .map_err(|source| FetchError::Decode {
                date: date_req.clone(),
                source,
            })?;

        let sheet = parse_rate_sheet(&text).map_err(|source| FetchError::Xml {
            date: date_req.clone(),
            source,
        })?;

        debug!(
            date_req = %date_req,
            sheet_date = %sheet.date,
            entries = sheet.entries.len(),
            "rate sheet parsed"
        );
        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpError, HttpResponse, ScriptedHttpClient};
    use time::format_description::well_known::Rfc3339;
    use time::Month;

    const URL_0105: &str = "http://feed.test/daily?date_req=05/01/2024";

    fn sheet_xml(date: &str, value: &str) -> String {
        format!(
            r#"<ValCurs Date="{date}" name="Foreign Currency Market"><Valute ID="R01235"><NumCode>840</NumCode><CharCode>USD</CharCode><Nominal>1</Nominal><Name>US Dollar</Name><Value>{value}</Value></Valute></ValCurs>"#
        )
    }

    fn fetcher(client: ScriptedHttpClient) -> RateFetcher {
        let config = FetchConfig {
            base_url: String::from("http://feed.test/daily"),
            ..FetchConfig::default()
        };
        RateFetcher::new(Arc::new(client), config)
    }

    fn day() -> Date {
        Date::from_calendar_date(2024, Month::January, 5).expect("valid date")
    }

    #[test]
    fn builds_url_with_date_query() {
        let fetcher = fetcher(ScriptedHttpClient::new());
        assert_eq!(fetcher.request_url(day()), URL_0105);
    }

    #[tokio::test]
    async fn fetch_day_parses_sheet() {
        let client = ScriptedHttpClient::new().with_response(
            URL_0105,
            HttpResponse::ok(sheet_xml("05.01.2024", "90,1234")),
        );

        let sheet = fetcher(client).fetch_day(day()).await.expect("must fetch");

        assert_eq!(sheet.date, "05.01.2024");
        assert_eq!(sheet.entries[0].value, "90,1234");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let client = ScriptedHttpClient::new()
            .with_response(URL_0105, HttpResponse::with_status(503, "busy"));

        let error = fetcher(client)
            .fetch_day(day())
            .await
            .expect_err("503 must fail");

        assert!(matches!(error, FetchError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn transport_error_carries_date() {
        let client =
            ScriptedHttpClient::new().with_error(URL_0105, HttpError::new("connection refused"));

        let error = fetcher(client)
            .fetch_day(day())
            .await
            .expect_err("must fail");

        match error {
            FetchError::Transport { date, source } => {
                assert_eq!(date, "05/01/2024");
                assert_eq!(source.message(), "connection refused");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn invalid_offset_fails_before_any_request() {
        let client = Arc::new(ScriptedHttpClient::new());
        let config = FetchConfig {
            utc_offset: String::from("Europe/Moscow"),
            ..FetchConfig::default()
        };
        let fetcher = RateFetcher::new(client.clone(), config);
        let now = OffsetDateTime::parse("2024-01-05T12:00:00Z", &Rfc3339).expect("valid");

        let error = fetcher.fetch(now, 3).await.expect_err("must fail");

        assert!(matches!(error, FetchError::Timezone(_)));
        assert!(client.requests().is_empty());
    }
}
