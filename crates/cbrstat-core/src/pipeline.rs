//! Fetch → normalize → select → summarize, stopping at the first error.

use time::OffsetDateTime;
use tracing::info;

use crate::aggregator::summarize;
use crate::domain::{CurrencyCode, RateReport};
use crate::error::{CoreError, ValidationError};
use crate::fetcher::RateFetcher;
use crate::normalizer::{normalize, select_currency, RateMode};

/// What to report on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub days: u32,
    pub currency: Option<CurrencyCode>,
    pub mode: RateMode,
}

impl ReportRequest {
    pub fn new(days: u32) -> Result<Self, ValidationError> {
        if days == 0 {
            return Err(ValidationError::ZeroDays);
        }
        Ok(Self {
            days,
            currency: None,
            mode: RateMode::Quoted,
        })
    }

    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_mode(mut self, mode: RateMode) -> Self {
        self.mode = mode;
        self
    }
}

pub async fn build_report(
    fetcher: &RateFetcher,
    request: &ReportRequest,
    now: OffsetDateTime,
) -> Result<RateReport, CoreError> {
    let sheets = fetcher.fetch(now, request.days).await?;

    let mut records = normalize(&sheets, request.mode)?;
    if let Some(currency) = &request.currency {
        records = select_currency(records, currency);
        info!(currency = %currency, records = records.len(), "records selected");
    }

    let report = summarize(records)?;
    info!(count = report.count, mean = report.mean, "report ready");
    Ok(report)
}
