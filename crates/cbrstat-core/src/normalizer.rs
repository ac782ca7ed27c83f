//! Flattening of rate sheets into numeric records.

use tracing::debug;

use crate::domain::{CurrencyCode, RateRecord};
use crate::error::{NormalizeError, ParseRateError};
use crate::feed::{RateEntry, RateSheet};

/// Which number a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateMode {
    /// `Value` as quoted, i.e. roubles per `Nominal` units.
    #[default]
    Quoted,
    /// Roubles per single unit: `VunitRate`, else `Value / Nominal`.
    PerUnit,
}

/// Parses a comma-decimal string such as `"73,5678"`.
pub fn parse_rate(raw: &str) -> Result<f64, ParseRateError> {
    let invalid = || ParseRateError {
        raw: raw.to_owned(),
    };
    let value: f64 = raw
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// One record per entry, sheet order outer, entry order inner.
/// The first unparseable value aborts the whole run.
pub fn normalize(sheets: &[RateSheet], mode: RateMode) -> Result<Vec<RateRecord>, NormalizeError> {
    let capacity = sheets.iter().map(|sheet| sheet.entries.len()).sum();
    let mut records = Vec::with_capacity(capacity);

    for sheet in sheets {
        for entry in &sheet.entries {
            let value = entry_value(&sheet.date, entry, mode)?;
            records.push(RateRecord::new(
                sheet.date.as_str(),
                entry.char_code.trim(),
                entry.name.as_str(),
                value,
            ));
        }
    }

    debug!(records = records.len(), ?mode, "rate sheets normalized");
    Ok(records)
}

/// Keeps the records of one currency, preserving order.
pub fn select_currency(records: Vec<RateRecord>, code: &CurrencyCode) -> Vec<RateRecord> {
    records
        .into_iter()
        .filter(|record| code.matches(&record.char_code))
        .collect()
}

fn entry_value(date: &str, entry: &RateEntry, mode: RateMode) -> Result<f64, NormalizeError> {
    let rate_error = |source: ParseRateError| NormalizeError::InvalidRate {
        date: date.to_owned(),
        currency: entry.char_code.clone(),
        source,
    };

    match mode {
        RateMode::Quoted => parse_rate(&entry.value).map_err(rate_error),
        RateMode::PerUnit => {
            let unit_rate = entry
                .unit_rate
                .as_deref()
                .filter(|raw| !raw.trim().is_empty());
            if let Some(unit_rate) = unit_rate {
                return parse_rate(unit_rate).map_err(rate_error);
            }

            let value = parse_rate(&entry.value).map_err(rate_error)?;
            let nominal = entry
                .nominal
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|nominal| *nominal > 0)
                .ok_or_else(|| NormalizeError::InvalidNominal {
                    date: date.to_owned(),
                    currency: entry.char_code.clone(),
                    raw: entry.nominal.clone(),
                })?;
            Ok(value / f64::from(nominal))
        }
    }
}
