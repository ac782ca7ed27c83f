mod cli;
mod error;
mod output;
mod telemetry;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use cbrstat_core::{
    build_report, CurrencyCode, FetchConfig, RateFetcher, RateMode, ReportRequest,
    ReqwestHttpClient,
};
use clap::Parser;
use time::OffsetDateTime;
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let request = report_request(&cli)?;
    let fetcher = RateFetcher::new(Arc::new(ReqwestHttpClient::new()), fetch_config(&cli));

    let stdout = io::stdout();
    if cli.format == OutputFormat::Text {
        output::render_banner(request.days, &mut stdout.lock())?;
    }

    let report = build_report(&fetcher, &request, OffsetDateTime::now_utc()).await?;
    output::render(&report, cli.format, cli.pretty, &mut stdout.lock())?;

    if cli.pause_secs > 0 {
        info!(seconds = cli.pause_secs, "pausing before exit");
        tokio::time::sleep(Duration::from_secs(cli.pause_secs)).await;
    }

    Ok(())
}

fn report_request(cli: &Cli) -> Result<ReportRequest, CliError> {
    let mut request = ReportRequest::new(cli.days)?;
    if let Some(raw) = &cli.currency {
        request = request.with_currency(CurrencyCode::parse(raw)?);
    }
    if cli.per_unit {
        request = request.with_mode(RateMode::PerUnit);
    }
    Ok(request)
}

fn fetch_config(cli: &Cli) -> FetchConfig {
    FetchConfig {
        base_url: cli.base_url.clone(),
        user_agent: cli.user_agent.clone(),
        utc_offset: cli.utc_offset.clone(),
        timeout_ms: cli.timeout_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbrstat_core::ValidationError;

    #[test]
    fn builds_request_from_flags() {
        let cli = Cli::parse_from(["cbrstat", "--days", "7", "--currency", "eur", "--per-unit"]);

        let request = report_request(&cli).expect("valid flags");

        assert_eq!(request.days, 7);
        assert_eq!(
            request.currency.as_ref().map(CurrencyCode::as_str),
            Some("EUR")
        );
        assert_eq!(request.mode, RateMode::PerUnit);
    }

    #[test]
    fn invalid_flags_fail_before_any_fetch() {
        let zero = Cli::parse_from(["cbrstat", "--days", "0"]);
        let bad_code = Cli::parse_from(["cbrstat", "--currency", "dollar"]);

        assert!(matches!(
            report_request(&zero),
            Err(CliError::Validation(ValidationError::ZeroDays))
        ));
        assert!(matches!(
            report_request(&bad_code),
            Err(CliError::Validation(
                ValidationError::InvalidCurrency { .. }
            ))
        ));
    }

    #[test]
    fn fetch_config_mirrors_flags() {
        let cli = Cli::parse_from([
            "cbrstat",
            "--base-url",
            "http://feed.test/daily",
            "--timeout-ms",
            "500",
        ]);

        let config = fetch_config(&cli);

        assert_eq!(config.base_url, "http://feed.test/daily");
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.utc_offset, "+03:00");
    }
}
