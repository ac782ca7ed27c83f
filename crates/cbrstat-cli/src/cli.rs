//! CLI argument definitions for cbrstat.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--days` | `90` | Number of trailing days to fetch |
//! | `--currency` | all | ISO code to restrict the report to |
//! | `--per-unit` | `false` | Report roubles per single unit |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | CBR daily feed | Feed endpoint |
//! | `--user-agent` | feed default | `User-Agent` request header |
//! | `--utc-offset` | `+03:00` | Offset "today" is resolved in |
//! | `--timeout-ms` | `10000` | Per-request timeout in ms |
//! | `--pause-secs` | `0` | Wait after printing the report |
//!
//! # Examples
//!
//! ```bash
//! # Extremes over every currency for the last 90 days
//! cbrstat
//!
//! # Dollar only, last 30 days, as JSON
//! cbrstat --currency USD --days 30 --format json --pretty
//! ```

use cbrstat_core::{CBR_DAILY_URL, DEFAULT_DAYS, DEFAULT_USER_AGENT, MOSCOW_OFFSET};
use clap::{Parser, ValueEnum};

/// Maximum, minimum and mean CBR exchange rates over recent days.
#[derive(Debug, Parser)]
#[command(
    name = "cbrstat",
    author,
    version,
    about = "Maximum, minimum and mean CBR exchange rates over recent days"
)]
pub struct Cli {
    /// Number of trailing days to fetch, today included.
    #[arg(long, default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// Restrict the report to one currency (ISO character code, e.g. USD).
    ///
    /// Without it, all currencies are ranked together.
    #[arg(long)]
    pub currency: Option<String>,

    /// Report roubles per single unit instead of per quoted nominal.
    #[arg(long, default_value_t = false)]
    pub per_unit: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Daily feed endpoint; `?date_req=DD/MM/YYYY` is appended.
    #[arg(long, default_value = CBR_DAILY_URL)]
    pub base_url: String,

    /// User-Agent header sent with every request.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// UTC offset used to decide which day is "today".
    #[arg(long, default_value = MOSCOW_OFFSET, allow_hyphen_values = true)]
    pub utc_offset: String,

    /// Per-request timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Seconds to wait after printing the report.
    #[arg(long, default_value_t = 0)]
    pub pause_secs: u64,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    /// Single JSON object.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_daily_feed() {
        let cli = Cli::try_parse_from(["cbrstat"]).expect("no arguments must parse");

        assert_eq!(cli.days, 90);
        assert_eq!(cli.currency, None);
        assert!(!cli.per_unit);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.base_url, "http://www.cbr.ru/scripts/XML_daily.asp");
        assert_eq!(cli.user_agent, "Mozilla/5.0 (compatible; MyGoApp/1.0)");
        assert_eq!(cli.utc_offset, "+03:00");
        assert_eq!(cli.pause_secs, 0);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "cbrstat",
            "--days",
            "30",
            "--currency",
            "usd",
            "--per-unit",
            "--format",
            "json",
            "--utc-offset",
            "-05:00",
        ])
        .expect("overrides must parse");

        assert_eq!(cli.days, 30);
        assert_eq!(cli.currency.as_deref(), Some("usd"));
        assert!(cli.per_unit);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.utc_offset, "-05:00");
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cbrstat", "--format", "table"]).is_err());
    }
}
