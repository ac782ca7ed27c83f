use std::io::Write;

use cbrstat_core::{RateRecord, RateReport};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Progress line shown before the first request in text mode.
pub fn render_banner(days: u32, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Получение данных ЦБ по курсам валют за {days} дней...")?;
    out.flush()?;
    Ok(())
}

pub fn render(
    report: &RateReport,
    format: OutputFormat,
    pretty: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => render_text(report, out)?,
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(out, "{payload}")?;
        }
    }

    out.flush()?;
    Ok(())
}

fn render_text(report: &RateReport, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Максимальное значение:")?;
    render_record(&report.max, out)?;

    writeln!(out, "Минимальное значение:")?;
    render_record(&report.min, out)?;

    writeln!(out, "Среднее значение курса рубля: {:.2}", report.mean)
}

fn render_record(record: &RateRecord, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Валюта: {}", record.name)?;
    writeln!(out, "Значение {:.2}", record.value)?;
    writeln!(out, "Дата {}", record.date)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RateReport {
        RateReport {
            max: RateRecord::new("02.03.2024", "USD", "US Dollar", 91.5),
            min: RateRecord::new("01.03.2024", "USD", "US Dollar", 90.1234),
            mean: 90.8117,
            count: 2,
        }
    }

    fn rendered(format: OutputFormat, pretty: bool) -> String {
        let mut out = Vec::new();
        render(&report(), format, pretty, &mut out).expect("render must succeed");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn text_report_lists_extremes_then_mean() {
        let expected = "\
Максимальное значение:
Валюта: US Dollar
Значение 91.50
Дата 02.03.2024

Минимальное значение:
Валюта: US Dollar
Значение 90.12
Дата 01.03.2024

Среднее значение курса рубля: 90.81
";
        assert_eq!(rendered(OutputFormat::Text, false), expected);
    }

    #[test]
    fn banner_names_the_requested_day_count() {
        let mut out = Vec::new();
        render_banner(30, &mut out).expect("banner must render");

        assert_eq!(
            String::from_utf8(out).expect("utf-8 output"),
            "Получение данных ЦБ по курсам валют за 30 дней...\n"
        );
    }

    #[test]
    fn json_report_is_one_object() {
        let output = rendered(OutputFormat::Json, false);
        assert_eq!(output.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value["max"]["char_code"], "USD");
        assert_eq!(value["min"]["value"], 90.1234);
        assert_eq!(value["count"], 2);
    }

    #[test]
    fn pretty_json_spans_lines() {
        assert!(rendered(OutputFormat::Json, true).lines().count() > 1);
    }
}
