use std::io::Write;

use pblint_config::ReportFormat;
use pblint_rules::LintReport;

/// One line per violation, in report order.
pub fn render_text(report: &LintReport) -> String {
    report
        .violations
        .iter()
        .map(|violation| format!("{violation}\n"))
        .collect()
}

pub fn render_json(report: &LintReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the report: text goes to stderr, JSON to stdout.
pub fn emit(report: &LintReport, format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => {
            let mut stderr = std::io::stderr().lock();
            stderr.write_all(render_text(report).as_bytes())?;
            stderr.flush()?;
        }
        ReportFormat::Json => println!("{}", render_json(report)?),
    }
    Ok(())
}
