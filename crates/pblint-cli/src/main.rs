use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod output;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("pblint error: {error:#}");
            std::process::exit(1);
        }
    }
}

/// Load, lint, and report. Returns whether the schemas are clean.
fn run() -> anyhow::Result<bool> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let settings = bootstrap::load_settings(&cli)?;
    tracing::debug!(?settings, "resolved settings");

    let files = pblint_loader::parse(&cli.files, &settings.import_paths)
        .context("unable to load schema files")?;

    let report = pblint_rules::lint_report(&files);
    output::emit(&report, settings.format)?;

    Ok(report.is_clean())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PBLINT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
