use std::path::PathBuf;

use anyhow::Context;
use pblint_config::{PblintConfig, ReportFormat};

use crate::cli::Cli;

/// Effective settings for one run: configuration with CLI flags on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub import_paths: Vec<PathBuf>,
    pub format: ReportFormat,
}

pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config = PblintConfig::load().context("failed to load pblint configuration")?;
    Ok(merge(config, cli))
}

/// Flag import paths are appended after configured ones; `--format` wins.
fn merge(config: PblintConfig, cli: &Cli) -> Settings {
    let mut import_paths = config.lint.import_paths;
    import_paths.extend(cli.import_paths.iter().cloned());

    Settings {
        import_paths,
        format: cli.format.map_or(config.output.format, ReportFormat::from),
    }
}
