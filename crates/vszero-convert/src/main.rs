//! `vszero-convert`: converts `src/*.vstheme` into `themes/<Identity>.yaml`.
//!
//! Run without arguments from the theme repository root. Any parse or I/O
//! failure stops the batch and exits non-zero.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use vszero_theme::batch::{DEFAULT_DEST_DIR, DEFAULT_SOURCE_DIR, THEME_EXTENSION};
use vszero_theme::{convert_dir, BatchConfig};

/// Convert Visual Studio .vstheme files into YAML themes
#[derive(Debug, Parser)]
#[command(name = "vszero-convert")]
#[command(version)]
struct Cli {
    /// Directory containing the .vstheme sources
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    source: PathBuf,

    /// Directory receiving the YAML themes (must exist)
    #[arg(long, default_value = DEFAULT_DEST_DIR)]
    dest: PathBuf,

    /// File name suffix selecting theme sources
    #[arg(long, default_value = THEME_EXTENSION)]
    extension: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            source_dir: self.source.clone(),
            dest_dir: self.dest.clone(),
            extension: self.extension.clone(),
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config = cli.batch_config();
    let report = convert_dir(&config).with_context(|| {
        format!(
            "converting {} into {}",
            config.source_dir.display(),
            config.dest_dir.display()
        )
    })?;

    info!(
        converted = report.converted.len(),
        written = report.outputs(),
        collisions = report.collisions.len(),
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_uses_fixed_layout() {
        let cli = Cli::try_parse_from(["vszero-convert"]).unwrap();
        assert_eq!(cli.batch_config(), BatchConfig::default());
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "vszero-convert",
            "--source",
            "in",
            "--dest",
            "out",
            "--extension",
            ".xml",
            "-vv",
        ])
        .unwrap();
        let config = cli.batch_config();
        assert_eq!(config.source_dir, PathBuf::from("in"));
        assert_eq!(config.dest_dir, PathBuf::from("out"));
        assert_eq!(config.extension, ".xml");
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_rejects_positional_args() {
        assert!(Cli::try_parse_from(["vszero-convert", "extra"]).is_err());
    }
}
