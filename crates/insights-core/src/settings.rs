use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// ── OutputFormat ───────────────────────────────────────────────────────────────

/// How the summary is written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text report.
    #[default]
    Table,
    /// The summary (plus any attached insights) as pretty-printed JSON.
    Json,
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise point-of-sale transactions from a CSV export
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sales-insights",
    about = "Summarise point-of-sale transactions from a CSV export",
    version
)]
pub struct Settings {
    /// CSV file with a header row and one transaction per line
    pub input: PathBuf,

    /// JSON file with recommendations / forecast to attach to the report
    #[arg(long)]
    pub insights: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse CLI arguments from the process environment.
    pub fn load() -> Self {
        Self::from_args(std::env::args_os())
    }

    /// Parse an explicit argument list and apply the `--debug` override.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
