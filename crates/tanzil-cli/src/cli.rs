//! CLI argument definitions for the Tanzil importer.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tanzil_cli::executor::ConnectionSettings;

#[derive(Parser)]
#[command(
    name = "tanzil-import",
    version,
    about = "Import the Tanzil Quran XML into quran_surahs, quran_ayahs and quran_words",
    long_about = "Import the Tanzil Quran XML into PostgreSQL.\n\n\
                  The source must be byte-identical to the official Tanzil distribution.\n\
                  Rows are inserted into existing quran_surahs, quran_ayahs and quran_words\n\
                  tables in a single transaction."
)]
pub struct Cli {
    #[command(flatten)]
    pub import: ImportArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to the Tanzil Quran XML file.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Database name.
    #[arg(
        value_name = "DATABASE",
        env = "PGDATABASE",
        required_unless_present = "dry_run"
    )]
    pub database: Option<String>,

    /// Database host.
    #[arg(value_name = "HOST", env = "PGHOST", required_unless_present = "dry_run")]
    pub host: Option<String>,

    /// Database user.
    #[arg(value_name = "USER", env = "PGUSER", required_unless_present = "dry_run")]
    pub user: Option<String>,

    /// Database password.
    #[arg(
        value_name = "PASSWORD",
        env = "PGPASSWORD",
        hide_env_values = true,
        required_unless_present = "dry_run"
    )]
    pub password: Option<String>,

    /// Database port.
    #[arg(value_name = "PORT", env = "PGPORT", required_unless_present = "dry_run")]
    pub port: Option<u16>,

    /// Verify and build the script without connecting to the database.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the generated SQL script to this path ("-" for stdout).
    #[arg(long = "emit-sql", value_name = "PATH")]
    pub emit_sql: Option<PathBuf>,
}

impl ImportArgs {
    pub fn connection_settings(&self) -> Result<ConnectionSettings> {
        fn required<T: Clone>(value: Option<&T>, name: &str) -> Result<T> {
            value
                .cloned()
                .ok_or_else(|| anyhow!("missing database {name}"))
        }
        Ok(ConnectionSettings {
            database: required(self.database.as_ref(), "name")?,
            host: required(self.host.as_ref(), "host")?,
            user: required(self.user.as_ref(), "user")?,
            password: required(self.password.as_ref(), "password")?,
            port: required(self.port.as_ref(), "port")?,
        })
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
