use std::path::PathBuf;

use tanzil_sql::ImportSummary;

#[derive(Debug)]
pub enum Destination {
    /// `--dry-run`: nothing was sent to a database.
    DryRun,
    /// Committed to the database identified by `user@host:port/database`.
    Database(String),
}

#[derive(Debug)]
pub struct ImportOutcome {
    pub source: PathBuf,
    pub sha256: String,
    pub summary: ImportSummary,
    pub destination: Destination,
    pub sql_output: Option<PathBuf>,
}
