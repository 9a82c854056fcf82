//! Import pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: fingerprint the raw bytes, then parse the XML
//! 2. **Build**: derive the surah, ayah and word tables and assemble the script
//! 3. **Execute**: hand the script to a [`StatementExecutor`]
//!
//! A failing stage stops the run. Nothing reaches the executor unless the
//! source passed the fingerprint check and every table was built.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tanzil_ingest::load_verified;
use tanzil_model::SajdehTable;
use tanzil_sql::{ImportScript, build_import_script};

use crate::executor::StatementExecutor;

/// Output of the ingest and build stages.
#[derive(Debug, Clone)]
pub struct PreparedImport {
    /// Verified SHA-256 of the source.
    pub sha256: String,
    pub script: ImportScript,
}

/// Verify, parse and build. No database is involved.
pub fn prepare_import(
    source: &[u8],
    expected_sha256: &str,
    sajdeh: &SajdehTable,
) -> Result<PreparedImport> {
    let verified = info_span!("ingest", bytes = source.len())
        .in_scope(|| load_verified(source, expected_sha256))
        .context("ingest source")?;

    let script = info_span!("build")
        .in_scope(|| build_import_script(&verified.corpus, sajdeh))
        .context("build import script")?;

    Ok(PreparedImport {
        sha256: verified.sha256,
        script,
    })
}

/// Run the prepared script through `executor`.
pub fn execute_import<E>(prepared: &PreparedImport, executor: &mut E) -> Result<()>
where
    E: StatementExecutor + ?Sized,
{
    let sql = prepared.script.sql();
    info_span!("execute", bytes = sql.len())
        .in_scope(|| executor.execute_statements(sql))
        .context("execute import script")?;
    info!("import committed");
    Ok(())
}

/// Write the script to `destination`, or to stdout when it is `-`.
pub fn write_script(sql: &str, destination: &Path) -> Result<()> {
    if destination.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{sql}").context("write script to stdout")?;
        return Ok(());
    }
    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(destination, format!("{sql}\n"))
        .with_context(|| format!("write {}", destination.display()))?;
    info!(path = %destination.display(), "wrote import script");
    Ok(())
}
