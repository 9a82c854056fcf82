use anyhow::{Context, Result};
use tracing::{info, info_span};

use tanzil_cli::executor::PostgresExecutor;
use tanzil_cli::pipeline::{execute_import, prepare_import, write_script};
use tanzil_ingest::{TANZIL_QURAN_SHA256, read_source};
use tanzil_model::SajdehTable;

use crate::cli::ImportArgs;
use crate::types::{Destination, ImportOutcome};

pub fn run_import(args: &ImportArgs) -> Result<ImportOutcome> {
    let import_span = info_span!("import", source = %args.source.display());
    let _import_guard = import_span.enter();

    let source = read_source(&args.source).context("read source")?;
    let prepared = prepare_import(&source, TANZIL_QURAN_SHA256, &SajdehTable::standard())?;

    if let Some(path) = &args.emit_sql {
        write_script(prepared.script.sql(), path)?;
    }

    let destination = if args.dry_run {
        info!("dry run, skipping database");
        Destination::DryRun
    } else {
        let settings = args.connection_settings()?;
        let mut executor = PostgresExecutor::connect(&settings).context("connect to database")?;
        execute_import(&prepared, &mut executor)?;
        executor.close().context("close database connection")?;
        Destination::Database(settings.target())
    };

    Ok(ImportOutcome {
        source: args.source.clone(),
        sha256: prepared.sha256.clone(),
        summary: prepared.script.summary(),
        destination,
        sql_output: args.emit_sql.clone(),
    })
}
