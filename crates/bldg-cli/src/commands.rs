//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use bldg_import::{BatchOutcome, ImportSource, import};
use bldg_ingest::ColumnMap;
use bldg_store::FileCatalog;

use crate::cli::{ColumnsArgs, ImportArgs, VocabArg};
use crate::summary::print_column_map;

/// Everything the summary needs to report one import run.
pub struct ImportResult {
    pub outcome: BatchOutcome,
    pub catalog_path: PathBuf,
    pub catalog_len: usize,
    pub dry_run: bool,
}

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let map = load_column_map(args.columns.as_deref(), args.vocab)?;

    let source = ImportSource::from_path(&args.file);
    if !args.no_upload_gate && !source.looks_like_csv() {
        bail!(
            "{:?} does not look like a CSV upload (use --no-upload-gate to bypass)",
            source.filename()
        );
    }
    let digest = source
        .digest()
        .with_context(|| format!("read {}", args.file.display()))?;
    info!(filename = source.filename(), digest, "accepted upload");

    let catalog = FileCatalog::open(&args.catalog)
        .with_context(|| format!("open catalog {}", args.catalog.display()))?;
    let outcome = import(&source, &map, &catalog).context("import batch failed")?;
    if !args.dry_run {
        catalog.save().context("save catalog")?;
    }

    Ok(ImportResult {
        outcome,
        catalog_path: args.catalog.clone(),
        catalog_len: catalog.len(),
        dry_run: args.dry_run,
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let map = load_column_map(args.columns.as_deref(), args.vocab)?;
    print_column_map(&map);
    Ok(())
}

fn load_column_map(path: Option<&Path>, vocab: VocabArg) -> Result<ColumnMap> {
    if let Some(path) = path {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read column map {}", path.display()))?;
        let map = serde_json::from_str(&contents)
            .with_context(|| format!("parse column map {}", path.display()))?;
        return Ok(map);
    }
    Ok(match vocab {
        VocabArg::Japanese => ColumnMap::japanese(),
        VocabArg::English => ColumnMap::english(),
    })
}
