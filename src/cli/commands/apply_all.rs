use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::helper::{commit, ensure_file, load_project_config, merge_options, source_language};
use super::{ApplyAllSummary, CommandResult, CommandSummary};
use crate::{
    batch::TranslationBatch,
    catalog::{Catalog, store::ALL_LANGUAGES_TAG},
    cli::args::ApplyAllCommand,
    coverage::coverage,
    error::{Error, FileKind},
    merge::{MergeCounts, merge},
};

/// Merge every `<lang>.json` file of a directory in one pass.
///
/// All languages and batches are validated before the catalog is touched;
/// the catalog is backed up once (`.all.bak`) and written once.
pub fn apply_all(cmd: ApplyAllCommand) -> Result<CommandResult> {
    let loaded = load_project_config()?;
    let config = &loaded.config;

    if !cmd.dir.is_dir() {
        return Err(Error::FileNotFound {
            kind: FileKind::Translations,
            path: cmd.dir.clone(),
        }
        .into());
    }

    let files = batch_files(&cmd.dir)?;
    if files.is_empty() {
        return Err(Error::Usage(format!(
            "no <lang>.json translation files found in {}",
            cmd.dir.display()
        ))
        .into());
    }
    for (language, _) in &files {
        config.ensure_supported(language)?;
    }

    let catalog_path = loaded.catalog_path(cmd.catalog.as_deref());
    ensure_file(&catalog_path, FileKind::Catalog)?;

    let lenient = cmd.merge.lenient || config.lenient_batches;
    let batches = files
        .into_iter()
        .map(|(language, path)| Ok((language, TranslationBatch::load(&path, lenient)?)))
        .collect::<Result<Vec<_>, Error>>()?;
    let mut catalog = Catalog::load(&catalog_path)?;

    let options = merge_options(config, &cmd.merge);
    let mut total = MergeCounts::default();
    let reports: Vec<_> = batches
        .iter()
        .map(|(language, batch)| {
            let report = merge(&mut catalog, language, batch, options);
            total += report.counts;
            report
        })
        .collect();

    let backup = commit(
        &catalog,
        &catalog_path,
        ALL_LANGUAGES_TAG,
        total.changed() > 0,
        cmd.merge.dry_run,
    )?;

    let coverage = coverage(
        &catalog,
        &config.supported_languages,
        source_language(&loaded, &catalog),
    );

    Ok(CommandResult::success(CommandSummary::ApplyAll(
        ApplyAllSummary {
            catalog_path,
            options,
            reports,
            total,
            backup,
            is_dry_run: cmd.merge.dry_run,
            coverage,
        },
    )))
}

/// `(language, path)` for every `*.json` file directly inside `dir`, sorted
/// by language.
fn batch_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Cannot access {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some("json")
        {
            continue;
        }
        if let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) {
            files.push((language.to_string(), path.to_path_buf()));
        }
    }

    Ok(files)
}
