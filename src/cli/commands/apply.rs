use anyhow::Result;

use super::helper::{commit, ensure_file, load_project_config, merge_options};
use super::{ApplySummary, CommandResult, CommandSummary};
use crate::{
    batch::TranslationBatch, catalog::Catalog, cli::args::ApplyCommand, error::FileKind,
    merge::merge,
};

/// Merge one translation file into the catalog.
///
/// Inputs are checked in order (language, translations file, catalog,
/// batch content, catalog content) and nothing is written unless all of
/// them are valid.
pub fn apply(cmd: ApplyCommand) -> Result<CommandResult> {
    let loaded = load_project_config()?;
    let config = &loaded.config;

    config.ensure_supported(&cmd.language)?;
    ensure_file(&cmd.translations, FileKind::Translations)?;
    let catalog_path = loaded.catalog_path(cmd.catalog.as_deref());
    ensure_file(&catalog_path, FileKind::Catalog)?;

    let lenient = cmd.merge.lenient || config.lenient_batches;
    let batch = TranslationBatch::load(&cmd.translations, lenient)?;
    let mut catalog = Catalog::load(&catalog_path)?;

    let options = merge_options(config, &cmd.merge);
    let report = merge(&mut catalog, &cmd.language, &batch, options);

    let backup = commit(
        &catalog,
        &catalog_path,
        &cmd.language,
        report.counts.changed() > 0,
        cmd.merge.dry_run,
    )?;

    Ok(CommandResult::success(CommandSummary::Apply(ApplySummary {
        catalog_path,
        options,
        report,
        backup,
        is_dry_run: cmd.merge.dry_run,
    })))
}
