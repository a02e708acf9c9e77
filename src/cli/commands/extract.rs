use std::path::PathBuf;

use anyhow::Result;

use super::helper::{ensure_file, load_project_config, source_language};
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::{
    catalog::{Catalog, store},
    cli::args::ExtractCommand,
    error::{Error, FileKind},
    extract::{default_output_name, missing_translations},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let loaded = load_project_config()?;
    loaded.config.ensure_supported(&cmd.language)?;

    let catalog_path = loaded.catalog_path(cmd.catalog.as_deref());
    ensure_file(&catalog_path, FileKind::Catalog)?;
    let catalog = Catalog::load(&catalog_path)?;

    let source = source_language(&loaded, &catalog);
    if cmd.language == source {
        return Err(Error::Usage(format!(
            "'{}' is the source language; there is nothing to extract",
            cmd.language
        ))
        .into());
    }

    let extraction = missing_translations(&catalog, &cmd.language, source);

    let output_path = cmd
        .output
        .unwrap_or_else(|| PathBuf::from(default_output_name(&cmd.language)));
    let content = extraction.missing.to_pretty_json()?;
    store::create_parent_dir(&output_path)?;
    store::write_atomic(&output_path, format!("{}\n", content).as_bytes())?;

    Ok(CommandResult::success(CommandSummary::Extract(
        ExtractSummary {
            language: cmd.language,
            output_path,
            extraction,
        },
    )))
}
