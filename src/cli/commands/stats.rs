use anyhow::Result;

use super::helper::{ensure_file, load_project_config, source_language};
use super::{CommandResult, CommandSummary, StatsSummary};
use crate::{
    catalog::Catalog, cli::args::StatsCommand, cli::exit_status::ExitStatus,
    coverage::coverage, error::FileKind,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let loaded = load_project_config()?;
    let config = &loaded.config;

    let catalog_path = loaded.catalog_path(cmd.catalog.as_deref());
    ensure_file(&catalog_path, FileKind::Catalog)?;
    let catalog = Catalog::load(&catalog_path)?;

    let coverage = coverage(
        &catalog,
        &config.supported_languages,
        source_language(&loaded, &catalog),
    );

    let status = ExitStatus::gate(
        cmd.min_coverage
            .is_none_or(|threshold| coverage.below(threshold).is_empty()),
    );

    Ok(CommandResult {
        summary: CommandSummary::Stats(StatsSummary {
            catalog_path,
            coverage,
            min_coverage: cmd.min_coverage,
        }),
        status,
    })
}
