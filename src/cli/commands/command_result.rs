use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::coverage::Coverage;
use crate::extract::Extraction;
use crate::merge::{MergeCounts, MergeOptions, MergeReport};

#[derive(Debug)]
pub enum CommandSummary {
    Apply(ApplySummary),
    ApplyAll(ApplyAllSummary),
    Extract(ExtractSummary),
    Stats(StatsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ApplySummary {
    pub catalog_path: PathBuf,
    pub options: MergeOptions,
    pub report: MergeReport,
    /// Backup written before the catalog was replaced. `None` when nothing
    /// was written (dry run, or no changes).
    pub backup: Option<PathBuf>,
    pub is_dry_run: bool,
}

#[derive(Debug)]
pub struct ApplyAllSummary {
    pub catalog_path: PathBuf,
    pub options: MergeOptions,
    /// One report per language, sorted by language code.
    pub reports: Vec<MergeReport>,
    pub total: MergeCounts,
    pub backup: Option<PathBuf>,
    pub is_dry_run: bool,
    /// Coverage after the merge.
    pub coverage: Coverage,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub language: String,
    pub output_path: PathBuf,
    pub extraction: Extraction,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalog_path: PathBuf,
    pub coverage: Coverage,
    pub min_coverage: Option<f64>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running xcmerge commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Success,
        }
    }
}
