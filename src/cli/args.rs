//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `apply`: Merge one language's translation file into the catalog
//! - `apply-all`: Merge a directory of `<lang>.json` translation files
//! - `extract`: Write the source text of untranslated keys to a file
//! - `stats`: Show per-language translation coverage
//! - `init`: Initialize xcmerge configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::merge::{ConflictPolicy, SameValue};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Apply(cmd)) => cmd.common.verbose,
            Some(Command::ApplyAll(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Merge behavior shared by `apply` and `apply-all`.
#[derive(Debug, Clone, Args)]
pub struct MergeArgs {
    /// What to do when a key already has a value for the language (overrides config file)
    #[arg(long, value_enum)]
    pub policy: Option<ConflictPolicy>,

    /// How `--policy replace` treats identical text (overrides config file)
    #[arg(long, value_enum)]
    pub same_value: Option<SameValue>,

    /// Repair trailing commas and missing braces in translation files
    #[arg(long)]
    pub lenient: bool,

    /// Report what would change without writing the catalog
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ApplyCommand {
    /// Target language code (e.g. fr, pt-BR, zh-Hans)
    pub language: String,

    /// JSON file of key/translation pairs
    pub translations: PathBuf,

    /// Catalog to update (defaults to the configured catalog)
    pub catalog: Option<PathBuf>,

    #[command(flatten)]
    pub merge: MergeArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ApplyAllCommand {
    /// Directory containing one `<lang>.json` translation file per language
    pub dir: PathBuf,

    /// Catalog to update (defaults to the configured catalog)
    pub catalog: Option<PathBuf>,

    #[command(flatten)]
    pub merge: MergeArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Language to collect untranslated keys for
    pub language: String,

    /// Catalog to read (defaults to the configured catalog)
    pub catalog: Option<PathBuf>,

    /// Output file (default: missing_<lang>_translations.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Catalog to read (defaults to the configured catalog)
    pub catalog: Option<PathBuf>,

    /// Exit with status 1 if any language is below this percentage
    #[arg(long, value_name = "PERCENT", value_parser = parse_percent)]
    pub min_coverage: Option<f64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

fn parse_percent(value: &str) -> Result<f64, String> {
    let percent: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if (0.0..=100.0).contains(&percent) {
        Ok(percent)
    } else {
        Err(format!("{} is not between 0 and 100", percent))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge a translation file for one language into the catalog
    Apply(ApplyCommand),
    /// Merge every <lang>.json file of a directory into the catalog
    ApplyAll(ApplyAllCommand),
    /// Write the source text of keys missing a translation to a JSON file
    Extract(ExtractCommand),
    /// Show translation coverage per language
    Stats(StatsCommand),
    /// Initialize a new .xcmergerc.json configuration file
    Init,
}
