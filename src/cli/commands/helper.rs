use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::catalog::{Catalog, store};
use crate::cli::args::MergeArgs;
use crate::config::{Config, ConfigLoadResult, load_config};
use crate::error::{Error, FileKind};
use crate::merge::MergeOptions;

/// Load the configuration found from the working directory.
pub fn load_project_config() -> Result<ConfigLoadResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    Ok(load_config(&cwd)?)
}

/// Fail with a `FileNotFound` error unless `path` is an existing file.
pub fn ensure_file(path: &Path, kind: FileKind) -> Result<(), Error> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::FileNotFound {
            kind,
            path: path.to_path_buf(),
        })
    }
}

/// Source language: the config file's, else the catalog's declared one.
pub fn source_language<'a>(loaded: &'a ConfigLoadResult, catalog: &'a Catalog) -> &'a str {
    match catalog.source_language() {
        Some(language) if !loaded.from_file => language,
        _ => &loaded.config.source_language,
    }
}

/// Merge options from the config file, overridden by command-line flags.
pub fn merge_options(config: &Config, args: &MergeArgs) -> MergeOptions {
    let defaults = config.merge_options();
    MergeOptions {
        policy: args.policy.unwrap_or(defaults.policy),
        same_value: args.same_value.unwrap_or(defaults.same_value),
    }
}

/// Back up and atomically rewrite the catalog if the merge changed it.
///
/// Returns the backup path when the catalog was written.
pub fn commit(
    catalog: &Catalog,
    catalog_path: &Path,
    backup_tag: &str,
    changed: bool,
    is_dry_run: bool,
) -> Result<Option<PathBuf>> {
    if is_dry_run || !changed {
        return Ok(None);
    }

    let backup = store::create_backup(catalog_path, backup_tag)?;
    catalog.save(catalog_path)?;
    Ok(Some(backup))
}
