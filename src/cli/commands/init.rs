use std::{env, fs};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration to the working directory.
pub fn init() -> Result<CommandResult> {
    let config_path = env::current_dir()
        .context("Failed to determine current directory")?
        .join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;

    Ok(CommandResult::success(CommandSummary::Init(InitSummary {
        created: true,
    })))
}
