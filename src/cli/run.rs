use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{apply::apply, apply_all::apply_all, extract::extract, init::init, stats::stats},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary and exit status
/// - `Err` if the command fails (e.g., unsupported language, missing file, write failure)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Apply(cmd)) => apply(cmd),
        Some(Command::ApplyAll(cmd)) => apply_all(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
