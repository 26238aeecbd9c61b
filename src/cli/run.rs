//! Main entry point for the configlint CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed
//! arguments and turns the command result into an exit status.

use std::{fs, path::Path, process::ExitCode};

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::check::check,
};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json},
    reporter,
};

/// Exit status for CLI commands, following linter conventions:
/// 0 when clean, 1 when errors were found, 2 on internal failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Completed with no errors (warnings allowed).
    Success,
    /// Completed but found errors.
    Failure,
    /// Failed outright (config error, I/O error, etc.).
    Error,
}

impl ExitStatus {
    fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    match args.command {
        Some(Command::Check(cmd)) => {
            let verbose = cmd.common.verbose;
            let result = check(cmd)?;

            if result.issues.is_empty() {
                reporter::print_success(result.source_files_checked);
            } else {
                reporter::report(&result.issues);
            }
            reporter::print_parse_warning(result.parse_error_count, verbose);
            if verbose {
                eprintln!(
                    "checked {} files against {} schema keys: {} errors, {} warnings",
                    result.source_files_checked,
                    result.schema_keys_loaded,
                    result.error_count,
                    result.warning_count
                );
            }

            let status = if result.error_count > 0 {
                ExitStatus::Failure
            } else {
                ExitStatus::Success
            };
            Ok(status.into())
        }
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success.into())
        }
        None => unreachable!("with_command_or_help returned Some without a command"),
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
