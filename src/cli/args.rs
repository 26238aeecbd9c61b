//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Lint config key usage against the reference schema
//! - `init`: Initialize a configlint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Reference schema file path (overrides config file)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that all config keys used in the codebase are defined in the config
    Check(CheckCommand),
    /// Initialize a new .configlintrc.json configuration file
    Init,
}
