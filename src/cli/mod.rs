//! Command-line interface layer.

pub mod args;
pub mod commands;
pub mod run;

pub use args::{Arguments, CheckCommand, Command, CommonArgs};
pub use run::{ExitStatus, run_cli};
