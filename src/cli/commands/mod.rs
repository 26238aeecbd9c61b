pub mod check;

use crate::issue::Issue;

/// Result of running a configlint command.
pub struct CommandResult {
    /// All issues found, sorted for reporting.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were checked.
    pub source_files_checked: usize,
    /// Number of keys loaded from the reference schema.
    pub schema_keys_loaded: usize,
}
