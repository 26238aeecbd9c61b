//! Report formatting and printing utilities.
//!
//! Displays issues in cargo-style format. Separate from core logic so
//! configlint can be used as a library without printing side effects.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issue::{Issue, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = sorted
        .iter()
        .map(|i| i.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize) {
    print_success_to(source_files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a stderr hint about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    if count > 0 && !verbose {
        eprintln!(
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print a stderr warning when the schema store came up empty.
pub fn print_empty_schema_warning(schema_path: &str) {
    eprintln!(
        "{} schema file {} is missing or invalid; every config key will be reported as undefined",
        "warning:".bold().yellow(),
        schema_path.cyan()
    );
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message,
        issue.rule.to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        issue.file_path,
        issue.line,
        issue.col
    );

    if let Some(source_line) = &issue.source_line {
        let caret_char = match issue.severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            issue.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based). Use unicode display
        // width for correct positioning with CJK chars and emoji.
        let prefix = if issue.col > 1 {
            source_line.chars().take(issue.col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}
