//! Issue types for config key analysis results.

use std::{cmp::Ordering, fmt};

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UndefinedKey,
    NonLiteralKey,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::UndefinedKey => write!(f, "undefined-key"),
            Rule::NonLiteralKey => write!(f, "non-literal-key"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// A single finding, anchored at a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub source_line: Option<String>,
}

impl Issue {
    /// A literal key that is not present in the schema store.
    ///
    /// Anchored at the string literal token, not the whole call.
    pub fn undefined_key(
        file_path: &str,
        line: usize,
        col: usize,
        key: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            col,
            message: format!("config key \"{}\" is not defined in config", key),
            severity: Severity::Error,
            rule: Rule::UndefinedKey,
            source_line,
        }
    }

    /// A key argument whose value cannot be determined statically.
    ///
    /// Anchored at the argument expression.
    pub fn non_literal_key(
        file_path: &str,
        line: usize,
        col: usize,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            col,
            message: "config key should be a string literal for static analysis".to_string(),
            severity: Severity::Warning,
            rule: Rule::NonLiteralKey,
            source_line,
        }
    }

    /// A source file the host could not parse. Other files are unaffected.
    pub fn parse_error(file_path: &str, error: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: 1,
            col: 1,
            message: format!("Failed to parse: {}", error),
            severity: Severity::Error,
            rule: Rule::ParseError,
            source_line: None,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by file, line, col, then message. The message tiebreak keeps
        // output deterministic when several issues share a position.
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
