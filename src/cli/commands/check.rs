//! The `check` command: scan, parse, lint, collect issues.

use std::{fs, path::Path};

use anyhow::Result;
use rayon::prelude::*;

use super::CommandResult;
use crate::{
    analysis::{ConfigKeyVisitor, scan_files},
    cli::args::CheckCommand,
    config::load_config,
    issue::{Issue, Rule, Severity},
    parsers::parse_source,
    reporter::print_empty_schema_warning,
    schema::SchemaStore,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let common = &cmd.common;
    let mut config = load_config(Path::new("."))?;

    // CLI arguments override the config file
    if let Some(source_root) = &common.source_root {
        config.source_root = source_root.to_string_lossy().to_string();
    }
    if let Some(schema) = &common.schema {
        config.schema_path = schema.to_string_lossy().to_string();
    }

    // The store is built once per run and only read afterwards, so sharing
    // it across worker threads needs no locking.
    let store = SchemaStore::load(Path::new(&config.schema_path));
    if store.is_empty() && common.verbose {
        print_empty_schema_warning(&config.schema_path);
    }

    let scan = scan_files(
        &config.source_root,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
        common.verbose,
    );

    if common.verbose && scan.skipped_count > 0 {
        eprintln!("{} path(s) could not be accessed", scan.skipped_count);
    }

    let mut files: Vec<String> = scan.files.into_iter().collect();
    files.sort();

    let mut issues: Vec<Issue> = files
        .par_iter()
        .flat_map(|file| check_file(file, &store))
        .collect();
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;
    let parse_error_count = issues
        .iter()
        .filter(|i| i.rule == Rule::ParseError)
        .count();

    Ok(CommandResult {
        issues,
        error_count,
        warning_count,
        parse_error_count,
        source_files_checked: files.len(),
        schema_keys_loaded: store.len(),
    })
}

/// Lint a single file. Issues come back in source order; a file that cannot
/// be read or parsed produces a single parse-error issue instead.
fn check_file(file_path: &str, store: &SchemaStore) -> Vec<Issue> {
    let code = match fs::read_to_string(file_path) {
        Ok(code) => code,
        Err(e) => return vec![Issue::parse_error(file_path, &e.to_string())],
    };

    match parse_source(code, file_path) {
        Ok(parsed) => {
            ConfigKeyVisitor::new(file_path, &parsed.source_map, store).check(&parsed.module)
        }
        Err(e) => vec![Issue::parse_error(file_path, &e.to_string())],
    }
}
