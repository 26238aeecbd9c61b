//! Source file discovery.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: HashSet<String>,
    pub skipped_count: usize,
}

/// Walk `base_dir` (or the given include directories under it) and collect
/// all lintable source files, honoring literal and glob ignore patterns.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let mut files: HashSet<String> = HashSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            // Literal path mode: resolve against the base dir for prefix matching
            literal_ignore_paths.push(Path::new(base_dir).join(p));
        }
    }

    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        includes
            .iter()
            .filter_map(|inc| {
                let path = Path::new(base_dir).join(inc);
                if path.exists() {
                    Some(path)
                } else {
                    if verbose {
                        eprintln!(
                            "{} Include path does not exist: {}",
                            "warning:".bold().yellow(),
                            path.display()
                        );
                    }
                    None
                }
            })
            .collect()
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_scannable_file(path) {
                files.insert(path_str.into());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
