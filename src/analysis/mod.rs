//! Analysis engine: file discovery and the config-key inspection rule.

pub mod file_scanner;
pub mod visitor;

pub use file_scanner::{ScanResult, scan_files};
pub use visitor::{ACCESSOR_METHODS, CONFIG_ALIASES, ConfigKeyVisitor};
