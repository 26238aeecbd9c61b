//! Configlint - static analysis for configuration key usage.
//!
//! Configlint is a CLI tool and library that checks every configuration key
//! referenced in source code (via calls like `config.GetString("some.key")`)
//! against a reference configuration schema. A typo'd or removed key compiles
//! fine but silently returns a zero value at runtime; configlint catches it
//! before that happens.
//!
//! ## Module Structure
//!
//! - `analysis`: File scanning and the config-key AST visitor (the rule itself)
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Tool configuration file loading and parsing
//! - `issue`: Issue type definitions
//! - `parsers`: Source file parsing (swc)
//! - `plugin`: Registration surface for embedding the rule in a host linter
//! - `reporter`: Cargo-style issue rendering
//! - `schema`: Reference configuration schema store

pub mod analysis;
pub mod cli;
pub mod config;
pub mod issue;
pub mod parsers;
pub mod plugin;
pub mod reporter;
pub mod schema;
