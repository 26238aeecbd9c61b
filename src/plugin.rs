//! Registration surface for embedding the rule in a host linter.
//!
//! A host tool discovers the rule through a factory that accepts an opaque
//! settings blob and returns a handle describing the provided rules and the
//! syntactic depth they need.

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;

/// How much of the host's analysis the rule needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Syntax trees only; no type-checking required.
    Syntax,
}

/// Descriptor for a single rule provided by the plugin.
#[derive(Debug, Clone, Copy)]
pub struct RuleInfo {
    pub name: &'static str,
    pub doc: &'static str,
    /// Prerequisite host passes, by name.
    pub requires: &'static [&'static str],
}

pub const CONFIG_KEYS_RULE: RuleInfo = RuleInfo {
    name: "config-keys",
    doc: "Check that all config keys used in the codebase are defined in the config",
    requires: &["inspect"],
};

/// Settings accepted by the plugin factory.
///
/// No specific settings are needed for now; the blob is kept so future
/// options can be added without changing the registration contract.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {}

/// Contract a host linter uses to query the plugin.
pub trait LinterPlugin {
    fn rules(&self) -> Vec<RuleInfo>;
    fn load_mode(&self) -> LoadMode;
}

pub struct ConfigLintPlugin {
    settings: Settings,
}

impl ConfigLintPlugin {
    /// Create a plugin instance from an opaque settings blob.
    pub fn new(settings: Option<Value>) -> Result<Self> {
        let settings = match settings {
            Some(value) => serde_json::from_value(value)?,
            None => Settings::default(),
        };
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl LinterPlugin for ConfigLintPlugin {
    fn rules(&self) -> Vec<RuleInfo> {
        vec![CONFIG_KEYS_RULE]
    }

    fn load_mode(&self) -> LoadMode {
        LoadMode::Syntax
    }
}
