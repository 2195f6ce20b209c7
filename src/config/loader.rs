//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading country rule
//! sets from YAML files into a [`RuleRegistry`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::registry::RuleRegistry;
use super::types::{CountryRulesFile, RuleSet};

/// Rule files compiled into the binary, used when no rules directory is given.
const BUILTIN_RULES: &[(&str, &str)] = &[
    (
        "countries/benin.yaml",
        include_str!("../../config/countries/benin.yaml"),
    ),
    (
        "countries/togo.yaml",
        include_str!("../../config/countries/togo.yaml"),
    ),
];

/// Loads country rule sets and provides access to the resulting registry.
///
/// # Directory Structure
///
/// The rules directory holds one YAML file per country:
/// ```text
/// config/countries/
/// ├── benin.yaml
/// └── togo.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/countries")?;
/// let rules = loader.registry().resolve("benin")?;
/// println!("Employee rate: {}", rules.employee_contribution_rate());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    registry: RuleRegistry,
}

impl ConfigLoader {
    /// Loads every `.yaml` rule file from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The directory is missing or contains no rule files
    /// - Any file contains invalid YAML or is missing a required field
    /// - Any rule set breaks a rate or bracket invariant
    /// - Two files claim the same country name, code or alias
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rule files found)", dir_str),
            });
        }

        // Directory order is platform dependent.
        files.sort();

        let mut registry = RuleRegistry::new();
        for file in &files {
            let path_str = file.display().to_string();
            let content = fs::read_to_string(file).map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;
            registry.register(Self::parse_rule_set(&path_str, &content)?)?;
        }

        Ok(Self { registry })
    }

    /// Builds a loader from the rule files embedded at compile time.
    pub fn builtin() -> EngineResult<Self> {
        let mut registry = RuleRegistry::new();
        for (name, content) in BUILTIN_RULES {
            registry.register(Self::parse_rule_set(name, content)?)?;
        }
        Ok(Self { registry })
    }

    /// Parses and validates a single rule file.
    ///
    /// `source` is only used to label errors.
    pub fn parse_rule_set(source: &str, content: &str) -> EngineResult<RuleSet> {
        let file: CountryRulesFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let rule_set = RuleSet::try_from(file)?;
        debug!(
            source,
            country = rule_set.code(),
            brackets = rule_set.tax_brackets().len(),
            "Loaded payroll rule set"
        );
        Ok(rule_set)
    }

    /// Returns the loaded registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Consumes the loader, returning the registry.
    pub fn into_registry(self) -> RuleRegistry {
        self.registry
    }
}

impl RuleRegistry {
    /// Builds a registry holding the embedded Bénin and Togo rule sets.
    pub fn builtin() -> EngineResult<Self> {
        ConfigLoader::builtin().map(ConfigLoader::into_registry)
    }
}
