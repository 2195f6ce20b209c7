//! Country rule registry.
//!
//! The [`RuleRegistry`] maps country names, codes and aliases to their
//! [`RuleSet`]. Lookups are case-insensitive and tolerate accents, so
//! `"Benin"`, `"benin"` and `"BÉNIN"` all resolve to the same rules.

use std::collections::{BTreeMap, HashMap};

use crate::error::{EngineError, EngineResult};

use super::types::RuleSet;

/// Read-only lookup from country identifiers to rule sets.
///
/// The registry is populated once with [`RuleRegistry::register`] and then
/// shared immutably; nothing in the calculator mutates it.
///
/// # Example
///
/// ```
/// use payroll_engine::config::RuleRegistry;
///
/// let registry = RuleRegistry::builtin().unwrap();
/// let benin = registry.resolve("BÉNIN").unwrap();
/// assert_eq!(benin.code(), "BJ");
/// assert!(registry.resolve("France").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    /// Rule sets keyed by country code.
    rule_sets: BTreeMap<String, RuleSet>,
    /// Normalized lookup key to country code.
    index: HashMap<String, String>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule set under its code, name and aliases.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRuleSet`] if a rule set with the same
    /// code is already registered, or if one of its keys already resolves to
    /// a different country.
    pub fn register(&mut self, rule_set: RuleSet) -> EngineResult<()> {
        let code = rule_set.code().to_string();
        if self.rule_sets.contains_key(&code) {
            return Err(EngineError::InvalidRuleSet {
                message: format!("country code {} is already registered", code),
                country: code,
            });
        }

        let keys: Vec<String> = std::iter::once(rule_set.code())
            .chain(std::iter::once(rule_set.name()))
            .chain(rule_set.aliases().iter().map(String::as_str))
            .map(normalize_country_key)
            .filter(|key| !key.is_empty())
            .collect();

        for key in &keys {
            if let Some(owner) = self.index.get(key).filter(|owner| **owner != code) {
                return Err(EngineError::InvalidRuleSet {
                    country: code,
                    message: format!("'{}' is already registered for {}", key, owner),
                });
            }
        }

        for key in keys {
            self.index.insert(key, code.clone());
        }
        self.rule_sets.insert(code, rule_set);
        Ok(())
    }

    /// Resolves a country name, code or alias to its rule set.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedCountry`] carrying `country` verbatim
    /// when nothing matches.
    pub fn resolve(&self, country: &str) -> EngineResult<&RuleSet> {
        self.index
            .get(&normalize_country_key(country))
            .and_then(|code| self.rule_sets.get(code))
            .ok_or_else(|| EngineError::UnsupportedCountry {
                country: country.to_string(),
            })
    }

    /// Returns the registered rule sets ordered by country code.
    pub fn countries(&self) -> impl Iterator<Item = &RuleSet> {
        self.rule_sets.values()
    }

    /// Returns the number of registered countries.
    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    /// Returns true when no country is registered.
    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }
}

/// Normalizes a country identifier for lookup.
///
/// Trims and collapses whitespace, lowercases, strips combining marks and
/// folds the accented Latin letters used in francophone country names.
///
/// ```
/// use payroll_engine::config::normalize_country_key;
///
/// assert_eq!(normalize_country_key("  BÉNIN "), "benin");
/// assert_eq!(normalize_country_key("Côte  d'Ivoire"), "cote d'ivoire");
/// ```
pub fn normalize_country_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
