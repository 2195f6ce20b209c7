//! Payroll rule configuration for the Payroll Simulation Engine.
//!
//! This module loads per-country rule sets (social contribution rates and
//! progressive income tax brackets) from YAML files and exposes them through
//! a read-only [`RuleRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/countries").unwrap();
//! for rule_set in loader.registry().countries() {
//!     println!("{} ({})", rule_set.name(), rule_set.code());
//! }
//! ```

mod loader;
mod registry;
mod types;

pub use loader::ConfigLoader;
pub use registry::{RuleRegistry, normalize_country_key};
pub use types::{
    ContributionRates, CountryMetadata, CountryRulesFile, IncomeTaxConfig, RuleSet, TaxBracket,
};
