//! Configuration types for payroll rule sets.
//!
//! This module contains the strongly-typed structures deserialized from the
//! per-country YAML rule files, and the validated [`RuleSet`] built from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifying information about the country a rule set applies to.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryMetadata {
    /// Short country code (e.g., "BJ").
    pub code: String,
    /// The human-readable country name (e.g., "Bénin").
    pub name: String,
    /// The currency amounts are expressed in (e.g., "XOF").
    pub currency: String,
    /// The date from which these rules apply.
    pub effective_date: NaiveDate,
    /// Additional names the registry should resolve to this country.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Social contribution rates, as fractions of total gross pay.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionRates {
    /// Share withheld from the employee.
    pub employee_rate: Decimal,
    /// Share paid on top by the employer.
    pub employer_rate: Decimal,
}

/// A single progressive income tax bracket.
///
/// A bracket taxes the slice of income between the previous bracket's upper
/// bound (or zero) and its own `upper_bound`. The last bracket has no upper
/// bound and absorbs any remaining income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    /// Upper bound of the slice taxed by this bracket, `None` when unbounded.
    #[serde(default, alias = "upper_bound")]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied to the slice.
    pub rate: Decimal,
}

/// Income tax section of a rule file.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxConfig {
    /// Ordered brackets, lowest first.
    pub brackets: Vec<TaxBracket>,
}

/// Top-level structure of a `countries/*.yaml` rule file.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRulesFile {
    /// Country metadata.
    pub country: CountryMetadata,
    /// Social contribution rates.
    pub contributions: ContributionRates,
    /// Income tax brackets.
    pub income_tax: IncomeTaxConfig,
}

/// The validated payroll parameters for one country.
///
/// A `RuleSet` can only be built through [`RuleSet::new`], which checks that
/// rates are fractions in `[0, 1]` and that the tax brackets are contiguous,
/// strictly increasing and end with an unbounded bracket.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{ContributionRates, CountryMetadata, RuleSet, TaxBracket};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rule_set = RuleSet::new(
///     CountryMetadata {
///         code: "XX".to_string(),
///         name: "Flatland".to_string(),
///         currency: "XOF".to_string(),
///         effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///         aliases: vec![],
///     },
///     ContributionRates {
///         employee_rate: Decimal::new(5, 2),
///         employer_rate: Decimal::new(10, 2),
///     },
///     vec![TaxBracket { upper_bound: None, rate: Decimal::new(20, 2) }],
/// )
/// .unwrap();
///
/// assert_eq!(rule_set.code(), "XX");
/// assert_eq!(rule_set.tax_brackets().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    code: String,
    name: String,
    currency: String,
    effective_date: NaiveDate,
    aliases: Vec<String>,
    employee_contribution_rate: Decimal,
    employer_contribution_rate: Decimal,
    tax_brackets: Vec<TaxBracket>,
}

impl RuleSet {
    /// Builds a rule set, validating its rates and brackets.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRuleSet`] if:
    /// - the code or name is blank
    /// - a contribution or marginal rate is outside `[0, 1]`
    /// - there are no brackets
    /// - a bound is not positive or not strictly greater than the previous one
    /// - a bracket other than the last is unbounded, or the last one is bounded
    pub fn new(
        metadata: CountryMetadata,
        contributions: ContributionRates,
        tax_brackets: Vec<TaxBracket>,
    ) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidRuleSet {
            country: metadata.code.clone(),
            message,
        };

        if metadata.code.trim().is_empty() || metadata.name.trim().is_empty() {
            return Err(invalid("country code and name are required".to_string()));
        }

        check_fraction("employee contribution rate", contributions.employee_rate)
            .map_err(&invalid)?;
        check_fraction("employer contribution rate", contributions.employer_rate)
            .map_err(&invalid)?;

        let Some((last, bounded)) = tax_brackets.split_last() else {
            return Err(invalid("at least one tax bracket is required".to_string()));
        };

        let mut previous = Decimal::ZERO;
        for (index, bracket) in bounded.iter().enumerate() {
            let upper = bracket.upper_bound.ok_or_else(|| {
                invalid(format!(
                    "bracket {} is unbounded but is not the last bracket",
                    index + 1
                ))
            })?;
            if upper <= previous {
                return Err(invalid(format!(
                    "bracket {} upper bound {} must be greater than {}",
                    index + 1,
                    upper,
                    previous
                )));
            }
            check_fraction(&format!("bracket {} rate", index + 1), bracket.rate)
                .map_err(&invalid)?;
            previous = upper;
        }

        if last.upper_bound.is_some() {
            return Err(invalid("the last tax bracket must be unbounded".to_string()));
        }
        check_fraction(
            &format!("bracket {} rate", tax_brackets.len()),
            last.rate,
        )
        .map_err(&invalid)?;

        Ok(Self {
            code: metadata.code,
            name: metadata.name,
            currency: metadata.currency,
            effective_date: metadata.effective_date,
            aliases: metadata.aliases,
            employee_contribution_rate: contributions.employee_rate,
            employer_contribution_rate: contributions.employer_rate,
            tax_brackets,
        })
    }

    /// Returns the short country code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display name of the country.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency code amounts are expressed in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the date from which the rules apply.
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    /// Returns the extra names registered for this country.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the employee social contribution rate.
    pub fn employee_contribution_rate(&self) -> Decimal {
        self.employee_contribution_rate
    }

    /// Returns the employer social contribution rate.
    pub fn employer_contribution_rate(&self) -> Decimal {
        self.employer_contribution_rate
    }

    /// Returns the ordered tax brackets, lowest first.
    pub fn tax_brackets(&self) -> &[TaxBracket] {
        &self.tax_brackets
    }
}

impl TryFrom<CountryRulesFile> for RuleSet {
    type Error = EngineError;

    fn try_from(file: CountryRulesFile) -> EngineResult<Self> {
        RuleSet::new(file.country, file.contributions, file.income_tax.brackets)
    }
}

fn check_fraction(label: &str, value: Decimal) -> Result<(), String> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(format!("{} {} must be between 0 and 1", label, value));
    }
    Ok(())
}
