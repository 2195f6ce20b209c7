//! Simulation request model.
//!
//! This module defines the [`SimulationRequest`] consumed by the gross-to-net
//! calculator, along with its input validation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest amount accepted for a salary or allowance (10^15).
///
/// Keeping inputs below this bound guarantees that no intermediate decimal
/// operation can overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Most decimal places accepted for a salary or allowance.
///
/// Together with [`MAX_AMOUNT`] this keeps sums of amounts within the 28
/// significant digits a [`Decimal`] holds, so no input digit is rounded away.
pub const MAX_DECIMAL_PLACES: u32 = 6;

/// Everything needed to simulate one gross-to-net salary computation.
///
/// `family_status` and `children_count` are carried through to the result
/// but do not currently change any computed amount.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SimulationRequest;
/// use rust_decimal::Decimal;
///
/// let request = SimulationRequest::new(Decimal::from(100_000), "benin")
///     .with_allowance("transport", Decimal::from(25_000))
///     .with_family(Some("married".to_string()), 2);
///
/// assert_eq!(request.allowances.len(), 1);
/// assert_eq!(request.children_count, 2);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Base gross salary before allowances.
    pub gross_salary: Decimal,
    /// Country identifier, resolved through the rule registry.
    pub country: String,
    /// Optional family status descriptor.
    #[serde(default)]
    pub family_status: Option<String>,
    /// Number of dependent children.
    #[serde(default)]
    pub children_count: u32,
    /// Named allowances, all added to gross pay as taxable amounts.
    #[serde(default)]
    pub allowances: BTreeMap<String, Decimal>,
}

impl SimulationRequest {
    /// Creates a request with no allowances and no family information.
    pub fn new(gross_salary: Decimal, country: impl Into<String>) -> Self {
        Self {
            gross_salary,
            country: country.into(),
            family_status: None,
            children_count: 0,
            allowances: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a named allowance.
    pub fn with_allowance(mut self, name: impl Into<String>, amount: Decimal) -> Self {
        self.allowances.insert(name.into(), amount);
        self
    }

    /// Sets the family status and number of children.
    pub fn with_family(mut self, family_status: Option<String>, children_count: u32) -> Self {
        self.family_status = family_status;
        self.children_count = children_count;
        self
    }

    /// Checks that every amount is non-negative and within [`MAX_AMOUNT`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the offending field
    /// (`grossSalary` or `otherAllowances.<name>`).
    pub fn validate(&self) -> EngineResult<()> {
        check_amount("grossSalary", self.gross_salary)?;
        for (name, amount) in &self.allowances {
            check_amount(&format!("otherAllowances.{}", name), *amount)?;
        }
        Ok(())
    }
}

fn check_amount(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::invalid_input(field, "must not be negative"));
    }
    if amount > MAX_AMOUNT {
        return Err(EngineError::invalid_input(
            field,
            format!("must not exceed {}", MAX_AMOUNT),
        ));
    }
    if amount.normalize().scale() > MAX_DECIMAL_PLACES {
        return Err(EngineError::invalid_input(
            field,
            format!("must have at most {} decimal places", MAX_DECIMAL_PLACES),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_max_amount_is_ten_to_the_fifteenth() {
        assert_eq!(MAX_AMOUNT, dec("1000000000000000"));
    }

    #[test]
    fn test_valid_request_passes() {
        let request = SimulationRequest::new(dec("100000"), "benin")
            .with_allowance("transport", dec("25000"))
            .with_allowance("housing", dec("0"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_zero_gross_salary_is_valid() {
        assert!(SimulationRequest::new(dec("0"), "togo").validate().is_ok());
    }

    #[test]
    fn test_negative_zero_is_valid() {
        let request = SimulationRequest::new(-Decimal::ZERO, "togo");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_negative_gross_salary_rejected() {
        match SimulationRequest::new(dec("-500"), "benin").validate() {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "grossSalary");
                assert_eq!(message, "must not be negative");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_allowance_rejected() {
        let request =
            SimulationRequest::new(dec("100000"), "benin").with_allowance("bonus", dec("-1"));

        match request.validate() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "otherAllowances.bonus");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_amount_above_maximum_rejected() {
        let request = SimulationRequest::new(MAX_AMOUNT + Decimal::ONE, "benin");
        assert!(matches!(
            request.validate(),
            Err(EngineError::InvalidInput { .. })
        ));
        assert!(SimulationRequest::new(MAX_AMOUNT, "benin").validate().is_ok());
    }

    #[test]
    fn test_amount_with_too_many_decimal_places_rejected() {
        let request = SimulationRequest::new(dec("999999999999999"), "benin")
            .with_allowance("rounding", dec("0.0000001"));

        match request.validate() {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "otherAllowances.rounding");
                assert_eq!(message, "must have at most 6 decimal places");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_decimal_places() {
        let request = SimulationRequest::new(dec("100.5000000000"), "benin")
            .with_allowance("meal", dec("0.000001"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_with_allowance_replaces_existing_name() {
        let request = SimulationRequest::new(dec("1"), "benin")
            .with_allowance("transport", dec("10"))
            .with_allowance("transport", dec("20"));

        assert_eq!(request.allowances.len(), 1);
        assert_eq!(request.allowances["transport"], dec("20"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"grossSalary": "100000", "country": "benin"}"#;

        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.gross_salary, dec("100000"));
        assert_eq!(request.family_status, None);
        assert_eq!(request.children_count, 0);
        assert!(request.allowances.is_empty());
    }
}
