//! Request types for the Payroll Simulation Engine API.
//!
//! This module defines the JSON body accepted by the
//! `/api/simulation/brut-to-net` endpoint and its coercion into a
//! [`SimulationRequest`]. Amounts may arrive as JSON numbers or numeric
//! strings, as front-end forms tend to send them.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::{MAX_DECIMAL_PLACES, SimulationRequest};

/// Request body for the `/api/simulation/brut-to-net` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequestBody {
    /// Base gross salary, as a number or numeric string.
    #[serde(default)]
    pub gross_salary: Option<Value>,
    /// Country name, code or alias.
    #[serde(default)]
    pub country: Option<String>,
    /// Optional family status descriptor.
    #[serde(default)]
    pub family_status: Option<String>,
    /// Number of children, as an integer or integer string.
    #[serde(default)]
    pub children: Option<Value>,
    /// Named allowances, as numbers or numeric strings.
    #[serde(default)]
    pub other_allowances: Option<BTreeMap<String, Value>>,
}

impl SimulationRequestBody {
    /// Coerces the body into a [`SimulationRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when `grossSalary` or `country`
    /// is missing, or when an amount or `children` cannot be read as a number.
    /// Range checks (negative amounts) are left to the calculator.
    pub fn into_simulation_request(self) -> EngineResult<SimulationRequest> {
        let gross_salary = match self.gross_salary {
            None | Some(Value::Null) => {
                return Err(EngineError::invalid_input("grossSalary", "is required"));
            }
            Some(value) => parse_amount("grossSalary", &value)?,
        };

        let country = match self.country {
            Some(country) if !country.trim().is_empty() => country,
            _ => return Err(EngineError::invalid_input("country", "is required")),
        };

        let children_count = parse_children(self.children)?;

        let allowances = self
            .other_allowances
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| {
                let amount = parse_amount(&format!("otherAllowances.{}", name), &value)?;
                Ok((name, amount))
            })
            .collect::<EngineResult<BTreeMap<String, Decimal>>>()?;

        Ok(SimulationRequest {
            gross_salary,
            country,
            family_status: self.family_status,
            children_count,
            allowances,
        })
    }
}

/// Reads a JSON number or numeric string as an exact decimal.
fn parse_amount(field: &str, value: &Value) -> EngineResult<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        _ => return Err(EngineError::invalid_input(field, "must be a number")),
    };

    let places = literal_decimal_places(&text)
        .ok_or_else(|| EngineError::invalid_input(field, format!("'{}' is not a number", text)))?;
    if places > i64::from(MAX_DECIMAL_PLACES) {
        return Err(EngineError::invalid_input(
            field,
            format!("must have at most {} decimal places", MAX_DECIMAL_PLACES),
        ));
    }

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| EngineError::invalid_input(field, format!("'{}' is out of range", text)))
}

/// Checks that `text` is a plain decimal literal (optional sign, digits,
/// optional fraction, optional exponent) and returns how many decimal places
/// its value needs. Digit separators, hex and bare fractions like `.5` are
/// not literals.
fn literal_decimal_places(text: &str) -> Option<i64> {
    let unsigned = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(&['e', 'E'][..]) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((_, "")) => return None,
        Some((integer, fraction)) => (integer, fraction),
        None => (mantissa, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
        return None;
    }

    let digits = format!("{}{}", integer, fraction);
    let significant = digits.trim_end_matches('0').len() as i64;
    (significant - integer.len() as i64).checked_sub(exponent)
}

/// Reads the number of children; absent, null or empty means none.
///
/// Fractional counts are truncated, so `2.5` and `"2.5"` both read as 2.
fn parse_children(value: Option<Value>) -> EngineResult<u32> {
    let invalid = || EngineError::invalid_input("children", "must be a non-negative integer");

    let count = match value {
        None | Some(Value::Null) => return Ok(0),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) if text.trim().is_empty() => return Ok(0),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    count
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(f64::trunc)
        .filter(|n| *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn body(value: Value) -> SimulationRequestBody {
        serde_json::from_value(value).unwrap()
    }

    fn invalid_field(result: EngineResult<SimulationRequest>) -> String {
        match result {
            Err(EngineError::InvalidInput { field, .. }) => field,
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_full_body() {
        let request = body(json!({
            "grossSalary": 600000,
            "country": "benin",
            "familyStatus": "married",
            "children": 2,
            "otherAllowances": { "transport": 25000, "housing": "50000" }
        }))
        .into_simulation_request()
        .unwrap();

        assert_eq!(request.gross_salary, dec("600000"));
        assert_eq!(request.country, "benin");
        assert_eq!(request.family_status.as_deref(), Some("married"));
        assert_eq!(request.children_count, 2);
        assert_eq!(request.allowances["transport"], dec("25000"));
        assert_eq!(request.allowances["housing"], dec("50000"));
    }

    #[test]
    fn test_gross_salary_string_is_coerced() {
        let request = body(json!({ "grossSalary": " 100000.50 ", "country": "benin" }))
            .into_simulation_request()
            .unwrap();
        assert_eq!(request.gross_salary, dec("100000.50"));
    }

    #[test]
    fn test_fractional_number_is_exact() {
        let request = body(json!({ "grossSalary": 0.1, "country": "benin" }))
            .into_simulation_request()
            .unwrap();
        assert_eq!(request.gross_salary, dec("0.1"));
    }

    #[test]
    fn test_missing_gross_salary_rejected() {
        let result = body(json!({ "country": "benin" })).into_simulation_request();
        assert_eq!(invalid_field(result), "grossSalary");
    }

    #[test]
    fn test_null_gross_salary_rejected() {
        let result = body(json!({ "grossSalary": null, "country": "benin" }))
            .into_simulation_request();
        assert_eq!(invalid_field(result), "grossSalary");
    }

    #[test]
    fn test_non_numeric_gross_salary_rejected() {
        for value in [json!("abc"), json!(true), json!([1]), json!("NaN")] {
            let result = body(json!({ "grossSalary": value, "country": "benin" }))
                .into_simulation_request();
            assert_eq!(invalid_field(result), "grossSalary");
        }
    }

    #[test]
    fn test_missing_or_blank_country_rejected() {
        let result = body(json!({ "grossSalary": 1000 })).into_simulation_request();
        assert_eq!(invalid_field(result), "country");

        let result = body(json!({ "grossSalary": 1000, "country": "  " }))
            .into_simulation_request();
        assert_eq!(invalid_field(result), "country");
    }

    #[test]
    fn test_negative_gross_salary_is_passed_through() {
        // Range checks belong to the calculator.
        let request = body(json!({ "grossSalary": -500, "country": "benin" }))
            .into_simulation_request()
            .unwrap();
        assert_eq!(request.gross_salary, dec("-500"));
    }

    #[test]
    fn test_children_coercion() {
        let cases = [
            (json!(null), 0),
            (json!(0), 0),
            (json!(3), 3),
            (json!(3.0), 3),
            (json!("2"), 2),
            (json!(""), 0),
            (json!(1.5), 1),
            (json!("2.5"), 2),
        ];
        for (children, expected) in cases {
            let request = body(json!({
                "grossSalary": 1000,
                "country": "benin",
                "children": children
            }))
            .into_simulation_request()
            .unwrap();
            assert_eq!(request.children_count, expected);
        }
    }

    #[test]
    fn test_invalid_children_rejected() {
        for children in [json!(-1), json!("-2"), json!("two"), json!("NaN"), json!({})] {
            let result = body(json!({
                "grossSalary": 1000,
                "country": "benin",
                "children": children
            }))
            .into_simulation_request();
            assert_eq!(invalid_field(result), "children");
        }
    }

    #[test]
    fn test_non_numeric_allowance_rejected() {
        let result = body(json!({
            "grossSalary": 1000,
            "country": "benin",
            "otherAllowances": { "transport": "a lot" }
        }))
        .into_simulation_request();
        assert_eq!(invalid_field(result), "otherAllowances.transport");
    }

    #[test]
    fn test_null_allowance_rejected() {
        let result = body(json!({
            "grossSalary": 1000,
            "country": "benin",
            "otherAllowances": { "bonus": null }
        }))
        .into_simulation_request();
        assert_eq!(invalid_field(result), "otherAllowances.bonus");
    }

    #[test]
    fn test_scientific_notation_accepted() {
        let request = body(json!({ "grossSalary": "1e5", "country": "benin" }))
            .into_simulation_request()
            .unwrap();
        assert_eq!(request.gross_salary, dec("100000"));
    }

    fn invalid_message(result: EngineResult<SimulationRequest>) -> String {
        match result {
            Err(EngineError::InvalidInput { message, .. }) => message,
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_digit_separators_rejected() {
        for value in ["1_000", "1,000", "0x10", ".5", "5.", "1e", "--5"] {
            let result = body(json!({ "grossSalary": value, "country": "benin" }))
                .into_simulation_request();
            assert_eq!(
                invalid_message(result),
                format!("'{}' is not a number", value),
                "value {:?}",
                value
            );
        }
    }

    #[test]
    fn test_explicit_plus_sign_accepted() {
        let request = body(json!({ "grossSalary": "+5", "country": "benin" }))
            .into_simulation_request()
            .unwrap();
        assert_eq!(request.gross_salary, dec("5"));
    }

    #[test]
    fn test_unrepresentable_number_reported_as_out_of_range() {
        let result = body(json!({ "grossSalary": "1e40", "country": "benin" }))
            .into_simulation_request();
        assert_eq!(invalid_message(result), "'1e40' is out of range");
    }

    #[test]
    fn test_too_many_decimal_places_rejected_before_rounding() {
        for value in ["999999999999999.99999999999999", "1e-40", "0.0000001"] {
            let result = body(json!({
                "grossSalary": 1000,
                "country": "benin",
                "otherAllowances": { "bonus": value }
            }))
            .into_simulation_request();
            match result {
                Err(EngineError::InvalidInput { field, message }) => {
                    assert_eq!(field, "otherAllowances.bonus");
                    assert_eq!(message, "must have at most 6 decimal places");
                }
                other => panic!("Expected InvalidInput for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_decimal_places_count_ignores_trailing_zeros() {
        assert_eq!(literal_decimal_places("100.5000"), Some(1));
        assert_eq!(literal_decimal_places("1.50e1"), Some(0));
        assert_eq!(literal_decimal_places("10e-1"), Some(0));
        assert_eq!(literal_decimal_places("25e-8"), Some(8));
        assert_eq!(literal_decimal_places("abc"), None);
    }
}
