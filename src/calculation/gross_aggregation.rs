//! Gross pay aggregation.
//!
//! Adds every allowance to the base gross salary. All allowances are
//! currently treated as taxable; none are set aside.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

/// Returns the gross salary plus the sum of all allowances.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate_gross;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let mut allowances = BTreeMap::new();
/// allowances.insert("transport".to_string(), Decimal::from(25_000));
/// allowances.insert("housing".to_string(), Decimal::from(50_000));
///
/// let total = aggregate_gross(Decimal::from(600_000), &allowances);
/// assert_eq!(total, Decimal::from(675_000));
/// ```
pub fn aggregate_gross(gross_salary: Decimal, allowances: &BTreeMap<String, Decimal>) -> Decimal {
    gross_salary + allowances.values().copied().sum::<Decimal>()
}
