//! Simulation result models for the Payroll Simulation Engine.
//!
//! This module contains the [`SimulationResult`] type and the [`TaxSlice`]
//! lines that explain how the income tax was built up bracket by bracket.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The portion of taxable salary taxed by a single bracket.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxSlice;
/// use rust_decimal::Decimal;
///
/// let slice = TaxSlice {
///     lower_bound: Decimal::from(50_000),
///     upper_bound: Some(Decimal::from(130_000)),
///     rate: Decimal::new(10, 2),
///     taxed_amount: Decimal::from(46_400),
///     tax: Decimal::from(4_640),
/// };
/// assert_eq!(slice.taxed_amount * slice.rate, slice.tax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSlice {
    /// Where the bracket starts.
    pub lower_bound: Decimal,
    /// Where the bracket ends, `None` for the unbounded top bracket.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate of the bracket.
    pub rate: Decimal,
    /// The part of taxable salary falling in this bracket.
    pub taxed_amount: Decimal,
    /// `taxed_amount * rate`.
    pub tax: Decimal,
}

/// The complete outcome of a gross-to-net simulation.
///
/// The amounts always satisfy:
/// - `taxable_salary = total_gross_with_allowances - employee_social_contribution`
/// - `net_salary = taxable_salary - income_tax`
/// - `total_employer_cost = total_gross_with_allowances + employer_social_contribution`
/// - `income_tax` is the sum of `income_tax_breakdown` taxes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// The gross salary as requested, before allowances.
    pub requested_gross_salary: Decimal,
    /// Gross salary plus every allowance.
    pub total_gross_with_allowances: Decimal,
    /// Social contribution withheld from the employee.
    pub employee_social_contribution: Decimal,
    /// Base on which income tax is computed.
    pub taxable_salary: Decimal,
    /// Progressive income tax.
    pub income_tax: Decimal,
    /// Amount paid to the employee.
    pub net_salary: Decimal,
    /// Social contribution paid on top by the employer.
    pub employer_social_contribution: Decimal,
    /// Everything the employer pays.
    pub total_employer_cost: Decimal,
    /// Country as supplied by the caller.
    pub country: String,
    /// Code of the rule set that was applied.
    pub country_code: String,
    /// Currency of every amount in this result.
    pub currency: String,
    /// Family status as supplied by the caller.
    pub family_status: Option<String>,
    /// Number of children as supplied by the caller.
    pub children_count: u32,
    /// Allowances as supplied by the caller.
    pub allowances: BTreeMap<String, Decimal>,
    /// Per-bracket detail of the income tax.
    pub income_tax_breakdown: Vec<TaxSlice>,
}
