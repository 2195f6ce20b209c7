//! Social contribution calculation functionality.
//!
//! This module computes the employee share withheld from gross pay and the
//! employer share paid on top of it, from the country's rule set.

use rust_decimal::Decimal;

use crate::config::RuleSet;

/// The employer side of the payroll cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployerCost {
    /// Social contribution paid by the employer.
    pub social_contribution: Decimal,
    /// Gross pay plus the employer contribution.
    pub total_cost: Decimal,
}

/// Returns the social contribution withheld from the employee.
///
/// This is `total_gross * employee_contribution_rate`.
pub fn calculate_employee_contribution(total_gross: Decimal, rule_set: &RuleSet) -> Decimal {
    total_gross * rule_set.employee_contribution_rate()
}

/// Returns the employer contribution and the resulting total employer cost.
pub fn calculate_employer_cost(total_gross: Decimal, rule_set: &RuleSet) -> EmployerCost {
    let social_contribution = total_gross * rule_set.employer_contribution_rate();
    EmployerCost {
        social_contribution,
        total_cost: total_gross + social_contribution,
    }
}
