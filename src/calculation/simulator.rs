//! Gross-to-net simulation pipeline.
//!
//! Runs the fixed sequence of payroll stages for one request against the
//! country's rule set:
//!
//! 1. Gross aggregation (salary plus allowances)
//! 2. Employee social contribution
//! 3. Taxable salary
//! 4. Progressive income tax
//! 5. Family relief (not applied, family inputs are only echoed)
//! 6. Net salary
//! 7. Employer cost

use crate::config::RuleRegistry;
use crate::error::EngineResult;
use crate::models::{SimulationRequest, SimulationResult};

use super::gross_aggregation::aggregate_gross;
use super::income_tax::calculate_income_tax;
use super::social_contribution::{calculate_employee_contribution, calculate_employer_cost};

/// Simulates the gross-to-net computation for a request.
///
/// The function is pure: it reads the registry, never mutates anything and
/// returns the same result for the same request.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
///   when the gross salary or an allowance is negative or too large
/// - [`EngineError::UnsupportedCountry`](crate::error::EngineError::UnsupportedCountry)
///   when the registry has no rule set for the country
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::simulate_gross_to_net;
/// use payroll_engine::config::RuleRegistry;
/// use payroll_engine::models::SimulationRequest;
/// use rust_decimal::Decimal;
///
/// let registry = RuleRegistry::builtin().unwrap();
/// let request = SimulationRequest::new(Decimal::from(100_000), "benin");
///
/// let result = simulate_gross_to_net(&request, &registry).unwrap();
/// assert_eq!(result.employee_social_contribution, Decimal::from(3_600));
/// assert_eq!(result.income_tax, Decimal::from(4_640));
/// assert_eq!(result.net_salary, Decimal::from(91_760));
/// ```
pub fn simulate_gross_to_net(
    request: &SimulationRequest,
    registry: &RuleRegistry,
) -> EngineResult<SimulationResult> {
    request.validate()?;
    let rule_set = registry.resolve(&request.country)?;

    let total_gross = aggregate_gross(request.gross_salary, &request.allowances);
    let employee_social_contribution = calculate_employee_contribution(total_gross, rule_set);
    let taxable_salary = total_gross - employee_social_contribution;
    let income_tax = calculate_income_tax(taxable_salary, rule_set.tax_brackets());
    let net_salary = taxable_salary - income_tax.income_tax;
    let employer_cost = calculate_employer_cost(total_gross, rule_set);

    Ok(SimulationResult {
        requested_gross_salary: request.gross_salary,
        total_gross_with_allowances: total_gross,
        employee_social_contribution,
        taxable_salary,
        income_tax: income_tax.income_tax,
        net_salary,
        employer_social_contribution: employer_cost.social_contribution,
        total_employer_cost: employer_cost.total_cost,
        country: request.country.clone(),
        country_code: rule_set.code().to_string(),
        currency: rule_set.currency().to_string(),
        family_status: request.family_status.clone(),
        children_count: request.children_count,
        allowances: request.allowances.clone(),
        income_tax_breakdown: income_tax.slices,
    })
}
