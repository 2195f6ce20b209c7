//! Calculation logic for the Payroll Simulation Engine.
//!
//! This module contains the stages of the gross-to-net computation: gross
//! aggregation, employee and employer social contributions, progressive
//! income tax, and the pipeline that chains them into a simulation result.

mod gross_aggregation;
mod income_tax;
mod simulator;
mod social_contribution;

pub use gross_aggregation::aggregate_gross;
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use simulator::simulate_gross_to_net;
pub use social_contribution::{
    EmployerCost, calculate_employee_contribution, calculate_employer_cost,
};
