//! Core data models for the Payroll Simulation Engine.
//!
//! This module contains the request and result types exchanged with the
//! gross-to-net calculator.

mod simulation_request;
mod simulation_result;

pub use simulation_request::{MAX_AMOUNT, MAX_DECIMAL_PLACES, SimulationRequest};
pub use simulation_result::{SimulationResult, TaxSlice};
