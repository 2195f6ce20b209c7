//! Payroll Simulation Engine
//!
//! This crate computes gross-to-net salary simulations: social contributions,
//! progressive income tax and employer cost, driven by per-country rule sets
//! loaded from YAML configuration.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
