//! HTTP API module for the Payroll Simulation Engine.
//!
//! This module provides the REST endpoints that expose the gross-to-net
//! simulator and the list of supported countries.

mod cors;
mod handlers;
mod request;
mod response;
mod state;

pub use cors::{DEFAULT_CORS_ORIGIN, build_cors_layer};
pub use handlers::create_router;
pub use request::SimulationRequestBody;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
