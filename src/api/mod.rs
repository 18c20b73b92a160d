//! HTTP API module for the payroll calculation engine.
//!
//! This module provides the REST API endpoints for computing monthly
//! salary breakdowns from validated attendance data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchSalaryRequest, SalaryRequest};
pub use response::{ApiError, BatchEntryResponse, BatchSalaryResponse};
pub use state::AppState;
