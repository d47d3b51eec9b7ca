//! HTTP API module for the shift calendar engine.
//!
//! This module provides the REST API endpoint for computing a month of
//! shift-calendar hours.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DayEntryRequest};
pub use response::{ApiError, DayRow, MonthCalculation, WeekView};
pub use state::AppState;
