//! HTTP API for the wage tracker.
//!
//! This module provides the REST endpoints for recording attendance,
//! payments and wages, and for reading monthly summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, CalculationRequest, DateQuery, GroupRequest, MonthQuery,
    PaymentEntryRequest, PaymentRequest, PeriodRequest, WageRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::{AppState, USER_HEADER};
