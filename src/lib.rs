//! Daily wage tracker.
//!
//! This crate records attendance, payments and wage history for a workforce
//! of daily-wage members and rolls them up into monthly summaries of days
//! worked, amount earned, amount paid and balance owed.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
