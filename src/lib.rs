//! Payroll calculation engine for attendance-driven salaries.
//!
//! This crate turns raw time-clock punches into monthly salary breakdowns:
//! punches are collapsed into per-day entry/exit pairs, classified against
//! the employee's work schedule, aggregated into monthly attendance totals,
//! and priced with either the standard (deduction-based) or the worked-days
//! (accrual-based) salary formula.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod import;
pub mod models;
pub mod store;
