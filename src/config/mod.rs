//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load salary parameters from a
//! YAML file: working days per month, the overtime multiplier, grace
//! periods, and the currency label.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ParameterLoader;
//!
//! let loader = ParameterLoader::load("./config/payroll").unwrap();
//! println!("Currency: {}", loader.parameters().currency);
//! ```

mod loader;
mod types;

pub use loader::ParameterLoader;
pub use types::SalaryParameters;
