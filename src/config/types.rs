//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed salary parameters that are
//! deserialized from the YAML parameter file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Tunable parameters of the salary formulas.
///
/// Injected into the engine at construction; nothing reads these from
/// global state. Every field has a default, so a parameter file only
/// needs to spell out what it changes.
///
/// # Example
///
/// ```
/// use payroll_engine::config::SalaryParameters;
///
/// let parameters = SalaryParameters::default();
/// assert_eq!(parameters.working_days_per_month, 22);
/// assert_eq!(parameters.lateness_grace_minutes, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SalaryParameters {
    /// Working days a full month is priced at.
    #[serde(default = "default_working_days_per_month")]
    pub working_days_per_month: u32,
    /// Multiplier applied to the hourly rate for derived overtime rates.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// Minutes of lateness forgiven before deductions start.
    #[serde(default = "default_grace_minutes")]
    pub lateness_grace_minutes: i64,
    /// Minutes of early departure forgiven before deductions start.
    #[serde(default = "default_grace_minutes")]
    pub early_departure_grace_minutes: i64,
    /// Currency label stamped on every breakdown.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for SalaryParameters {
    fn default() -> Self {
        Self {
            working_days_per_month: default_working_days_per_month(),
            overtime_multiplier: default_overtime_multiplier(),
            lateness_grace_minutes: default_grace_minutes(),
            early_departure_grace_minutes: default_grace_minutes(),
            currency: default_currency(),
        }
    }
}

impl SalaryParameters {
    /// Checks the parameter values are usable by the formulas.
    ///
    /// `working_days_per_month` must stay within a calendar month so it can
    /// serve as a divisor and an hours multiplier. The loader runs this on
    /// every file it reads; callers building parameters programmatically
    /// get the same check when rates are derived.
    pub fn validate(&self) -> EngineResult<()> {
        if self.working_days_per_month < 1 {
            return Err(invalid("working_days_per_month must be at least 1"));
        }
        if self.working_days_per_month > 31 {
            return Err(invalid("working_days_per_month must not exceed 31"));
        }
        if self.overtime_multiplier < Decimal::ZERO {
            return Err(invalid("overtime_multiplier must not be negative"));
        }
        if self.lateness_grace_minutes < 0 || self.early_departure_grace_minutes < 0 {
            return Err(invalid("grace minutes must not be negative"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidParameters {
        message: message.to_string(),
    }
}

fn default_working_days_per_month() -> u32 {
    22
}

fn default_overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

fn default_grace_minutes() -> i64 {
    15
}

fn default_currency() -> String {
    "USD".to_string()
}
