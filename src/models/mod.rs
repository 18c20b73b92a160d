//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_record;
mod employee;
mod pay_month;
mod punch;
mod salary_result;
mod schedule;

pub use day_record::{AttendanceOverride, DayRecord, DayStatus, PendingTreatment};
pub use employee::{Compensation, EmployeeProfile};
pub use pay_month::PayMonth;
pub use punch::{DayPunches, RawPunchRow};
pub use salary_result::{CalculationMethod, SalaryBreakdown, ValidationRecord};
pub use schedule::{ScheduleAssignment, ScheduleTemplate, WorkInterval};
