//! Calendar month addressing for payroll runs.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A validated (year, month) pair identifying one payroll period.
///
/// Construction is the single place month bounds are checked; every
/// consumer downstream can rely on the month being 1-12 and the first
/// day existing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayMonth {
    year: i32,
    month: u32,
}

impl PayMonth {
    /// Creates a pay month, rejecting out-of-range month numbers.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayMonth;
    ///
    /// let month = PayMonth::new(2026, 1).unwrap();
    /// assert_eq!(month.to_string(), "2026-01");
    /// assert!(PayMonth::new(2026, 13).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        // NaiveDate also rejects years outside chrono's supported range.
        if month < 1 || month > 12 || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidMonth { month });
        }

        Ok(Self { year, month })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Bounds were checked at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// The last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.days().last().unwrap_or(self.first_day())
    }

    /// Iterates every calendar day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month;
        std::iter::successors(Some(self.first_day()), |d| {
            d.checked_add_days(Days::new(1))
        })
        .take_while(move |d| d.month() == month)
    }

    /// The number of calendar days in the month.
    pub fn day_count(&self) -> usize {
        self.days().count()
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
