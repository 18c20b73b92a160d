//! Name-based reconciliation of imported punch rows.
//!
//! Time-clock exports identify people by a single free-form name column,
//! not by employee id, and the order of first and last name varies by
//! device. Reconciliation happens exactly once, at import time; the
//! calculation pipeline only ever sees punches already keyed by employee
//! id and never string-matches again.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::RawPunchRow;

/// One employee as known to the roster, with the name split the matcher
/// needs to build its candidate keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// The employee's id in the master data.
    pub employee_id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
}

/// The outcome of reconciling one import batch against the roster.
#[derive(Debug, Clone, Default)]
pub struct PunchReconciliation {
    /// Punch timestamps attributed to an employee, keyed by employee id.
    pub matched: HashMap<String, Vec<NaiveDateTime>>,
    /// Rows whose name matched no employee, or matched ambiguously;
    /// returned for manual review, never dropped.
    pub unmatched: Vec<RawPunchRow>,
}

/// Normalizes a name for matching: lowercased, trimmed, with internal
/// whitespace runs collapsed to a single space.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// The four concatenation variants a clock may spell a name in.
fn name_variants(first_name: &str, last_name: &str) -> [String; 4] {
    let first = normalize_name(first_name);
    let last = normalize_name(last_name);
    [
        format!("{first} {last}"),
        format!("{last} {first}"),
        format!("{first}{last}"),
        format!("{last}{first}"),
    ]
}

/// Reconciles raw punch rows against the employee roster.
///
/// Each roster entry is indexed under its four name variants. A row whose
/// normalized name hits exactly one employee's variants is attributed to
/// that employee; a name claimed by more than one employee is ambiguous,
/// and rows carrying it land in `unmatched` alongside names nobody
/// claims. Matched timestamps keep their import order per employee.
///
/// # Arguments
///
/// * `rows` - The raw punch rows from the import file
/// * `roster` - The employees eligible to receive punches
///
/// # Example
///
/// ```
/// use payroll_engine::import::{RosterEntry, reconcile_punches};
/// use payroll_engine::models::RawPunchRow;
/// use chrono::NaiveDate;
///
/// let roster = vec![RosterEntry {
///     employee_id: "emp_001".to_string(),
///     first_name: "Avery".to_string(),
///     last_name: "Collins".to_string(),
/// }];
/// let rows = vec![RawPunchRow {
///     employee_name: "COLLINS AVERY".to_string(),
///     timestamp: NaiveDate::from_ymd_opt(2026, 1, 5)
///         .unwrap()
///         .and_hms_opt(8, 57, 0)
///         .unwrap(),
/// }];
///
/// let outcome = reconcile_punches(&rows, &roster);
/// assert_eq!(outcome.matched["emp_001"].len(), 1);
/// assert!(outcome.unmatched.is_empty());
/// ```
pub fn reconcile_punches(rows: &[RawPunchRow], roster: &[RosterEntry]) -> PunchReconciliation {
    // None marks a key claimed by more than one employee.
    let mut index: HashMap<String, Option<&str>> = HashMap::new();
    for entry in roster {
        for variant in name_variants(&entry.first_name, &entry.last_name) {
            index
                .entry(variant)
                .and_modify(|slot| {
                    if slot.as_deref() != Some(entry.employee_id.as_str()) {
                        *slot = None;
                    }
                })
                .or_insert(Some(entry.employee_id.as_str()));
        }
    }

    let mut outcome = PunchReconciliation::default();
    for row in rows {
        let key = normalize_name(&row.employee_name);
        match index.get(&key) {
            Some(Some(employee_id)) => {
                outcome
                    .matched
                    .entry((*employee_id).to_string())
                    .or_default()
                    .push(row.timestamp);
            }
            _ => outcome.unmatched.push(row.clone()),
        }
    }

    outcome
}
