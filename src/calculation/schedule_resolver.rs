//! Schedule resolution for a single calendar date.
//!
//! Given an employee's schedule assignments and the template catalog, this
//! module answers one question: which work intervals was the employee
//! expected to attend on a given date? Days with no answer are simply not
//! scheduled; resolution never fails.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{ScheduleAssignment, ScheduleTemplate, WorkInterval};

/// Resolves the scheduled work intervals for one employee on one date.
///
/// The assignment whose date range contains `date` supplies the template;
/// when several ranges overlap, the assignment with the latest
/// `effective_from` wins, and among equal `effective_from` dates the
/// last-listed assignment wins. The resolved intervals are returned in
/// start-time order.
///
/// Returns an empty vector when no assignment is active, the assigned
/// template is unknown, or the template has no entry for the date's
/// weekday. Callers treat an empty result as "not scheduled": the day is
/// excluded from attendance classification entirely.
///
/// # Arguments
///
/// * `assignments` - The employee's schedule assignments, in listing order
/// * `templates` - The template catalog, keyed by template name
/// * `date` - The calendar date to resolve
pub fn resolve_intervals(
    assignments: &[ScheduleAssignment],
    templates: &HashMap<String, ScheduleTemplate>,
    date: NaiveDate,
) -> Vec<WorkInterval> {
    let weekday = date.weekday().number_from_monday() as u8;

    let winner = assignments
        .iter()
        .enumerate()
        .filter(|(_, assignment)| assignment.is_active_on(date))
        .filter_map(|(index, assignment)| {
            templates
                .get(&assignment.template)
                .and_then(|template| template.intervals_for(weekday))
                .filter(|intervals| !intervals.is_empty())
                .map(|intervals| (index, assignment, intervals))
        })
        .max_by_key(|(index, assignment, _)| (assignment.effective_from, *index));

    match winner {
        Some((_, _, intervals)) => {
            let mut resolved = intervals.to_vec();
            resolved.sort_by_key(|interval| interval.start_time);
            resolved
        }
        None => Vec::new(),
    }
}
