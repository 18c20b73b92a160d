//! Import-time reconciliation of raw time-clock data.

mod name_matching;

pub use name_matching::{PunchReconciliation, RosterEntry, normalize_name, reconcile_punches};
