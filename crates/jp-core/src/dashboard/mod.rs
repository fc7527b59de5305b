//! Dashboard domain module.
//!
//! The dashboard has no state of its own: everything it shows is
//! derived from a small snapshot of numeric and boolean signals plus
//! the time of day. Derivation is pure and recomputed on every input
//! change.

pub mod signals;
pub mod state;
pub mod time;

pub use signals::DashboardSignals;
pub use state::{quota_percent, DashboardState, DashboardVariant, FocusArea};
pub use time::TimeOfDay;
