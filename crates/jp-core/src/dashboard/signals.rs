//! Input signals for dashboard state derivation.

use serde::{Deserialize, Serialize};

/// The signal vector the dashboard variant is derived from.
///
/// `quota_used <= quota_total` is assumed but unchecked; the inputs
/// are mock data standing in for a future API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSignals {
    /// First time the user lands on the dashboard (right after
    /// onboarding completion).
    pub is_first_login: bool,
    /// Applications sent today
    pub quota_used: u32,
    /// Daily application quota
    pub quota_total: u32,
    /// New job listings spotted since the last visit
    pub new_jobs_count: u32,
    /// Matching rate, 0–100
    pub matching_rate: u8,
}

impl Default for DashboardSignals {
    fn default() -> Self {
        Self {
            is_first_login: false,
            quota_used: 0,
            quota_total: 15,
            new_jobs_count: 0,
            matching_rate: 0,
        }
    }
}
