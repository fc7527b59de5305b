//! Dashboard use cases.
//!
//! Everything shown is derived on demand from the job feed, the clock
//! and the derivation rules in `jp-core`; nothing is cached because
//! recomputation is cheap and total.

pub mod get_overview;
pub mod get_stats;

pub use get_overview::GetDashboardOverview;
pub use get_stats::GetApplicationStats;

use jp_core::dashboard::{DashboardVariant, FocusArea, TimeOfDay};
use jp_core::jobs::{ApplicationStatus, JobListing, MonthlyStat, StatsSummary};

/// Data transfer object for the dashboard landing view.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DashboardOverviewDto {
    /// e.g. "🌅 Salut John ! Ça a bossé cette nuit !"
    pub headline: String,
    pub variant: DashboardVariant,
    pub primary_action: &'static str,
    pub focus: FocusArea,
    pub mood: &'static str,
    pub time_of_day: TimeOfDay,
    pub quota_used: u32,
    pub quota_total: u32,
    pub quota_percent: u8,
    pub quota_reset_label: String,
    /// e.g. "Super début ! 3 slots pour finir en beauté"
    pub quota_slots_label: String,
    pub new_jobs_count: u32,
    pub candidatures_sent: u32,
    pub matching_rate: u8,
    pub average_salary: String,
    pub next_search_label: String,
    pub featured_jobs: Vec<JobListing>,
}

/// Data transfer object for the detailed statistics view.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApplicationStatsDto {
    pub summary: StatsSummary,
    pub monthly: Vec<MonthlyStat>,
    pub recent: Vec<RecentApplicationDto>,
}

/// One row of the recent-applications table.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RecentApplicationDto {
    pub company: String,
    pub position: String,
    /// Localized short date, e.g. "15 janv."
    pub date_label: String,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub response_time_days: Option<u8>,
}
