//! Job feed port.
//!
//! The dashboard reads everything it shows through this port. The
//! in-memory static implementation serves hard-coded sample data; a
//! real backend API is an explicit non-goal for now but would
//! implement the same contract.

use async_trait::async_trait;

use crate::jobs::{ActivitySnapshot, JobListing, MonthlyStat, SentApplication, StatsSummary};

#[async_trait]
pub trait JobFeedPort: Send + Sync {
    /// Today's automation activity (quota, overnight counters).
    async fn activity(&self) -> anyhow::Result<ActivitySnapshot>;

    /// Top matched listings for the "pépites du jour" cards.
    async fn featured_jobs(&self) -> anyhow::Result<Vec<JobListing>>;

    /// Headline metrics for the detailed statistics view.
    async fn stats_summary(&self) -> anyhow::Result<StatsSummary>;

    /// Monthly application series.
    async fn monthly_stats(&self) -> anyhow::Result<Vec<MonthlyStat>>;

    /// Most recent applications with their statuses.
    async fn recent_applications(&self) -> anyhow::Result<Vec<SentApplication>>;
}
