use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use jp_core::ports::JobFeedPort;

use super::{ApplicationStatsDto, RecentApplicationDto};

/// Use case for the detailed statistics view.
pub struct GetApplicationStats {
    job_feed: Arc<dyn JobFeedPort>,
}

impl GetApplicationStats {
    pub fn new(job_feed: Arc<dyn JobFeedPort>) -> Self {
        Self { job_feed }
    }

    pub async fn execute(&self) -> anyhow::Result<ApplicationStatsDto> {
        let summary = self.job_feed.stats_summary().await?;
        let monthly = self.job_feed.monthly_stats().await?;
        let recent = self
            .job_feed
            .recent_applications()
            .await?
            .into_iter()
            .map(|application| RecentApplicationDto {
                company: application.company,
                position: application.position,
                date_label: french_short_date(application.date),
                status: application.status,
                status_label: application.status.label(),
                response_time_days: application.response_time_days,
            })
            .collect();

        Ok(ApplicationStatsDto {
            summary,
            monthly,
            recent,
        })
    }
}

/// Localized short date, e.g. "15 janv.".
///
/// The only date formatting the product does, so a table beats pulling
/// a locale stack in.
fn french_short_date(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ];
    format!("{} {}", date.day(), MONTHS[date.month0() as usize])
}
