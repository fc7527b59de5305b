use std::sync::Arc;

use chrono::Timelike;
use jp_core::dashboard::{quota_percent, DashboardSignals, DashboardState, TimeOfDay};
use jp_core::ports::{ClockPort, JobFeedPort};

use super::DashboardOverviewDto;

/// Use case for the dashboard landing view.
///
/// Reads today's activity and the featured listings from the feed,
/// buckets the local hour, derives the display state and assembles
/// the DTO. `is_first_login` is threaded in by the shell (true right
/// after onboarding completion) rather than persisted anywhere.
pub struct GetDashboardOverview {
    job_feed: Arc<dyn JobFeedPort>,
    clock: Arc<dyn ClockPort>,
}

impl GetDashboardOverview {
    pub fn new(job_feed: Arc<dyn JobFeedPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { job_feed, clock }
    }

    pub async fn execute(
        &self,
        user_name: &str,
        is_first_login: bool,
    ) -> anyhow::Result<DashboardOverviewDto> {
        let activity = self.job_feed.activity().await?;
        let featured_jobs = self.job_feed.featured_jobs().await?;
        let time_of_day = TimeOfDay::from_hour(self.clock.now_local().hour());

        let signals = DashboardSignals {
            is_first_login,
            quota_used: activity.quota_used,
            quota_total: activity.quota_total,
            new_jobs_count: activity.new_jobs_count,
            matching_rate: activity.matching_rate,
        };
        let state = DashboardState::derive(&signals, time_of_day);

        let quota_slots_label = if activity.quota_used >= activity.quota_total {
            "PERFECT ! Objectif éclaté 🎯".to_string()
        } else {
            format!(
                "Super début ! {} slots pour finir en beauté",
                activity.quota_total - activity.quota_used
            )
        };

        Ok(DashboardOverviewDto {
            headline: format!("{} Salut {} ! {}", state.mood, user_name, state.greeting),
            variant: state.variant,
            primary_action: state.primary_action,
            focus: state.focus,
            mood: state.mood,
            time_of_day,
            quota_used: activity.quota_used,
            quota_total: activity.quota_total,
            quota_percent: quota_percent(activity.quota_used, activity.quota_total),
            quota_reset_label: activity.quota_reset_label,
            quota_slots_label,
            new_jobs_count: activity.new_jobs_count,
            candidatures_sent: activity.candidatures_sent,
            matching_rate: activity.matching_rate,
            average_salary: activity.average_salary,
            next_search_label: activity.next_search_label,
            featured_jobs,
        })
    }
}
