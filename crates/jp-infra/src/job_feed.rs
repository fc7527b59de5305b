//! Static in-memory job feed.
//!
//! Serves the hard-coded sample data the dashboard renders today. The
//! shapes match what a future backend API would return; swapping this
//! adapter out is the whole migration.

use async_trait::async_trait;
use chrono::NaiveDate;
use jp_core::jobs::{
    ActivitySnapshot, ApplicationStatus, JobListing, MonthlyStat, SentApplication, StatsSummary,
};
use jp_core::ports::JobFeedPort;

pub struct StaticJobFeed;

#[async_trait]
impl JobFeedPort for StaticJobFeed {
    async fn activity(&self) -> anyhow::Result<ActivitySnapshot> {
        Ok(ActivitySnapshot {
            quota_used: 12,
            quota_total: 15,
            quota_reset_label: "demain à 9h".to_string(),
            new_jobs_count: 14,
            candidatures_sent: 12,
            matching_rate: 89,
            average_salary: "48K€".to_string(),
            next_search_label: "23 min".to_string(),
        })
    }

    async fn featured_jobs(&self) -> anyhow::Result<Vec<JobListing>> {
        Ok(vec![
            listing("1", "GOOGLE France", "Senior React", "52K€", 98, "47min"),
            listing("2", "SPOTIFY", "Frontend Lead", "55K€", 96, "1h23"),
            listing("3", "AIRBNB", "Senior React", "54K€", 98, "47min"),
            listing("4", "BLABLACAR", "Frontend Lead", "53K€", 96, "1h23"),
        ])
    }

    async fn stats_summary(&self) -> anyhow::Result<StatsSummary> {
        Ok(StatsSummary {
            total_applications: 127,
            response_rate: 34,
            average_response_time_days: 5.2,
            matched_offers: 89,
            successful_applications: 23,
            rejected_applications: 45,
            pending_applications: 59,
        })
    }

    async fn monthly_stats(&self) -> anyhow::Result<Vec<MonthlyStat>> {
        Ok(vec![
            MonthlyStat { month: "Jan", applications: 15, responses: 6, matches: 12 },
            MonthlyStat { month: "Fév", applications: 22, responses: 8, matches: 18 },
            MonthlyStat { month: "Mar", applications: 28, responses: 12, matches: 24 },
            MonthlyStat { month: "Avr", applications: 35, responses: 15, matches: 28 },
            MonthlyStat { month: "Mai", applications: 27, responses: 9, matches: 22 },
        ])
    }

    async fn recent_applications(&self) -> anyhow::Result<Vec<SentApplication>> {
        Ok(vec![
            application(
                "1",
                "Google France",
                "Senior React Developer",
                date(2024, 1, 15),
                ApplicationStatus::Interview,
                Some(3),
            ),
            application(
                "2",
                "Spotify",
                "Frontend Lead",
                date(2024, 1, 14),
                ApplicationStatus::Pending,
                None,
            ),
            application(
                "3",
                "Airbnb",
                "Senior React Developer",
                date(2024, 1, 13),
                ApplicationStatus::Rejected,
                Some(7),
            ),
            application(
                "4",
                "BlaBlacar",
                "Frontend Developer",
                date(2024, 1, 12),
                ApplicationStatus::Accepted,
                Some(2),
            ),
            application(
                "5",
                "Deezer",
                "React Developer",
                date(2024, 1, 11),
                ApplicationStatus::Pending,
                None,
            ),
        ])
    }
}

fn listing(
    id: &str,
    company: &str,
    position: &str,
    salary: &str,
    match_percentage: u8,
    posted_time: &str,
) -> JobListing {
    JobListing {
        id: id.to_string(),
        company: company.to_string(),
        position: position.to_string(),
        salary: salary.to_string(),
        match_percentage,
        posted_time: posted_time.to_string(),
    }
}

fn application(
    id: &str,
    company: &str,
    position: &str,
    date: NaiveDate,
    status: ApplicationStatus,
    response_time_days: Option<u8>,
) -> SentApplication {
    SentApplication {
        id: id.to_string(),
        company: company.to_string(),
        position: position.to_string(),
        date,
        status,
        response_time_days,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn activity_stays_within_the_daily_quota() {
        let activity = StaticJobFeed.activity().await.unwrap();
        assert!(activity.quota_used <= activity.quota_total);
        assert_eq!(activity.quota_total, 15);
    }

    #[tokio::test]
    async fn featured_listings_are_sorted_material_for_the_cards() {
        let jobs = StaticJobFeed.featured_jobs().await.unwrap();
        assert_eq!(jobs.len(), 4);
        assert!(jobs.iter().all(|job| job.match_percentage >= 96));
    }

    #[tokio::test]
    async fn summary_counts_add_up() {
        let summary = StaticJobFeed.stats_summary().await.unwrap();
        assert_eq!(
            summary.successful_applications
                + summary.rejected_applications
                + summary.pending_applications,
            summary.total_applications
        );
    }

    #[tokio::test]
    async fn recent_applications_carry_response_times_only_when_answered() {
        let applications = StaticJobFeed.recent_applications().await.unwrap();
        assert_eq!(applications.len(), 5);
        for application in applications {
            match application.status {
                ApplicationStatus::Pending => {
                    assert!(application.response_time_days.is_none())
                }
                _ => assert!(application.response_time_days.is_some()),
            }
        }
    }
}
