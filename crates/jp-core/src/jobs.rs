//! Job listing and application records.
//!
//! Display-only value records served by the job feed port. Today they
//! come from a static in-memory feed; a future backend API serves the
//! same shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A matched job listing shown as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub company: String,
    pub position: String,
    pub salary: String,
    pub match_percentage: u8,
    pub posted_time: String,
}

/// Status of a sent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
    Interview,
}

impl ApplicationStatus {
    /// Badge copy shown in the applications table.
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "⏳ En attente",
            ApplicationStatus::Accepted => "✅ Accepté",
            ApplicationStatus::Rejected => "❌ Refusé",
            ApplicationStatus::Interview => "🎯 Entretien",
        }
    }
}

/// An application sent on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentApplication {
    pub id: String,
    pub company: String,
    pub position: String,
    pub date: NaiveDate,
    pub status: ApplicationStatus,
    pub response_time_days: Option<u8>,
}

/// One month of application activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyStat {
    pub month: &'static str,
    pub applications: u32,
    pub responses: u32,
    pub matches: u32,
}

/// Today's automation activity, as reported by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    pub quota_used: u32,
    pub quota_total: u32,
    /// e.g. "demain à 9h"
    pub quota_reset_label: String,
    pub new_jobs_count: u32,
    pub candidatures_sent: u32,
    /// 0–100
    pub matching_rate: u8,
    /// e.g. "48K€"
    pub average_salary: String,
    /// e.g. "23 min"
    pub next_search_label: String,
}

/// Headline metrics for the detailed statistics view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_applications: u32,
    /// 0–100
    pub response_rate: u8,
    pub average_response_time_days: f32,
    pub matched_offers: u32,
    pub successful_applications: u32,
    pub rejected_applications: u32,
    pub pending_applications: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_cover_every_variant() {
        assert_eq!(ApplicationStatus::Pending.label(), "⏳ En attente");
        assert_eq!(ApplicationStatus::Accepted.label(), "✅ Accepté");
        assert_eq!(ApplicationStatus::Rejected.label(), "❌ Refusé");
        assert_eq!(ApplicationStatus::Interview.label(), "🎯 Entretien");
    }
}
