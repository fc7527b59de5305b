//! Dashboard state derivation.
//!
//! Maps the signal vector to a display variant, primary call-to-action
//! copy, emphasized stat card and mood icon. The rules form a priority
//! list: the first matching rule wins, later rules are not independent
//! conditions.

use serde::{Deserialize, Serialize};

use crate::dashboard::signals::DashboardSignals;
use crate::dashboard::time::TimeOfDay;

/// Display variant controlling the dashboard's tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    Welcome,
    Active,
    Completed,
    Paused,
}

/// Which stat card is emphasized first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Quota,
    Matches,
    Stats,
    Settings,
}

/// Fully derived display state; never stored, always recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub variant: DashboardVariant,
    pub primary_action: &'static str,
    pub focus: FocusArea,
    pub mood: &'static str,
    pub greeting: &'static str,
}

impl DashboardState {
    /// Derive the display state from the signals and the time of day.
    ///
    /// Priority list, first match wins:
    /// 1. first login          → Welcome
    /// 2. quota exhausted      → Completed
    /// 3. fresh high matches   → Active, matches emphasized
    /// 4. nothing sent today   → Paused
    /// 5. otherwise            → Active, quota emphasized
    pub fn derive(signals: &DashboardSignals, time_of_day: TimeOfDay) -> Self {
        let (variant, primary_action, focus) = if signals.is_first_login {
            (
                DashboardVariant::Welcome,
                "🚀 Lancer ma recherche",
                FocusArea::Quota,
            )
        } else if signals.quota_used >= signals.quota_total {
            (
                DashboardVariant::Completed,
                "Voir mes candidatures",
                FocusArea::Stats,
            )
        } else if signals.new_jobs_count > 0 && signals.matching_rate >= 85 {
            (
                DashboardVariant::Active,
                "Voir mes meilleurs matchs",
                FocusArea::Matches,
            )
        } else if signals.quota_used == 0 {
            (
                DashboardVariant::Paused,
                "Reprendre la recherche",
                FocusArea::Settings,
            )
        } else {
            (
                DashboardVariant::Active,
                "Voir mon activité",
                FocusArea::Quota,
            )
        };

        Self {
            variant,
            primary_action,
            focus,
            mood: mood_icon(time_of_day, variant),
            greeting: time_of_day.greeting(),
        }
    }
}

/// Mood icon keyed on time of day × variant.
///
/// This is the only mood source: a completed day gets its own icon per
/// period, every other variant shares the period icon.
pub fn mood_icon(time_of_day: TimeOfDay, variant: DashboardVariant) -> &'static str {
    match (time_of_day, variant) {
        (TimeOfDay::Morning, DashboardVariant::Completed) => "🎉",
        (TimeOfDay::Morning, _) => "🌅",
        (TimeOfDay::Afternoon, DashboardVariant::Completed) => "🏆",
        (TimeOfDay::Afternoon, _) => "☀️",
        (TimeOfDay::Evening, DashboardVariant::Completed) => "🌟",
        (TimeOfDay::Evening, _) => "🌙",
    }
}

/// Quota usage for display: `100 × used / total`, rounded to the
/// nearest integer. A zero total displays as 0% rather than producing
/// a non-finite value.
pub fn quota_percent(used: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * f64::from(used) / f64::from(total)).round() as u8
}
