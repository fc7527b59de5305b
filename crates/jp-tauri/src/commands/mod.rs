//! Tauri command handlers.

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod onboarding;
pub mod session;

pub use error::map_err;

pub use catalog::get_onboarding_catalog;
pub use dashboard::{get_application_stats, get_dashboard_overview};
pub use onboarding::{
    advance_onboarding, attach_cv, get_onboarding_state, reset_onboarding, retreat_onboarding,
    set_account_fields, set_job_type, set_location, set_profession, set_salary_range,
    toggle_job_board,
};
pub use session::{resolve_session, set_authenticated};
