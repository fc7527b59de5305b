//! # jp-tauri
//!
//! Tauri integration layer for JobPilot.
//!
//! This crate provides:
//! - Tauri command handlers (session, onboarding, dashboard, catalog)
//! - Bootstrap: logging configuration, dependency wiring, the runtime
//!
//! The shell binary at the workspace root assembles the
//! `tauri::Builder` from these pieces.

pub mod bootstrap;
pub mod commands;

pub use bootstrap::{create_runtime, AppRuntime};

/// The complete IPC handler for the shell builder.
///
/// Kept here so the command list lives next to the commands; the shell
/// just plugs it into `tauri::Builder::invoke_handler`.
pub fn invoke_handler<R: tauri::Runtime>(
) -> impl Fn(tauri::ipc::Invoke<R>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        commands::session::resolve_session,
        commands::session::set_authenticated,
        commands::onboarding::get_onboarding_state,
        commands::onboarding::advance_onboarding,
        commands::onboarding::retreat_onboarding,
        commands::onboarding::reset_onboarding,
        commands::onboarding::set_location,
        commands::onboarding::set_job_type,
        commands::onboarding::set_profession,
        commands::onboarding::set_salary_range,
        commands::onboarding::toggle_job_board,
        commands::onboarding::attach_cv,
        commands::onboarding::set_account_fields,
        commands::dashboard::get_dashboard_overview,
        commands::dashboard::get_application_stats,
        commands::catalog::get_onboarding_catalog,
    ]
}
