//! Application runtime and use-cases accessor.
//!
//! `AppRuntime` is the central point for accessing application
//! dependencies from commands. It wraps `AppDeps` and provides a
//! `usecases()` accessor that wires ports into use cases per call.
//!
//! The onboarding orchestrator is the exception: it is cached here and
//! shared across all commands, so the in-memory wizard state is not
//! reset on every IPC call.

use std::sync::Arc;

use jp_app::usecases::{
    GetApplicationStats, GetDashboardOverview, OnboardingOrchestrator, ResolveSession,
    SetAuthenticated,
};
use jp_app::AppDeps;
use jp_core::config::AppConfig;

pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,
    config: AppConfig,
    /// Cached wizard orchestrator – shared across all Tauri commands so
    /// the in-memory flow is not reset on every call.
    onboarding: Arc<OnboardingOrchestrator>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, config: AppConfig) -> Self {
        let onboarding = Arc::new(OnboardingOrchestrator::new(deps.session_store.clone()));
        Self {
            deps,
            config,
            onboarding,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The shared onboarding wizard state.
    pub fn onboarding(&self) -> &OnboardingOrchestrator {
        &self.onboarding
    }

    /// Use cases with their dependencies pre-wired.
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }
}

/// Accessor constructing use cases over the runtime's dependencies.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl UseCases<'_> {
    pub fn resolve_session(&self) -> ResolveSession {
        ResolveSession::new(
            self.runtime.deps.session_store.clone(),
            self.runtime.deps.delay.clone(),
            self.runtime.config.boot.resolve_delay(),
        )
    }

    pub fn set_authenticated(&self) -> SetAuthenticated {
        SetAuthenticated::new(self.runtime.deps.session_store.clone())
    }

    pub fn get_dashboard_overview(&self) -> GetDashboardOverview {
        GetDashboardOverview::new(
            self.runtime.deps.job_feed.clone(),
            self.runtime.deps.clock.clone(),
        )
    }

    pub fn get_application_stats(&self) -> GetApplicationStats {
        GetApplicationStats::new(self.runtime.deps.job_feed.clone())
    }
}
