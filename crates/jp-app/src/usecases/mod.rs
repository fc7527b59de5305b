//! Use cases.
//!
//! Each use case is a small struct over `Arc<dyn Port>` references
//! with an async `execute()`. Commands construct them through the
//! runtime accessor; tests construct them over hand-rolled mocks.

pub mod dashboard;
pub mod onboarding;
pub mod session;

pub use dashboard::{GetApplicationStats, GetDashboardOverview};
pub use onboarding::OnboardingOrchestrator;
pub use session::{ResolveSession, SetAuthenticated};
