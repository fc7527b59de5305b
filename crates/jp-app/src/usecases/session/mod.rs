//! Session use cases.
//!
//! The shell decides what to show (onboarding or dashboard) from one
//! persisted boolean, resolved once at boot after a fixed simulated
//! delay, and changed only through the explicit setter.

pub mod resolve_session;
pub mod set_authenticated;

pub use resolve_session::ResolveSession;
pub use set_authenticated::SetAuthenticated;

/// Data transfer object for the resolved session status.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct SessionStatusDto {
    pub is_authenticated: bool,
}
