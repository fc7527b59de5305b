use std::time::Duration;

/// Suspension point abstraction.
///
/// The boot sequence sleeps a fixed duration before resolving the
/// session; tests substitute a no-op implementation.
#[async_trait::async_trait]
pub trait DelayPort: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
