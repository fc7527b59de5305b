use std::sync::Arc;
use std::time::Duration;

use jp_core::ports::{DelayPort, SessionStorePort};
use tracing::debug;

use super::SessionStatusDto;

/// Use case for the boot sequence.
///
/// Sleeps the configured fixed delay (the loading card), then loads
/// the persisted session flag. The delay always elapses and cannot be
/// cancelled; a missing store resolves to unauthenticated.
pub struct ResolveSession {
    session_store: Arc<dyn SessionStorePort>,
    delay: Arc<dyn DelayPort>,
    boot_delay: Duration,
}

impl ResolveSession {
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        delay: Arc<dyn DelayPort>,
        boot_delay: Duration,
    ) -> Self {
        Self {
            session_store,
            delay,
            boot_delay,
        }
    }

    /// Resolve the session status.
    pub async fn execute(&self) -> anyhow::Result<SessionStatusDto> {
        self.delay.sleep(self.boot_delay).await;

        let session = self.session_store.load().await?;
        debug!(
            is_authenticated = session.is_authenticated,
            "session resolved"
        );

        Ok(SessionStatusDto {
            is_authenticated: session.is_authenticated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use jp_core::session::Session;

    struct MockSessionStore {
        session: Mutex<Option<Session>>,
    }

    impl MockSessionStore {
        fn new(session: Option<Session>) -> Self {
            Self {
                session: Mutex::new(session),
            }
        }
    }

    #[async_trait::async_trait]
    impl SessionStorePort for MockSessionStore {
        async fn load(&self) -> anyhow::Result<Session> {
            Ok(self.session.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save(&self, session: &Session) -> anyhow::Result<()> {
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        async fn reset(&self) -> anyhow::Result<()> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    /// Records how long it was asked to sleep without sleeping.
    struct RecordingDelay {
        slept_ms: AtomicU64,
    }

    impl RecordingDelay {
        fn new() -> Self {
            Self {
                slept_ms: AtomicU64::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl DelayPort for RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.slept_ms
                .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn resolves_unauthenticated_when_nothing_is_persisted() {
        let store = Arc::new(MockSessionStore::new(None));
        let delay = Arc::new(RecordingDelay::new());
        let uc = ResolveSession::new(store, delay, Duration::from_millis(1000));

        let status = uc.execute().await.unwrap();

        assert!(!status.is_authenticated);
    }

    #[tokio::test]
    async fn resolves_the_persisted_flag() {
        let store = Arc::new(MockSessionStore::new(Some(Session {
            is_authenticated: true,
        })));
        let delay = Arc::new(RecordingDelay::new());
        let uc = ResolveSession::new(store, delay, Duration::from_millis(1000));

        let status = uc.execute().await.unwrap();

        assert!(status.is_authenticated);
    }

    #[tokio::test]
    async fn always_waits_the_full_configured_delay() {
        let store = Arc::new(MockSessionStore::new(None));
        let delay = Arc::new(RecordingDelay::new());
        let uc = ResolveSession::new(store, delay.clone(), Duration::from_millis(1000));

        uc.execute().await.unwrap();

        assert_eq!(delay.slept_ms.load(Ordering::SeqCst), 1000);
    }
}
