//! Application dependency grouping.
//!
//! Not a builder: no build steps, no defaults, no hidden logic. Just
//! parameter grouping for App construction. All dependencies are
//! required.

use std::sync::Arc;

use jp_core::ports::{ClockPort, DelayPort, JobFeedPort, SessionStorePort};

/// Everything the use cases need, as trait objects.
pub struct AppDeps {
    /// The one persisted record (the authentication flag)
    pub session_store: Arc<dyn SessionStorePort>,

    /// Mocked activity, listings and statistics
    pub job_feed: Arc<dyn JobFeedPort>,

    /// Local time for greetings and the mood rule
    pub clock: Arc<dyn ClockPort>,

    /// The boot sequence's fixed suspension point
    pub delay: Arc<dyn DelayPort>,
}
