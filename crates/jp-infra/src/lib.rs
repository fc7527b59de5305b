//! # jp-infra
//!
//! Infrastructure adapters for JobPilot: the file-backed session
//! store, the system clock, the tokio delay and the static job feed
//! standing in for a future backend API.

pub mod app_dirs;
pub mod clock;
pub mod delay;
pub mod job_feed;
pub mod session_store;

pub use app_dirs::resolve_app_data_dir;
pub use clock::SystemClock;
pub use delay::TokioDelay;
pub use job_feed::StaticJobFeed;
pub use session_store::FileSessionStore;
