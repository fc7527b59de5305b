//! Shell boot-sequence tests.
//!
//! The shell shows a loading card, waits the fixed simulated delay,
//! then reveals either the wizard or the dashboard from the persisted
//! flag. These tests drive that sequence against the real adapters
//! under virtual time.

use std::sync::Arc;

use jp_core::config::AppConfig;
use jp_tauri::bootstrap::wiring::build_deps;
use jp_tauri::AppRuntime;
use tempfile::TempDir;
use tokio::time::{Duration, Instant};

fn runtime_in(dir: &TempDir) -> Arc<AppRuntime> {
    Arc::new(AppRuntime::new(
        build_deps(dir.path().to_path_buf()),
        AppConfig::default(),
    ))
}

#[tokio::test(start_paused = true)]
async fn first_boot_waits_one_second_then_shows_the_wizard() {
    let dir = TempDir::new().unwrap();
    let runtime = runtime_in(&dir);

    let start = Instant::now();
    let status = runtime.usecases().resolve_session().execute().await.unwrap();

    // The default boot delay is the whole wait; the store read is
    // instant against an absent file.
    assert_eq!(start.elapsed(), Duration::from_millis(1000));
    assert!(!status.is_authenticated);
}

#[tokio::test(start_paused = true)]
async fn boot_after_a_completed_session_shows_the_dashboard() {
    let dir = TempDir::new().unwrap();

    // A previous run authenticated and exited.
    {
        let runtime = runtime_in(&dir);
        runtime.usecases().set_authenticated().execute(true).await.unwrap();
    }

    // A fresh runtime over the same data dir resolves authenticated.
    let runtime = runtime_in(&dir);
    let status = runtime.usecases().resolve_session().execute().await.unwrap();
    assert!(status.is_authenticated);
}

#[tokio::test(start_paused = true)]
async fn wizard_progress_does_not_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    {
        let runtime = runtime_in(&dir);
        runtime.onboarding().set_location("Paris".into()).await;
        runtime.onboarding().advance().await.unwrap();
        assert_eq!(runtime.onboarding().snapshot().await.cursor, 1);
    }

    // Only the session flag is persisted; the wizard restarts fresh.
    let runtime = runtime_in(&dir);
    let snapshot = runtime.onboarding().snapshot().await;
    assert_eq!(snapshot.cursor, 0);
    assert!(snapshot.answers.location.is_empty());
}
