//! Logging configuration for JobPilot.
//!
//! Provides the logging builder configured for both development and
//! production environments, following the Tauri plugin logging
//! conventions.
//!
//! - **Development**: Debug level, outputs to the webview console
//! - **Production**: Info level, outputs to log file + stdout

use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Create the logging builder.
///
/// Filters noise from Tauri internals and the underlying webview
/// library; the returned builder is passed to `.plugin()` in the shell.
pub fn get_builder() -> tauri_plugin_log::Builder {
    let is_dev = is_development();
    let default_log_level = if is_dev {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = tauri_plugin_log::Builder::new()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(default_log_level)
        .filter(move |metadata| {
            // Skip tauri internal event logs (app::emit, window::emit, …)
            // and wry noise from the underlying webview library.
            let is_basic_noise = metadata.target().starts_with("tauri::")
                || metadata.target().starts_with("tracing::")
                || metadata.target().contains("tauri-")
                || metadata.target().starts_with("wry::");

            if is_dev {
                // Development: keep ipc::request logs for debugging
                !is_basic_noise
            } else {
                !is_basic_noise && !metadata.target().contains("ipc::request")
            }
        });

    builder = if is_dev {
        builder.targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::Webview),
        ])
    } else {
        builder.targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::LogDir { file_name: None }),
        ])
    };

    builder
}
