//! JobPilot shell.
//!
//! Assembles the Tauri application from the pieces in `jp-tauri`:
//! logging, the wired runtime and the IPC handler. The webview carries
//! the marketing front-end; everything behind the IPC boundary lives
//! in the workspace crates.

use log::info;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let runtime = jp_tauri::create_runtime().expect("failed to assemble application runtime");

    let builder = tauri::Builder::default()
        .plugin(jp_tauri::bootstrap::logging::get_builder().build())
        .plugin(tauri_plugin_opener::init());

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
        info!("second instance launch ignored");
    }));

    builder
        .manage(runtime)
        .invoke_handler(jp_tauri::invoke_handler())
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
