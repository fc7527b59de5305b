/// Centralized error mapping for commands.
///
/// Single upgrade path for future error-code enhancements at the IPC
/// boundary.
pub fn map_err(err: anyhow::Error) -> String {
    err.to_string()
}
