pub mod logging;
pub mod runtime;
pub mod wiring;

pub use runtime::{AppRuntime, UseCases};
pub use wiring::create_runtime;
