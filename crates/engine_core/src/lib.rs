// crates/engine_core/src/lib.rs

// Logic Modules
pub mod app;
pub mod engine_loop;
pub mod error;
pub mod input;
pub mod inspector;
pub mod logging;

// Internal Implementation Modules
mod renderer;
pub mod gui;
pub mod platform_runner;

// Re-export App so the launcher crate can find it easily
pub use app::{App, AppConfig};
pub use error::HostError;
