// crates/engine_core/src/logging.rs

use std::fs::OpenOptions;
use std::io::Write;

use tracing::{error, Level};

/// Name of the append-only file fatal host errors are copied into.
pub const FATAL_LOG: &str = "engine_fatal.log";

/// Install the global `fmt` subscriber. Returns false if one was already set.
pub fn init(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Report a fatal error and append it to [`FATAL_LOG`] (best effort).
pub fn fatal(message: &str) {
    error!("{message}");
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(FATAL_LOG) {
        let _ = writeln!(file, "{message}");
    }
}
